// Standalone MCP server binary

use anyhow::Result;
use clap::{Parser, ValueEnum};
use grapevine_mcp::framing::DEFAULT_MAX_LINE_LENGTH;
use grapevine_mcp::{Dispatcher, McpServer, Settings};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "grapevine-mcp")]
#[command(about = "Read-only Staffbase intranet tools over MCP (stdio)", long_about = None)]
struct Args {
    /// Staffbase instance URL, e.g. https://app.staffbase.com
    #[arg(long, env = "STAFFBASE_URL")]
    staffbase_url: Option<String>,

    /// Base64-encoded Basic-auth token (id:secret)
    #[arg(long, env = "STAFFBASE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Timeout for each Staffbase request, in seconds
    #[arg(long, env = "STAFFBASE_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Longest accepted request line, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_bytes: usize,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false);
    match args.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    tracing::info!("Grapevine MCP Server starting...");

    let settings = Settings::new(args.staffbase_url, args.api_key)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if settings.credentials().is_err() {
        tracing::warn!(
            "STAFFBASE_URL or STAFFBASE_API_KEY is not set; every tool call will return an error"
        );
    }

    let dispatcher = Dispatcher::new(settings);
    tracing::info!("Registered {} tools", dispatcher.list_tools().len());

    let server = McpServer::new(dispatcher).with_max_line_length(args.max_line_bytes);
    server.start().await?;

    Ok(())
}
