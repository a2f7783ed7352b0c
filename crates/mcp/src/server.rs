// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::dispatch::Dispatcher;
use crate::framing::{MessageCodec, DEFAULT_MAX_LINE_LENGTH};
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    DEFAULT_PROTOCOL_VERSION,
};
use anyhow::Result;
use futures_util::StreamExt;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::FramedRead;
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "grapevine-mcp";

pub const INSTRUCTIONS: &str = "\
Grapevine MCP: unofficial read-only access to Staffbase intranet data.

Available tools let you browse spaces, read news posts (global and local
channels), view pages, search content, and list available news channels.
All operations are read-only.
";

pub struct McpServer {
    dispatcher: Dispatcher,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Longest request line accepted; longer lines get a parse error.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        info!("MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read line by line from `reader`, answering on `writer`.
    ///
    /// A line that is too long or not UTF-8 is answered with a parse error and
    /// the loop moves on. Only I/O errors end it early.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, MessageCodec::new(self.max_line_length));

        while let Some(frame) = lines.next().await {
            let response = match frame? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(&line).await,
                Err(e) => {
                    warn!(error = %e, "Unreadable JSON-RPC message");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
            };

            if let Some(response) = response {
                let mut output = serde_json::to_string(&response)?;
                output.push('\n');
                writer.write_all(output.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("stdin closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw input line. `None` means nothing is written back.
    ///
    /// Text that is not JSON is a parse error. JSON that is not a request
    /// object is an invalid request, answered with its `id` when it has one.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Unparsable JSON-RPC message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "Malformed JSON-RPC request");
                Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()))
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Notifications never get a response
        let Some(id) = request.id else {
            debug!(method = %request.method, "Notification received");
            return None;
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.dispatcher.list_tools(),
            }),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params).map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e))
            })?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        to_result(&InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e))
                })
            })?;

        let result = self
            .dispatcher
            .call_tool(&params.name, params.arguments)
            .await;
        to_result(&result)
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
