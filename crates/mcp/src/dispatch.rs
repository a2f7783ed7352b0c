// Tool-call dispatch: resolve credentials, run one tool, serialize the output

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::settings::Settings;
use crate::tools::{staffbase_registry, ToolRegistry};
use std::sync::Arc;
use tracing::{debug, error};

/// Routes `tools/call` requests to the Staffbase tools.
pub struct Dispatcher {
    settings: Arc<Settings>,
    registry: ToolRegistry,
}

impl Dispatcher {
    /// Dispatcher over the standard Staffbase catalog.
    pub fn new(settings: Settings) -> Self {
        Self::with_registry(settings, staffbase_registry())
    }

    pub fn with_registry(settings: Settings, registry: ToolRegistry) -> Self {
        Self {
            settings: Arc::new(settings),
            registry,
        }
    }

    /// The advertised tool catalog.
    pub fn list_tools(&self) -> Vec<ToolSchema> {
        self.registry.list_schemas()
    }

    /// Run one tool call and return its output as indented JSON.
    ///
    /// Credentials are checked first, so a misconfigured process fails every
    /// call (unknown tools included) before touching the network. An unknown
    /// tool name is not an error: it yields `{"error": "Unknown tool: ..."}`.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, ToolError> {
        let client = self.settings.client()?;

        let output = match self.registry.get(name) {
            Some(tool) => {
                debug!(tool = name, "Dispatching tool call");
                tool.execute(&client, arguments).await?
            }
            None => serde_json::json!({ "error": format!("Unknown tool: {}", name) }),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    /// `tools/call` boundary: failures become an `{"error": ...}` text payload
    /// in an otherwise successful result.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        let text = match self.dispatch(name, arguments).await {
            Ok(text) => text,
            Err(err) => {
                error!(tool = name, error = %err, "Tool call failed");
                error_payload(&err)
            }
        };
        CallToolResult::text(text)
    }
}

fn error_payload(err: &ToolError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}
