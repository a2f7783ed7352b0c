// Tool trait, the ordered tool catalog, and schema helpers

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use grapevine_sdk::StaffbaseClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// A Staffbase-backed tool
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Run the tool against a client built for this call and return the
    /// reshaped output.
    async fn execute(
        &self,
        client: &StaffbaseClient,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError>;
}

/// Tool registry; keeps tools in registration order.
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any tool with the same name in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.tools.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = tool,
            None => self.tools.push((name, tool)),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, tool)| tool.clone())
    }

    /// List all tool schemas, in registration order
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|(_, t)| t.schema()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize tool arguments; `null` counts as an empty object.
pub fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    if required.is_empty() {
        return serde_json::json!({
            "type": "object",
            "properties": properties
        });
    }
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str, default: u32) -> serde_json::Value {
    serde_json::json!({
        "type": "integer",
        "description": description,
        "default": default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Args {
        page_id: String,
        #[serde(default)]
        limit: Option<u32>,
    }

    #[test]
    fn test_parse_arguments_missing_required() {
        let err = parse_arguments::<Args>("get_page", json!({})).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid arguments for get_page"));
        assert!(message.contains("page_id"));
    }

    #[test]
    fn test_parse_arguments_null_is_empty_object() {
        #[derive(Debug, Deserialize)]
        struct Optional {
            #[serde(default)]
            limit: Option<u32>,
        }
        let args: Optional = parse_arguments("get_news", serde_json::Value::Null).unwrap();
        assert!(args.limit.is_none());

        let args: Args = parse_arguments("get_page", json!({"page_id": "7", "limit": 3})).unwrap();
        assert_eq!(args.page_id, "7");
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars(&"x".repeat(500), 200).chars().count(), 200);
    }

    #[test]
    fn test_schema_object_required() {
        let schema =
            json_schema_object(json!({"q": json_schema_string("Search query.")}), vec!["q"]);
        assert_eq!(schema["required"], json!(["q"]));

        let open = json_schema_object(json!({}), vec![]);
        assert!(open.get("required").is_none());
    }
}
