// list_spaces: every space as {id, name}

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, Tool};
use grapevine_sdk::StaffbaseClient;
use serde::Serialize;

/// Tool listing all spaces (locations / sub-instances)
pub struct ListSpacesTool;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceSummary {
    pub id: serde_json::Value,
    pub name: String,
}

#[async_trait::async_trait]
impl Tool for ListSpacesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_spaces".to_string(),
            description: "List all Staffbase spaces (locations / sub-instances).".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(
        &self,
        client: &StaffbaseClient,
        _arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let spaces = client.spaces().list(true).await?;

        let summaries = spaces
            .into_iter()
            .map(|space| {
                let id = space.id.ok_or_else(|| ToolError::InvalidResponse {
                    what: "space without id".to_string(),
                })?;
                Ok(SpaceSummary {
                    id,
                    name: space.name,
                })
            })
            .collect::<Result<Vec<_>, ToolError>>()?;

        Ok(serde_json::to_value(summaries)?)
    }
}
