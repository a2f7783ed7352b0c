// list_channels: flatten a space's news menu into its news channels

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, json_schema_string, parse_arguments, Tool};
use grapevine_sdk::{NewsNode, StaffbaseClient};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Folders nested deeper than this are not descended into.
///
/// Each menu level costs two nesting levels in the JSON (the node object and
/// its `children` array), and `serde_json` rejects input nested deeper than
/// 128, so this sits well inside what a parsed response can hold.
const MAX_TREE_DEPTH: usize = 32;

/// Tool listing the news channels of a space
pub struct ListChannelsTool;

#[derive(Debug, Deserialize)]
struct ListChannelsArgs {
    space_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelEntry {
    pub name: String,
    pub installation_id: serde_json::Value,
}

impl ChannelEntry {
    fn from_node(node: &NewsNode) -> Self {
        let localized_title = node
            .contents
            .representative()
            .map(|(_, content)| content.title)
            .unwrap_or_default();

        let name = if localized_title.is_empty() {
            node.title
                .as_ref()
                .and_then(|t| t.as_str())
                .unwrap_or_default()
                .to_string()
        } else {
            localized_title
        };

        let installation_id = node
            .installation_id
            .clone()
            .or_else(|| node.id.clone())
            .unwrap_or_else(|| serde_json::Value::String(String::new()));

        Self {
            name,
            installation_id,
        }
    }
}

/// Collect every `news` node of the tree, depth-first, each node before its
/// children and earlier siblings before later ones.
///
/// A `news` node that also has children contributes itself and is still
/// descended into.
pub fn extract_channels(roots: &[NewsNode]) -> Vec<ChannelEntry> {
    let mut channels = Vec::new();
    let mut stack: Vec<(&NewsNode, usize)> = roots.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if node.is_channel() {
            channels.push(ChannelEntry::from_node(node));
        }

        if node.children.is_empty() {
            continue;
        }
        if depth >= MAX_TREE_DEPTH {
            warn!(depth, "News menu nested too deeply, skipping children");
            continue;
        }
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    channels
}

#[async_trait::async_trait]
impl Tool for ListChannelsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_channels".to_string(),
            description: "List news channels available in a space. Returns channel names and \
                installation IDs that can be used with get_news."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "space_id": json_schema_string("The space ID to list channels for.")
                }),
                vec!["space_id"],
            ),
        }
    }

    async fn execute(
        &self,
        client: &StaffbaseClient,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let args: ListChannelsArgs = parse_arguments("list_channels", arguments)?;

        let tree = client.spaces().news(&args.space_id).await?;

        Ok(serde_json::to_value(extract_channels(&tree))?)
    }
}
