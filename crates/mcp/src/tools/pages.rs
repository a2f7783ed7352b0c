// get_page: one page in its first listed locale

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, json_schema_string, parse_arguments, truncate_chars, Tool};
use grapevine_sdk::{Page, StaffbaseClient};
use serde::{Deserialize, Serialize};

const CONTENT_MAX_CHARS: usize = 5000;

/// Tool fetching a page by ID
pub struct GetPageTool;

#[derive(Debug, Deserialize)]
struct GetPageArgs {
    page_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub id: serde_json::Value,
    pub title: String,
    pub content: String,
    pub locale: String,
    pub updated: serde_json::Value,
}

impl From<Page> for PageView {
    fn from(page: Page) -> Self {
        let (locale, content) = page
            .contents
            .representative()
            .map(|(locale, content)| (locale.to_string(), content))
            .unwrap_or_default();

        Self {
            id: page.id,
            title: content.title,
            content: truncate_chars(&content.content, CONTENT_MAX_CHARS),
            locale,
            updated: page.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl Tool for GetPageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_page".to_string(),
            description: "Fetch a Staffbase page by its ID. Returns title and HTML content."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_id": json_schema_string("The page ID.")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn execute(
        &self,
        client: &StaffbaseClient,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let args: GetPageArgs = parse_arguments("get_page", arguments)?;

        let page = client.pages().get(&args.page_id).await?;

        Ok(serde_json::to_value(PageView::from(page))?)
    }
}
