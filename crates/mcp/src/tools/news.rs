// get_news: recent posts from the global branch or one channel

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, parse_arguments, truncate_chars,
    Tool,
};
use grapevine_sdk::{Post, StaffbaseClient};
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 10;
const TEASER_MAX_CHARS: usize = 200;

/// Tool fetching recent news posts
pub struct GetNewsTool;

#[derive(Debug, Deserialize)]
struct GetNewsArgs {
    #[serde(default)]
    channel_id: Option<String>,
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsSummary {
    pub id: serde_json::Value,
    pub title: String,
    pub teaser: String,
    pub published: serde_json::Value,
    pub locale: String,
}

impl From<Post> for NewsSummary {
    fn from(post: Post) -> Self {
        let (locale, content) = post
            .contents
            .representative()
            .map(|(locale, content)| (locale.to_string(), content))
            .unwrap_or_default();

        Self {
            id: post.id,
            title: content.title,
            teaser: truncate_chars(&content.teaser, TEASER_MAX_CHARS),
            published: post.published_at,
            locale,
        }
    }
}

#[async_trait::async_trait]
impl Tool for GetNewsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_news".to_string(),
            description: "Fetch recent news posts. Without a channel_id, returns global posts. \
                With a channel_id (installation ID), returns posts from that local channel."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "channel_id": json_schema_string("Optional channel installation ID for local news."),
                    "limit": json_schema_integer("Max posts to return (default 10).", DEFAULT_LIMIT)
                }),
                vec![],
            ),
        }
    }

    async fn execute(
        &self,
        client: &StaffbaseClient,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let args: GetNewsArgs = parse_arguments("get_news", arguments)?;
        let limit = args.limit.unwrap_or(DEFAULT_LIMIT);

        let posts = match args.channel_id.as_deref().filter(|id| !id.is_empty()) {
            Some(channel_id) => client
                .posts()
                .channel(channel_id, limit, 0)
                .await?
                .into_list()
                .unwrap_or_default(),
            None => client.posts().global(limit, 0).await?,
        };

        let news: Vec<NewsSummary> = posts
            .into_iter()
            .take(limit as usize)
            .map(NewsSummary::from)
            .collect();

        Ok(serde_json::to_value(news)?)
    }
}
