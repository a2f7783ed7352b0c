// search: full-text search, response passed through untouched

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, parse_arguments, Tool,
};
use grapevine_sdk::{StaffbaseClient, DEFAULT_SEARCH_LIMIT};
use serde::Deserialize;

/// Tool running a full-text search
pub struct SearchTool;

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    limit: Option<u32>,
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search".to_string(),
            description: "Full-text search across all Staffbase content.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string("Search query."),
                    "limit": json_schema_integer("Max results (default 10).", DEFAULT_SEARCH_LIMIT)
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(
        &self,
        client: &StaffbaseClient,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let args: SearchArgs = parse_arguments("search", arguments)?;
        let limit = args.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

        Ok(client.search().query(&args.query, limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_passthrough() {
        let server = MockServer::start().await;
        let body = json!({
            "total": 2,
            "results": [
                {"id": "p1", "type": "post", "created": "2024-02-02T10:00:00Z"},
                {"id": "pg", "type": "page", "score": 0.5}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("q", "canteen"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let output = SearchTool
            .execute(&client(&server), json!({"query": "canteen", "limit": 3}))
            .await
            .unwrap();

        assert_eq!(output, body);
    }

    #[tokio::test]
    async fn test_search_default_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        SearchTool
            .execute(&client(&server), json!({"query": "x"}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_query_required() {
        let server = MockServer::start().await;

        let result = SearchTool.execute(&client(&server), json!({"limit": 3})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
    }
}
