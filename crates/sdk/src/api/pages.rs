//! Pages API endpoints.

use crate::client::StaffbaseClient;
use crate::error::StaffbaseResult;
use crate::models::Page;

/// Pages API.
pub struct PagesApi<'a> {
    client: &'a StaffbaseClient,
}

impl<'a> PagesApi<'a> {
    pub(crate) fn new(client: &'a StaffbaseClient) -> Self {
        Self { client }
    }

    /// Get a single page by ID.
    pub async fn get(&self, page_id: &str) -> StaffbaseResult<Page> {
        self.client
            .http
            .get(&format!("/api/pages/{}", page_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::StaffbaseClient;
    use crate::error::StaffbaseError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/pages/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "42",
                "contents": {"en": {"title": "Hi", "content": "Body"}},
                "updatedAt": "2024-01-01"
            })))
            .mount(&server)
            .await;

        let client = StaffbaseClient::builder()
            .base_url(server.uri())
            .api_key("a2V5")
            .build()
            .unwrap();

        let page = client.pages().get("42").await.unwrap();
        assert_eq!(page.id, json!("42"));
        assert_eq!(page.updated_at, json!("2024-01-01"));
        assert_eq!(page.contents.representative().unwrap().0, "en");
    }

    #[tokio::test]
    async fn test_get_page_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/pages/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("page not found"))
            .mount(&server)
            .await;

        let client = StaffbaseClient::builder()
            .base_url(server.uri())
            .api_key("a2V5")
            .build()
            .unwrap();

        match client.pages().get("missing").await {
            Err(StaffbaseError::Api { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "page not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
