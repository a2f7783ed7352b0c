//! Posts (news) API endpoints.

use crate::client::StaffbaseClient;
use crate::error::StaffbaseResult;
use crate::models::{ListOrEnvelope, Post};
use serde::Serialize;
use tracing::warn;

/// Default page size for post listings.
pub const DEFAULT_POST_LIMIT: u32 = 20;

/// Posts API for global and channel news.
pub struct PostsApi<'a> {
    client: &'a StaffbaseClient,
}

impl<'a> PostsApi<'a> {
    pub(crate) fn new(client: &'a StaffbaseClient) -> Self {
        Self { client }
    }

    /// Fetch posts from the global branch.
    ///
    /// A payload that is neither a list nor a `data` envelope yields no posts.
    pub async fn global(&self, limit: u32, offset: u32) -> StaffbaseResult<Vec<Post>> {
        let response: ListOrEnvelope<Post> = self
            .client
            .http
            .get_with_query("/api/posts", &PageQuery { limit, offset })
            .await?;

        Ok(response.into_list().unwrap_or_else(|| {
            warn!("Global posts response had an unexpected shape");
            Vec::new()
        }))
    }

    /// Fetch posts from a channel, by installation ID.
    ///
    /// The response is returned as-is; call [`ListOrEnvelope::into_list`].
    pub async fn channel(
        &self,
        channel_id: &str,
        limit: u32,
        offset: u32,
    ) -> StaffbaseResult<ListOrEnvelope<Post>> {
        self.client
            .http
            .get_with_query(
                &format!("/api/channels/{}/posts", channel_id),
                &PageQuery { limit, offset },
            )
            .await
    }
}

#[derive(Debug, Serialize)]
struct PageQuery {
    limit: u32,
    offset: u32,
}

#[cfg(test)]
mod tests {
    use crate::client::StaffbaseClient;
    use crate::models::ListOrEnvelope;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> StaffbaseClient {
        StaffbaseClient::builder()
            .base_url(server.uri())
            .api_key("a2V5")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_global_posts_paging() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .and(query_param("limit", "20"))
            .and(query_param("offset", "40"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "p1", "publishedAt": "2024-05-01T10:00:00Z"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client(&server).posts().global(20, 40).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].published_at, json!("2024-05-01T10:00:00Z"));
    }

    #[tokio::test]
    async fn test_global_posts_odd_shape_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "n/a"})))
            .mount(&server)
            .await;

        let posts = client(&server).posts().global(10, 0).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_channel_posts_raw() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/channels/inst-9/posts"))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "a"}, {"id": "b"}],
                "total": 2
            })))
            .mount(&server)
            .await;

        let response = client(&server).posts().channel("inst-9", 5, 0).await.unwrap();
        assert!(matches!(response, ListOrEnvelope::Envelope { .. }));
        assert_eq!(response.into_list().unwrap().len(), 2);
    }
}
