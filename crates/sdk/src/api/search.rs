//! Search API endpoints.

use crate::client::StaffbaseClient;
use crate::error::StaffbaseResult;
use serde::Serialize;
use serde_json::Value;

/// Default number of search hits.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Full-text search across Staffbase content.
pub struct SearchApi<'a> {
    client: &'a StaffbaseClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a StaffbaseClient) -> Self {
        Self { client }
    }

    /// Run a search. The response is returned untouched.
    pub async fn query(&self, query: &str, limit: u32) -> StaffbaseResult<Value> {
        self.client
            .http
            .get_with_query("/api/search", &SearchQuery { q: query, limit })
            .await
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery<'q> {
    q: &'q str,
    limit: u32,
}
