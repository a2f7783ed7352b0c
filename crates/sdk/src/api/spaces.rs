//! Spaces API endpoints.

use crate::client::StaffbaseClient;
use crate::error::{StaffbaseError, StaffbaseResult};
use crate::models::{ListOrEnvelope, NewsNode, Space};
use serde::Serialize;

/// Spaces API for locations / sub-instances and their news menus.
pub struct SpacesApi<'a> {
    client: &'a StaffbaseClient,
}

impl<'a> SpacesApi<'a> {
    pub(crate) fn new(client: &'a StaffbaseClient) -> Self {
        Self { client }
    }

    /// List all spaces.
    pub async fn list(&self, include_hidden: bool) -> StaffbaseResult<Vec<Space>> {
        let response: ListOrEnvelope<Space> = self
            .client
            .http
            .get_with_query("/api/spaces", &ListSpacesQuery { include_hidden })
            .await?;
        response
            .into_list()
            .ok_or_else(|| unexpected("/api/spaces"))
    }

    /// Get the news-menu tree of a space (channels and folders).
    pub async fn news(&self, space_id: &str) -> StaffbaseResult<Vec<NewsNode>> {
        let path = format!("/api/spaces/{}/news", space_id);
        let response: ListOrEnvelope<NewsNode> = self.client.http.get(&path).await?;
        response.into_list().ok_or_else(|| unexpected(&path))
    }
}

fn unexpected(endpoint: &str) -> StaffbaseError {
    StaffbaseError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        reason: "expected a list or a data envelope".to_string(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListSpacesQuery {
    include_hidden: bool,
}
