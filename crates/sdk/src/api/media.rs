//! Media download endpoint.

use crate::client::StaffbaseClient;
use crate::error::StaffbaseResult;
use bytes::Bytes;

/// Media API for binary files (PDFs, images).
pub struct MediaApi<'a> {
    client: &'a StaffbaseClient,
}

impl<'a> MediaApi<'a> {
    pub(crate) fn new(client: &'a StaffbaseClient) -> Self {
        Self { client }
    }

    /// Download a media file.
    ///
    /// `media_path` is either a full `/api/...` path or the part after
    /// `/api/`, e.g. `media/secure/external/v2/raw/upload/<id>.pdf`.
    pub async fn download(&self, media_path: &str) -> StaffbaseResult<Bytes> {
        self.client.http.get_bytes(&api_path(media_path)).await
    }
}

fn api_path(media_path: &str) -> String {
    if media_path.starts_with("/api/") {
        media_path.to_string()
    } else {
        format!("/api/{}", media_path.trim_start_matches('/'))
    }
}
