// Errors raised while dispatching a tool call

use grapevine_sdk::StaffbaseError;

/// Message used when Staffbase credentials are not configured.
pub const MISSING_CREDENTIALS: &str =
    "STAFFBASE_URL and STAFFBASE_API_KEY environment variables are required.";

/// Failure of a single tool call. Converted to an `{"error": ...}` payload
/// at the `tools/call` boundary, never to a protocol error.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Credentials missing; raised before any network call.
    #[error("{0}")]
    Config(String),

    /// The Staffbase request failed (transport, timeout, or non-2xx status).
    #[error(transparent)]
    Upstream(#[from] StaffbaseError),

    /// A required argument is absent or has the wrong type.
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    /// The upstream payload could not be reshaped.
    #[error("Invalid {what} in Staffbase response")]
    InvalidResponse { what: String },

    /// Serializing the tool output failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub fn missing_credentials() -> Self {
        Self::Config(MISSING_CREDENTIALS.to_string())
    }
}
