//! # Grapevine SDK
//!
//! Read-only Rust client for the Staffbase intranet REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grapevine_sdk::{StaffbaseClient, StaffbaseResult};
//!
//! #[tokio::main]
//! async fn main() -> StaffbaseResult<()> {
//!     let client = StaffbaseClient::builder()
//!         .base_url("https://app.staffbase.com")
//!         .api_key("base64-id-and-secret")
//!         .build()?;
//!
//!     for space in client.spaces().list(true).await? {
//!         println!("{:?} {}", space.id, space.name);
//!     }
//!
//!     let posts = client.posts().global(20, 0).await?;
//!     println!("Found {} posts", posts.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use api::{DEFAULT_POST_LIMIT, DEFAULT_SEARCH_LIMIT};
pub use client::{StaffbaseClient, StaffbaseClientBuilder};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{StaffbaseError, StaffbaseResult};
pub use models::{ListOrEnvelope, Localized, LocalizedContent, NewsNode, Page, Post, Space};
