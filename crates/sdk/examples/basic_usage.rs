//! Basic SDK usage example.
//!
//! Lists spaces, the channels of the first space, and the latest global posts.
//!
//! Run with:
//! STAFFBASE_URL=https://app.staffbase.com STAFFBASE_API_KEY=... cargo run --example basic_usage

use grapevine_sdk::{StaffbaseClient, StaffbaseError, StaffbaseResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> StaffbaseResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("STAFFBASE_URL")
        .map_err(|_| StaffbaseError::Config("STAFFBASE_URL is not set".to_string()))?;
    let api_key = std::env::var("STAFFBASE_API_KEY")
        .map_err(|_| StaffbaseError::Config("STAFFBASE_API_KEY is not set".to_string()))?;

    let client = StaffbaseClient::builder()
        .base_url(base_url)
        .api_key(api_key)
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("Listing spaces...");
    let spaces = client.spaces().list(true).await?;
    println!("Found {} spaces", spaces.len());

    for space in spaces.iter().take(5) {
        println!("  Space: {} ({:?})", space.name, space.id);
    }

    if let Some(space_id) = spaces
        .first()
        .and_then(|s| s.id.as_ref())
        .and_then(|id| id.as_str())
    {
        println!("\nNews menu of space {}...", space_id);
        let tree = client.spaces().news(space_id).await?;
        for node in &tree {
            println!(
                "  {} ({} children)",
                node.node_type.as_deref().unwrap_or("?"),
                node.children.len()
            );
        }
    }

    println!("\nLatest global posts...");
    for post in client.posts().global(5, 0).await? {
        let title = post
            .contents
            .representative()
            .map(|(_, content)| content.title)
            .unwrap_or_default();
        println!("  {} {}", post.published_at, title);
    }

    Ok(())
}
