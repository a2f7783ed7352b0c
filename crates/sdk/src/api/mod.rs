//! API endpoint modules for the Grapevine SDK.

mod media;
mod pages;
mod posts;
mod search;
mod spaces;

pub use media::MediaApi;
pub use pages::PagesApi;
pub use posts::{PostsApi, DEFAULT_POST_LIMIT};
pub use search::{SearchApi, DEFAULT_SEARCH_LIMIT};
pub use spaces::SpacesApi;
