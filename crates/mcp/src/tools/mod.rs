pub mod channels;
pub mod news;
pub mod pages;
pub mod search;
pub mod spaces;
mod registry;

pub use channels::{extract_channels, ChannelEntry, ListChannelsTool};
pub use news::{GetNewsTool, NewsSummary};
pub use pages::{GetPageTool, PageView};
pub use registry::{
    json_schema_integer, json_schema_object, json_schema_string, parse_arguments, truncate_chars,
    Tool, ToolRegistry,
};
pub use search::SearchTool;
pub use spaces::{ListSpacesTool, SpaceSummary};

use std::sync::Arc;

/// The Staffbase tool catalog, in the order it is advertised.
pub fn staffbase_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListSpacesTool));
    registry.register(Arc::new(GetNewsTool));
    registry.register(Arc::new(ListChannelsTool));
    registry.register(Arc::new(GetPageTool));
    registry.register(Arc::new(SearchTool));
    registry
}
