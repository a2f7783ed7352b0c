// MCP (Model Context Protocol) server exposing read-only Staffbase data as tools

pub mod dispatch;
pub mod error;
pub mod framing;
pub mod protocol;
pub mod server;
pub mod settings;
pub mod tools;

pub use dispatch::Dispatcher;
pub use error::ToolError;
pub use server::McpServer;
pub use settings::Settings;
