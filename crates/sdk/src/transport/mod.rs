//! Transport layer for the Grapevine SDK.

pub mod http;

pub use http::HttpTransport;
