//! MCP (Model Context Protocol) Module
//!
//! Exposes purchase-order generation as a tool over stateless JSON-RPC 2.0.

pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
