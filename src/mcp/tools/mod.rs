//! MCP Tools module - defines tools exposed via JSON-RPC.

pub mod purchase_order;
pub mod registry;

pub use registry::{ToolDescriptor, ToolRegistry};
