//! MCP Service - core JSON-RPC 2.0 request handler.

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::mcp::rpc::{OutboundResponse, RpcRequest, INVALID_REQUEST, JSONRPC_VERSION};
use crate::mcp::tools::{ToolDescriptor, ToolRegistry};
use crate::AppState;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Clone)]
pub struct McpService {
    registry: Arc<ToolRegistry>,
}

impl McpService {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Handle one request. Notifications yield `None`.
    pub async fn handle_request(
        &self,
        request: RpcRequest,
        app_state: &AppState,
    ) -> Option<OutboundResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(OutboundResponse::error(
                request.id,
                INVALID_REQUEST,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "tools/list" => Some(self.handle_list_tools(id)),
            "tools/call" => Some(self.handle_call_tool(id, params, app_state).await),
            "ping" => Some(OutboundResponse::success(id, json!({}))),
            method if method.starts_with("notifications/") => {
                info!("received client notification: {}", method);
                None
            }
            other => Some(OutboundResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!(
            "client requested initialization: {} v{}",
            parsed.client_info.name,
            parsed.client_info.version.as_deref().unwrap_or("unknown")
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION,
            server_info: ImplementationInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                title: "Purchase Order Document Server",
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
        };

        to_success(id, &result)
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListToolsResult {
            tools: self.registry.list_tools(),
        };
        to_success(id, &payload)
    }

    async fn handle_call_tool(
        &self,
        id: Option<Value>,
        params: Option<Value>,
        app_state: &AppState,
    ) -> OutboundResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        let result = self
            .registry
            .call_tool(&parsed.name, parsed.arguments, app_state)
            .await;
        to_success(id, &result)
    }
}

#[derive(Debug, Deserialize)]
struct InitializeParams {
    #[serde(rename = "clientInfo")]
    client_info: ClientInfo,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: &'static str,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: &'static str,
    version: &'static str,
    title: &'static str,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
struct ToolsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    serde_json::from_value(params.unwrap_or(Value::Null)).map_err(|err| err.to_string())
}

fn to_success<T: Serialize>(id: Option<Value>, payload: &T) -> OutboundResponse {
    match serde_json::to_value(payload) {
        Ok(value) => OutboundResponse::success(id, value),
        Err(err) => OutboundResponse::error(id, -32603, format!("Failed to encode result: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn request(method: &str, params: Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params: Some(params),
            id: Some(json!(1)),
        }
    }

    #[tokio::test]
    async fn test_tools_list_contains_generator() {
        let service = McpService::new(ToolRegistry::new());
        let state = AppState::new(&ServerConfig::default());

        let response = service
            .handle_request(request("tools/list", json!({})), &state)
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["tools"][0]["name"], "generate_purchase_order");
    }

    #[tokio::test]
    async fn test_tools_call_renders_current_form() {
        let service = McpService::new(ToolRegistry::new());
        let state = AppState::new(&ServerConfig::default());

        let response = service
            .handle_request(
                request("tools/call", json!({ "name": "generate_purchase_order" })),
                &state,
            )
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][1]["type"], "resource");
        assert_eq!(
            result["content"][1]["metadata"]["filename"],
            "PurchaseOrder.docx"
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_result() {
        let service = McpService::new(ToolRegistry::new());
        let state = AppState::new(&ServerConfig::default());

        let response = service
            .handle_request(request("tools/call", json!({ "name": "nope" })), &state)
            .await
            .unwrap();

        assert_eq!(response.result.unwrap()["isError"], true);
    }

    #[tokio::test]
    async fn test_notifications_have_no_response() {
        let service = McpService::new(ToolRegistry::new());
        let state = AppState::new(&ServerConfig::default());

        let response = service
            .handle_request(request("notifications/initialized", json!({})), &state)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_wrong_version_rejected() {
        let service = McpService::new(ToolRegistry::new());
        let state = AppState::new(&ServerConfig::default());
        let mut req = request("ping", json!({}));
        req.jsonrpc = "1.0".to_string();

        let response = service.handle_request(req, &state).await.unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }
}
