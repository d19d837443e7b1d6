//! Stateless MCP HTTP handler for Actix-Web.
//!
//! Each POST carries one JSON-RPC request; no session is kept between calls.

use actix_web::{web, HttpResponse, Responder};

use crate::mcp::rpc::RpcRequest;
use crate::mcp::service::McpService;
use crate::AppState;

pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(
    mcp: web::Data<McpState>,
    state: web::Data<AppState>,
    body: web::Json<RpcRequest>,
) -> impl Responder {
    log::info!("Received MCP request: {}", body.method);

    match mcp.service.handle_request(body.into_inner(), &state).await {
        Some(response) => HttpResponse::Ok().json(response),
        // Notifications are acknowledged without a body
        None => HttpResponse::Accepted().finish(),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));
}
