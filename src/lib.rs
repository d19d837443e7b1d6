use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod document;
pub mod mcp;
pub mod purchase_order;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::purchase_order::routes::get_form,
        crate::purchase_order::routes::reset_form,
        crate::purchase_order::routes::apply_command,
        crate::purchase_order::routes::set_top_level_field,
        crate::purchase_order::routes::set_field,
        crate::purchase_order::routes::add_item,
        crate::purchase_order::routes::update_item,
        crate::purchase_order::routes::remove_item,
        crate::purchase_order::routes::grand_total,
        crate::purchase_order::routes::generate,
        crate::purchase_order::routes::save,
        crate::document::routes::render_purchase_order
    ),
    components(
        schemas(
            purchase_order::model::PurchaseOrderData,
            purchase_order::model::LineItem,
            purchase_order::model::Vendor,
            purchase_order::model::BankDetails,
            purchase_order::model::OtherDetails,
            purchase_order::model::Buyer,
            purchase_order::model::Poc,
            purchase_order::model::Reference,
            purchase_order::model::Terms,
            purchase_order::model::FormSnapshot,
            purchase_order::model::GrandTotalResponse,
            purchase_order::form::FormCommand,
            purchase_order::form::SectionUpdate,
            purchase_order::form::TopLevelField,
            purchase_order::form::ItemField,
            purchase_order::routes::TopLevelUpdate,
            purchase_order::routes::ItemUpdate,
            document::download::SavedDocument,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Purchase Order", description = "Purchase order form and generation endpoints."),
        (name = "Documents", description = "Stateless document rendering.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Localhost server")
    )
)]
pub struct ApiDoc;

/// Register every API route under `/api` plus the MCP endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(purchase_order::routes::config)
            .configure(document::routes::config),
    )
    .configure(mcp::config);
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config));
    let mcp_state = web::Data::new(mcp::McpState::new(mcp::McpService::new(
        mcp::tools::ToolRegistry::new(),
    )));

    let prometheus = PrometheusMetricsBuilder::new("po_docgen_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    match &config.output_dir {
        Some(dir) => log::info!("Saving generated documents under {}", dir.display()),
        None => log::info!("PO_OUTPUT_DIR not set; /api/purchase-order/save is disabled"),
    }
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .app_data(mcp_state.clone())
            .configure(configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
