use actix_web::{web, HttpResponse, Responder};

use super::download::{AttachmentSink, DownloadSink};
use super::traits::Generator;
use super::RenderError;
use crate::purchase_order::form::PurchaseOrderForm;
use crate::purchase_order::model::PurchaseOrderData;
use crate::{AppState, ErrorResponse};

/// Map a render failure onto the JSON error body.
pub fn render_failure(err: &RenderError) -> HttpResponse {
    match err {
        RenderError::OutputNotConfigured => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.user_message()))
        }
        _ => HttpResponse::InternalServerError()
            .json(ErrorResponse::internal_error(&err.user_message())),
    }
}

/// Render `data` and send it back as a download.
pub async fn download_document(state: &AppState, data: PurchaseOrderData) -> HttpResponse {
    let result = match state.generator.generate(data).await {
        Ok(doc) => AttachmentSink.deliver(doc).await,
        Err(err) => Err(err),
    };
    result.unwrap_or_else(|err| render_failure(&err))
}

#[utoipa::path(
    post,
    path = "/api/documents/purchase-order",
    tag = "Documents",
    request_body = PurchaseOrderData,
    responses(
        (status = 200, description = "Rendered purchase order"),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn render_purchase_order(
    state: web::Data<AppState>,
    body: web::Json<PurchaseOrderData>,
) -> impl Responder {
    let data = PurchaseOrderForm::from_data(body.into_inner()).into_data();
    download_document(&state, data).await
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/documents/purchase-order").route(web::post().to(render_purchase_order)),
    );
}
