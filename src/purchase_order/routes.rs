use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::document::download::{DownloadSink, SavedDocument};
use crate::document::routes::{download_document, render_failure};
use crate::document::traits::Generator;
use crate::document::RenderError;
use crate::purchase_order::form::{FormCommand, ItemField, SectionUpdate, TopLevelField};
use crate::purchase_order::model::{FormSnapshot, GrandTotalResponse};
use crate::{AppState, ErrorResponse};

#[derive(Deserialize, Debug, ToSchema)]
pub struct TopLevelUpdate {
    pub field: TopLevelField,
    pub value: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct ItemUpdate {
    pub field: ItemField,
    /// Raw input; numeric fields are coerced leniently.
    pub value: String,
}

#[utoipa::path(
    get,
    path = "/api/purchase-order",
    tag = "Purchase Order",
    responses(
        (status = 200, description = "Current form state", body = FormSnapshot)
    )
)]
pub async fn get_form(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.snapshot())
}

#[utoipa::path(
    post,
    path = "/api/purchase-order/reset",
    tag = "Purchase Order",
    responses(
        (status = 200, description = "Form reset to defaults", body = FormSnapshot)
    )
)]
pub async fn reset_form(state: web::Data<AppState>) -> impl Responder {
    log::info!("Purchase order form reset");
    HttpResponse::Ok().json(state.reset())
}

#[utoipa::path(
    post,
    path = "/api/purchase-order/commands",
    tag = "Purchase Order",
    request_body = FormCommand,
    responses(
        (status = 200, description = "Command applied", body = FormSnapshot),
        (status = 400, description = "Unknown command, section or field")
    )
)]
pub async fn apply_command(
    state: web::Data<AppState>,
    command: web::Json<FormCommand>,
) -> impl Responder {
    let command = command.into_inner();
    log::debug!("Applying form command {:?}", command);
    HttpResponse::Ok().json(state.update(|form| form.apply(command)))
}

#[utoipa::path(
    patch,
    path = "/api/purchase-order/header",
    tag = "Purchase Order",
    request_body = TopLevelUpdate,
    responses(
        (status = 200, description = "PO number or date updated", body = FormSnapshot)
    )
)]
pub async fn set_top_level_field(
    state: web::Data<AppState>,
    item: web::Json<TopLevelUpdate>,
) -> impl Responder {
    let TopLevelUpdate { field, value } = item.into_inner();
    HttpResponse::Ok().json(state.update(|form| form.set_top_level_field(field, value)))
}

#[utoipa::path(
    patch,
    path = "/api/purchase-order/fields",
    tag = "Purchase Order",
    request_body = SectionUpdate,
    responses(
        (status = 200, description = "Section field updated", body = FormSnapshot)
    )
)]
pub async fn set_field(
    state: web::Data<AppState>,
    update: web::Json<SectionUpdate>,
) -> impl Responder {
    let update = update.into_inner();
    HttpResponse::Ok().json(state.update(|form| form.set_field(update)))
}

#[utoipa::path(
    post,
    path = "/api/purchase-order/items",
    tag = "Purchase Order",
    responses(
        (status = 200, description = "Blank line item appended", body = FormSnapshot)
    )
)]
pub async fn add_item(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.update(|form| form.add_item()))
}

#[utoipa::path(
    patch,
    path = "/api/purchase-order/items/{id}",
    tag = "Purchase Order",
    params(
        ("id" = String, Path, description = "Line item ID")
    ),
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "Line item updated and total recomputed", body = FormSnapshot)
    )
)]
pub async fn update_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
    item: web::Json<ItemUpdate>,
) -> impl Responder {
    let id = path.into_inner();
    let ItemUpdate { field, value } = item.into_inner();
    HttpResponse::Ok().json(state.update(|form| form.update_item(&id, field, &value)))
}

#[utoipa::path(
    delete,
    path = "/api/purchase-order/items/{id}",
    tag = "Purchase Order",
    params(
        ("id" = String, Path, description = "Line item ID")
    ),
    responses(
        (status = 200, description = "Line item removed; the last item is always kept", body = FormSnapshot)
    )
)]
pub async fn remove_item(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    HttpResponse::Ok().json(state.update(|form| form.remove_item(&id)))
}

#[utoipa::path(
    get,
    path = "/api/purchase-order/total",
    tag = "Purchase Order",
    responses(
        (status = 200, description = "Grand total of all line items", body = GrandTotalResponse)
    )
)]
pub async fn grand_total(state: web::Data<AppState>) -> impl Responder {
    let (grand_total, item_count) = state.grand_total();
    HttpResponse::Ok().json(GrandTotalResponse {
        grand_total,
        item_count,
    })
}

#[utoipa::path(
    post,
    path = "/api/purchase-order/generate",
    tag = "Purchase Order",
    responses(
        (status = 200, description = "Current form rendered as a Word document"),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate(state: web::Data<AppState>) -> impl Responder {
    let data = state.current_data();
    download_document(&state, data).await
}

#[utoipa::path(
    post,
    path = "/api/purchase-order/save",
    tag = "Purchase Order",
    responses(
        (status = 200, description = "Current form rendered into the output directory", body = SavedDocument),
        (status = 400, description = "No output directory configured", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn save(state: web::Data<AppState>) -> impl Responder {
    let Some(sink) = state.directory_sink.as_ref() else {
        return render_failure(&RenderError::OutputNotConfigured);
    };

    let data = state.current_data();
    let result = match state.generator.generate(data).await {
        Ok(doc) => sink.deliver(doc).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(err) => {
            log::error!("Failed to save purchase order: {}", err);
            render_failure(&err)
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/purchase-order").route(web::get().to(get_form)))
        .service(web::resource("/purchase-order/reset").route(web::post().to(reset_form)))
        .service(web::resource("/purchase-order/commands").route(web::post().to(apply_command)))
        .service(
            web::resource("/purchase-order/header").route(web::patch().to(set_top_level_field)),
        )
        .service(web::resource("/purchase-order/fields").route(web::patch().to(set_field)))
        .service(web::resource("/purchase-order/items").route(web::post().to(add_item)))
        .service(
            web::resource("/purchase-order/items/{id}")
                .route(web::patch().to(update_item))
                .route(web::delete().to(remove_item)),
        )
        .service(web::resource("/purchase-order/total").route(web::get().to(grand_total)))
        .service(web::resource("/purchase-order/generate").route(web::post().to(generate)))
        .service(web::resource("/purchase-order/save").route(web::post().to(save)));
}
