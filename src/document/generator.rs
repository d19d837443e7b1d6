//! Generator for purchase-order documents.

use async_trait::async_trait;

use super::engine::DocxRenderEngine;
use super::traits::Generator;
use super::{GeneratedDocument, RenderError};
use crate::purchase_order::model::PurchaseOrderData;

#[derive(Debug, Default, Clone)]
pub struct PurchaseOrderGenerator;

impl PurchaseOrderGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Generator<PurchaseOrderData> for PurchaseOrderGenerator {
    async fn generate(&self, request: PurchaseOrderData) -> Result<GeneratedDocument, RenderError> {
        let po_no = request.po_no.clone();
        let item_count = request.items.len();
        match DocxRenderEngine::render(request).await {
            Ok(doc) => {
                log::info!(
                    "Generated purchase order '{}' ({} items, {} bytes) as {}",
                    po_no,
                    item_count,
                    doc.size_bytes(),
                    doc.filename
                );
                Ok(doc)
            }
            Err(err) => {
                log::error!("Failed to generate purchase order '{}': {}", po_no, err);
                Err(err)
            }
        }
    }
}
