//! Docx serialization engine.
//!
//! Layout construction and zip packing are CPU-bound, so they run on the
//! blocking pool and are awaited exactly once.

use docx_rs::Docx;
use std::io::Cursor;

use super::common::document_filename;
use super::layout::build_document;
use super::{GeneratedDocument, RenderError, DOCX_MIME};
use crate::purchase_order::model::PurchaseOrderData;

/// Stateless engine turning purchase orders into docx bytes.
pub struct DocxRenderEngine;

impl DocxRenderEngine {
    /// Pack a built document into an in-memory `.docx` archive.
    pub fn pack(docx: Docx) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|err| RenderError::Pack(err.to_string()))?;
        Ok(buffer.into_inner())
    }

    /// Lay out and pack `data` synchronously.
    pub fn render_blocking(data: &PurchaseOrderData) -> Result<GeneratedDocument, RenderError> {
        let bytes = Self::pack(build_document(data))?;
        Ok(GeneratedDocument {
            filename: document_filename(&data.po_no),
            bytes,
            mime_type: DOCX_MIME,
        })
    }

    /// Render on the blocking pool.
    pub async fn render(data: PurchaseOrderData) -> Result<GeneratedDocument, RenderError> {
        tokio::task::spawn_blocking(move || Self::render_blocking(&data))
            .await
            .map_err(RenderError::Worker)?
    }
}
