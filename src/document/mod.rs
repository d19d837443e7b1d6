//! Document module - renders purchase orders to Word (`.docx`) files.
//!
//! - `layout` - maps a purchase order onto paragraphs and tables
//! - `engine` - serializes the layout into docx bytes off the async executor
//! - `download` - hands finished bytes to an HTTP attachment or a directory
//! - `routes` - stateless HTTP rendering endpoint

pub mod common;
pub mod download;
pub mod engine;
pub mod generator;
pub mod layout;
pub mod routes;
pub mod traits;

pub use download::{AttachmentSink, DirectorySink, DownloadSink, SavedDocument};
pub use engine::DocxRenderEngine;
pub use generator::PurchaseOrderGenerator;
pub use traits::Generator;

use thiserror::Error;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const GENERIC_FAILURE_MESSAGE: &str = "Generation failed.";

/// Errors that can occur while rendering or delivering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize document: {0}")]
    Pack(String),
    #[error("document worker failed: {0}")]
    Worker(#[source] tokio::task::JoinError),
    #[error("failed to write document: {0}")]
    Io(#[source] std::io::Error),
    #[error("document output directory is not configured")]
    OutputNotConfigured,
}

impl RenderError {
    /// Text shown to the user; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Result of a successful document generation.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl GeneratedDocument {
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}
