//! Delivery of finished documents.
//!
//! A document is either streamed back as an HTTP attachment or saved into a
//! directory. Saving goes through a temporary file in the target directory
//! that is only renamed into place once fully written; on any failure the
//! temporary file is dropped and removed.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::HttpResponse;
use async_trait::async_trait;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use utoipa::ToSchema;

use super::{GeneratedDocument, RenderError};

#[async_trait(?Send)]
pub trait DownloadSink {
    type Output;

    async fn deliver(&self, document: GeneratedDocument) -> Result<Self::Output, RenderError>;
}

/// Sends the document as a `Content-Disposition: attachment` response.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttachmentSink;

#[async_trait(?Send)]
impl DownloadSink for AttachmentSink {
    type Output = HttpResponse;

    async fn deliver(&self, document: GeneratedDocument) -> Result<HttpResponse, RenderError> {
        Ok(attachment_response(document))
    }
}

pub fn attachment_response(document: GeneratedDocument) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(document.mime_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(document.filename)],
        })
        .body(document.bytes)
}

/// Where a saved document ended up.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    pub filename: String,
    pub path: String,
    pub size_bytes: usize,
}

/// Saves documents under a fixed directory, replacing same-named files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait(?Send)]
impl DownloadSink for DirectorySink {
    type Output = SavedDocument;

    async fn deliver(&self, document: GeneratedDocument) -> Result<SavedDocument, RenderError> {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || write_into(&dir, &document))
            .await
            .map_err(RenderError::Worker)?
    }
}

fn write_into(dir: &Path, document: &GeneratedDocument) -> Result<SavedDocument, RenderError> {
    std::fs::create_dir_all(dir).map_err(RenderError::Io)?;

    // Removed on drop unless persisted below.
    let mut staged = NamedTempFile::new_in(dir).map_err(RenderError::Io)?;
    staged.write_all(&document.bytes).map_err(RenderError::Io)?;
    staged.as_file().sync_all().map_err(RenderError::Io)?;

    let target = dir.join(&document.filename);
    staged
        .persist(&target)
        .map_err(|err| RenderError::Io(err.error))?;

    log::info!("Saved {} to {}", document.filename, target.display());
    Ok(SavedDocument {
        filename: document.filename.clone(),
        path: target.display().to_string(),
        size_bytes: document.size_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DOCX_MIME;

    fn sample(filename: &str) -> GeneratedDocument {
        GeneratedDocument {
            filename: filename.to_string(),
            bytes: b"PK fake docx".to_vec(),
            mime_type: DOCX_MIME,
        }
    }

    #[tokio::test]
    async fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        let saved = sink.deliver(sample("PO-1.docx")).await.unwrap();

        assert_eq!(saved.filename, "PO-1.docx");
        assert_eq!(saved.size_bytes, 12);
        let written = std::fs::read(dir.path().join("PO-1.docx")).unwrap();
        assert_eq!(written, b"PK fake docx");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_directory_sink_cleans_up_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory occupying the target name makes the final rename fail.
        std::fs::create_dir(dir.path().join("blocked.docx")).unwrap();
        let sink = DirectorySink::new(dir.path());

        let result = sink.deliver(sample("blocked.docx")).await;

        assert!(matches!(result, Err(RenderError::Io(_))));
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("blocked.docx")]);
    }

    #[tokio::test]
    async fn test_attachment_sink_sets_headers() {
        let response = AttachmentSink.deliver(sample("A-B-C.docx")).await.unwrap();
        let headers = response.headers();

        assert_eq!(
            headers.get("content-type").unwrap().to_str().unwrap(),
            DOCX_MIME
        );
        let disposition = headers
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("A-B-C.docx"));
    }
}
