//! Tool result payloads: text items and base64-encoded file resources.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::document::GeneratedDocument;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
    /// ISO8601 creation time
    pub created_at: String,
}

impl FileMetadata {
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: usize,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            size_bytes,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Content item in tool result (MCP spec compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64 payload of a resource item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FileMetadata>,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
            data: None,
            mime_type: None,
            metadata: None,
        }
    }

    /// Embed a generated document as a base64 resource.
    pub fn document(doc: &GeneratedDocument) -> Self {
        Self {
            content_type: "resource".to_string(),
            text: Some(format!("Generated file: {}", doc.filename)),
            data: Some(BASE64.encode(&doc.bytes)),
            mime_type: Some(doc.mime_type.to_string()),
            metadata: Some(FileMetadata::new(
                &doc.filename,
                doc.mime_type,
                doc.size_bytes(),
            )),
        }
    }
}

/// Result of a tool call (MCP spec compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DOCX_MIME;

    #[test]
    fn test_document_item_is_base64_resource() {
        let doc = GeneratedDocument {
            filename: "PO-7.docx".to_string(),
            bytes: b"docx bytes".to_vec(),
            mime_type: DOCX_MIME,
        };
        let item = ContentItem::document(&doc);

        assert_eq!(item.content_type, "resource");
        assert_eq!(item.mime_type.as_deref(), Some(DOCX_MIME));
        let decoded = BASE64.decode(item.data.unwrap()).unwrap();
        assert_eq!(decoded, b"docx bytes");
        let metadata = item.metadata.unwrap();
        assert_eq!(metadata.filename, "PO-7.docx");
        assert_eq!(metadata.size_bytes, 10);
    }

    #[test]
    fn test_tool_result_serialization() {
        let result = ToolResult::error("Something went wrong");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "Something went wrong");
    }
}
