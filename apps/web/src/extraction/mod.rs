//! Text extraction for uploaded documents.
//!
//! Two media types are understood: `text/plain` (UTF-8) and `application/pdf`.
//! Callers that must never fail use [`extract_or_report`], which turns every
//! error into an empty text plus a user-facing notice.

pub mod pdf;

use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Error reading PDF: {0}")]
    PdfParse(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

impl ExtractionError {
    /// Stable machine-readable code, surfaced in JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::Decode(_) => "DECODE_ERROR",
            ExtractionError::PdfParse(_) => "PDF_PARSE_ERROR",
            ExtractionError::UnsupportedType(_) => "UNSUPPORTED_TYPE",
        }
    }
}

/// Which side of the comparison a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    Resume,
    JobDescription,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Resume => f.write_str("resume"),
            DocumentRole::JobDescription => f.write_str("job description"),
        }
    }
}

/// Declared media type of an upload, after resolving generic browser types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    PlainText,
    Pdf,
    Other(String),
}

impl MediaType {
    /// Resolves the multipart `Content-Type`, ignoring parameters such as
    /// `charset`. Missing or `application/octet-stream` types fall back to
    /// the file extension.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty());

        match essence.as_deref() {
            Some("text/plain") => MediaType::PlainText,
            Some("application/pdf") => MediaType::Pdf,
            None | Some("application/octet-stream") => Self::from_extension(file_name)
                .unwrap_or_else(|| {
                    MediaType::Other(essence.clone().unwrap_or_else(|| "unknown".to_string()))
                }),
            Some(other) => MediaType::Other(other.to_string()),
        }
    }

    fn from_extension(file_name: Option<&str>) -> Option<Self> {
        let (_, ext) = file_name?.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(MediaType::PlainText),
            "pdf" => Some(MediaType::Pdf),
            _ => None,
        }
    }
}

/// One uploaded file, as received from the multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Upload {
    pub fn media_type(&self) -> MediaType {
        MediaType::resolve(self.content_type.as_deref(), self.file_name.as_deref())
    }

    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }
}

/// A user-visible message produced when extraction degraded to empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionNotice {
    pub role: DocumentRole,
    pub code: String,
    pub message: String,
}

/// Outcome of [`extract_or_report`]: text is empty whenever `notice` is set.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub text: String,
    pub notice: Option<ExtractionNotice>,
}

/// Extracts the plain text of `upload`.
pub async fn extract_text(upload: &Upload) -> Result<String, ExtractionError> {
    match upload.media_type() {
        MediaType::PlainText => Ok(std::str::from_utf8(&upload.bytes)?.to_string()),
        MediaType::Pdf => {
            let bytes = upload.bytes.clone();
            // lopdf / pdf-extract are CPU-bound and may panic on hostile input.
            tokio::task::spawn_blocking(move || pdf::extract_pdf_text(&bytes))
                .await
                .map_err(|e| ExtractionError::PdfParse(format!("parser aborted: {e}")))?
        }
        MediaType::Other(declared) => Err(ExtractionError::UnsupportedType(declared)),
    }
}

/// Extracts text, converting any failure into empty text plus a notice.
pub async fn extract_or_report(role: DocumentRole, upload: &Upload) -> Extraction {
    match extract_text(upload).await {
        Ok(text) => {
            debug!(%role, file = upload.display_name(), chars = text.len(), "Extracted text");
            Extraction { text, notice: None }
        }
        Err(e) => {
            warn!(%role, file = upload.display_name(), error = %e, "Text extraction failed");
            Extraction {
                text: String::new(),
                notice: Some(ExtractionNotice {
                    role,
                    code: e.code().to_string(),
                    message: format!("Could not read the {role} ({}): {e}", upload.display_name()),
                }),
            }
        }
    }
}
