//! Document decoding — turns uploaded bytes into plain text before the screening engine runs.
//!
//! Supported: PDF (via `pdf-extract`) and plain text. Everything else, DOCX included, is
//! rejected as `UnsupportedFormat`; those files must be converted upstream.
//!
//! PDF decoding is CPU-bound and runs inside `tokio::task::spawn_blocking`.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported document format: {mime}")]
    UnsupportedFormat { mime: String },

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("document is not valid UTF-8 text")]
    Utf8,

    #[error("document contains no extractable text")]
    Empty,

    #[error("decoder task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Formats this service can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

const OCTET_STREAM: &str = "application/octet-stream";

impl DocumentKind {
    /// Resolves the kind from the declared content type, falling back to the file extension
    /// when the client sent no type or a generic binary one.
    pub fn resolve(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, DecodeError> {
        let declared = content_type
            .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != OCTET_STREAM);

        let mime = match declared {
            Some(mime) => mime,
            None => file_name
                .and_then(|name| mime_guess::from_path(name).first_raw())
                .unwrap_or(OCTET_STREAM)
                .to_string(),
        };

        match mime.as_str() {
            "application/pdf" => Ok(DocumentKind::Pdf),
            "text/plain" | "text/markdown" | "text/x-markdown" => Ok(DocumentKind::PlainText),
            _ => Err(DecodeError::UnsupportedFormat { mime }),
        }
    }
}

/// Decodes `data` into text. Blank results are rejected.
pub async fn decode(kind: DocumentKind, data: Bytes) -> Result<String, DecodeError> {
    let byte_len = data.len();

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8(data.to_vec()).map_err(|_| DecodeError::Utf8)?,
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| DecodeError::Pdf(e.to_string()))
        })
        .await??,
    };

    if text.trim().is_empty() {
        warn!(?kind, byte_len, "Decoded document is blank");
        return Err(DecodeError::Empty);
    }

    debug!(?kind, byte_len, text_len = text.len(), "Document decoded");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_declared_pdf() {
        assert_eq!(
            DocumentKind::resolve(Some("application/pdf"), None).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_resolve_strips_parameters() {
        assert_eq!(
            DocumentKind::resolve(Some("text/plain; charset=utf-8"), None).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_resolve_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::resolve(Some("application/octet-stream"), Some("cv.pdf")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::resolve(None, Some("cv.txt")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_resolve_rejects_docx() {
        let err = DocumentKind::resolve(
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            Some("cv.docx"),
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_resolve_unknown_without_hints() {
        let err = DocumentKind::resolve(None, None).unwrap_err();
        match err {
            DecodeError::UnsupportedFormat { mime } => assert_eq!(mime, OCTET_STREAM),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_decode_plain_text() {
        let text = decode(DocumentKind::PlainText, Bytes::from_static(b"Jane Doe\nRust"))
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\nRust");
    }

    #[tokio::test]
    async fn test_decode_rejects_blank_text() {
        let err = decode(DocumentKind::PlainText, Bytes::from_static(b"  \n "))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Empty));
    }

    #[tokio::test]
    async fn test_decode_rejects_invalid_utf8() {
        let err = decode(DocumentKind::PlainText, Bytes::from_static(&[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Utf8));
    }

    #[tokio::test]
    async fn test_decode_rejects_garbage_pdf() {
        let err = decode(DocumentKind::Pdf, Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Pdf(_)));
    }
}
