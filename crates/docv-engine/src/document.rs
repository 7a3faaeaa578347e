//! # Uploaded Documents
//!
//! File validation and transport encoding for user-supplied documents.
//!
//! ## Validation
//!
//! Acceptance is decided on the file's *declared* media type — the
//! verification backend accepts exactly one format (PDF). Content sniffing
//! (magic bytes) is deliberately not performed; a mislabeled file is
//! rejected by the backend instead. Known gap: a non-PDF payload with a
//! `application/pdf` declared type passes local validation.
//!
//! ## Encoding
//!
//! [`encode`] reads the full binary content asynchronously and produces a
//! standard base64 string with no format prefix. A read failure surfaces as
//! [`EncodingError`] with the cause attached; partial data is never
//! returned.

use base64::Engine;
use std::path::{Path, PathBuf};

/// The only declared media type the verification backend accepts.
pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";

/// Where a raw file's bytes live.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// On disk; read at encoding time.
    Path(PathBuf),
    /// Already in memory (e.g. from a drag-and-drop buffer).
    Bytes(Vec<u8>),
}

/// A user-supplied file: opaque binary source plus the declared media type
/// and display name.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// Display name of the file.
    pub name: String,
    /// Declared media type (as reported by the supplying layer).
    pub media_type: String,
    /// The file's bytes.
    pub source: FileSource,
}

impl RawFile {
    /// A file on disk. The display name is the path's final component.
    pub fn from_path(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            media_type: media_type.into(),
            source: FileSource::Path(path),
        }
    }

    /// An in-memory file.
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: FileSource::Bytes(bytes),
        }
    }
}

/// The uploaded artifact is not an acceptable document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please upload a PDF file")]
pub struct InvalidFileError {
    /// The media type the file declared.
    pub declared_type: String,
}

/// Local I/O failure while encoding a file for transport.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("error reading file {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Confirm the file's declared media type is an accepted document format.
pub fn validate(file: &RawFile) -> Result<(), InvalidFileError> {
    if file.media_type != ACCEPTED_MEDIA_TYPE {
        return Err(InvalidFileError {
            declared_type: file.media_type.clone(),
        });
    }
    Ok(())
}

/// Base64 text representation of a document's bytes, no format prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    /// The base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read the file's full content and encode it for transport.
pub async fn encode(file: &RawFile) -> Result<EncodedPayload, EncodingError> {
    let bytes = match &file.source {
        FileSource::Path(path) => read_file(path, &file.name).await?,
        FileSource::Bytes(bytes) => bytes.clone(),
    };
    Ok(EncodedPayload(
        base64::engine::general_purpose::STANDARD.encode(bytes),
    ))
}

async fn read_file(path: &Path, name: &str) -> Result<Vec<u8>, EncodingError> {
    tokio::fs::read(path).await.map_err(|e| EncodingError::Read {
        name: name.to_string(),
        source: e,
    })
}

/// A validated document with its transport encoding. Constructed only
/// after encoding succeeds, so a document can never reach submission
/// without its payload.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    raw: RawFile,
    encoded: EncodedPayload,
}

impl UploadedDocument {
    pub(crate) fn new(raw: RawFile, encoded: EncodedPayload) -> Self {
        Self { raw, encoded }
    }

    /// Display name of the originating file.
    pub fn file_name(&self) -> &str {
        &self.raw.name
    }

    /// The transport encoding.
    pub fn encoded(&self) -> &EncodedPayload {
        &self.encoded
    }

    /// The payload form the request builder consumes.
    pub fn to_payload(&self) -> docv_client::DocumentPayload {
        docv_client::DocumentPayload {
            file_name: self.raw.name.clone(),
            b64_document: self.encoded.0.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn non_pdf_declared_type_is_rejected() {
        let file = RawFile::from_bytes("photo.jpg", "image/jpeg", vec![0xff, 0xd8]);
        let err = validate(&file).unwrap_err();
        assert_eq!(err.declared_type, "image/jpeg");
        assert_eq!(err.to_string(), "Please upload a PDF file");
    }

    #[test]
    fn pdf_declared_type_passes() {
        let file = RawFile::from_bytes("doc.pdf", ACCEPTED_MEDIA_TYPE, b"%PDF-1.4".to_vec());
        assert!(validate(&file).is_ok());
    }

    #[tokio::test]
    async fn encoding_produces_prefix_free_base64() {
        let file = RawFile::from_bytes("doc.pdf", ACCEPTED_MEDIA_TYPE, b"%PDF-1.4".to_vec());
        let payload = encode(&file).await.unwrap();
        assert_eq!(payload.as_str(), "JVBERi0xLjQ=");
        assert!(!payload.as_str().starts_with("data:"));
    }

    #[tokio::test]
    async fn encoding_reads_files_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"%PDF-1.4").unwrap();
        let file = RawFile::from_path(tmp.path(), ACCEPTED_MEDIA_TYPE);
        let payload = encode(&file).await.unwrap();
        assert_eq!(payload.as_str(), "JVBERi0xLjQ=");
    }

    #[tokio::test]
    async fn read_failure_surfaces_with_its_cause() {
        let file = RawFile::from_path("/nonexistent/statement.pdf", ACCEPTED_MEDIA_TYPE);
        let err = encode(&file).await.unwrap_err();
        let EncodingError::Read { name, source } = err;
        assert_eq!(name, "statement.pdf");
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
