//! Decode/validate boundary for the persisted `AppData` document.

use super::blob_repo::{BlobStore, RepoError, RepoResult};
use crate::model::app_data::AppData;
use crate::model::validation::ModelValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a stored blob could not be turned into an `AppData`.
#[derive(Debug)]
pub enum DocumentError {
    /// Not JSON, or JSON of the wrong shape.
    Parse(serde_json::Error),
    /// Well-shaped JSON violating a value-level invariant.
    Invalid(ModelValidationError),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "document does not match AppData shape: {err}"),
            Self::Invalid(err) => write!(f, "document failed validation: {err}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

/// Outcome of reading the document at startup.
#[derive(Debug)]
pub enum StoredDocument {
    Loaded(AppData),
    /// Nothing stored under the key yet.
    Absent,
    Malformed(DocumentError),
    /// The storage backend itself failed.
    Unavailable(RepoError),
}

impl StoredDocument {
    /// Short status label for log lines.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::Absent => "absent",
            Self::Malformed(_) => "malformed",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

/// Parses and validates one serialized document.
///
/// # Errors
/// - `Parse` when the text is not an `AppData`-shaped JSON object.
/// - `Invalid` when `AppData::validate` rejects the decoded value.
pub fn decode_document(raw: &str) -> Result<AppData, DocumentError> {
    let document: AppData = serde_json::from_str(raw).map_err(DocumentError::Parse)?;
    document.validate().map_err(DocumentError::Invalid)?;
    Ok(document)
}

/// Serializes a full document snapshot.
pub fn encode_document(document: &AppData) -> RepoResult<String> {
    Ok(serde_json::to_string(document)?)
}

/// Reads and decodes the document stored under `key`.
pub fn load_document(store: &impl BlobStore, key: &str) -> StoredDocument {
    match store.get(key) {
        Ok(None) => StoredDocument::Absent,
        Ok(Some(raw)) => match decode_document(&raw) {
            Ok(document) => StoredDocument::Loaded(document),
            Err(err) => StoredDocument::Malformed(err),
        },
        Err(err) => StoredDocument::Unavailable(err),
    }
}

/// Overwrites the document stored under `key` with a full snapshot.
pub fn save_document(store: &impl BlobStore, key: &str, document: &AppData) -> RepoResult<()> {
    let raw = encode_document(document)?;
    store.set(key, &raw)
}
