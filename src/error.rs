//! Errors raised while loading an external catalog.

use std::path::PathBuf;
use thiserror::Error;

/// A catalog entry failed required-field or type validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog record {index}: field '{field}' {problem}")]
pub struct MalformedCatalogError {
    /// Zero-based position of the offending entry in the catalog array.
    pub index: usize,
    pub field: String,
    pub problem: String,
}

impl MalformedCatalogError {
    pub(crate) fn new(index: usize, field: &str, problem: impl Into<String>) -> Self {
        Self {
            index,
            field: field.to_string(),
            problem: problem.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog must be a JSON array of switch objects, got {0}")]
    NotAnArray(&'static str),

    #[error(transparent)]
    Malformed(#[from] MalformedCatalogError),
}

impl CatalogError {
    /// The field-level validation failure, when that is what went wrong.
    pub fn as_malformed(&self) -> Option<&MalformedCatalogError> {
        match self {
            CatalogError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}
