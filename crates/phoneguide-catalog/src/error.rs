//! Error types for catalog loading and validation.

use phoneguide_core::error::GuideError;

/// Errors from the catalog store.
///
/// Every variant is fatal at startup: the core cannot operate without a
/// fully valid catalog, so malformed input aborts the process rather than
/// being silently dropped.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog is empty")]
    Empty,
    #[error("record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
    #[error("item {0} has a zero price")]
    ZeroPrice(String),
}

impl From<CatalogError> for GuideError {
    fn from(err: CatalogError) -> Self {
        GuideError::Catalog(err.to_string())
    }
}
