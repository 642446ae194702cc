//! Error types for the catalog

use thiserror::Error;
use uuid::Uuid;

/// Catalog-specific errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
