use thiserror::Error;

/// Store-level failures, kept distinct so the HTTP layer can map each to its
/// own status code. A query returning zero rows is never an error; `NotFound`
/// covers single-record lookups and targeted mutations only.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
