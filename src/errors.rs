// errors.rs
use crate::domain::ListingError;
use astra::Response;
use thiserror::Error;

/// Errors raised while serving a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

/// Errors raised while loading the shoe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid shoe at index {index}: {source}")]
    InvalidListing {
        index: usize,
        #[source]
        source: ListingError,
    },
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
