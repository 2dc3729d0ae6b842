//! Error types for tc-requests.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_render::RenderError;
use tc_router::RouterError;

/// Errors that abort a whole batch.
///
/// Individual stat requests never fail; they answer "not found" instead.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base request: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("invalid routing settings: {0}")]
    Router(#[from] RouterError),

    #[error("invalid render settings: {0}")]
    Render(#[from] RenderError),

    #[error("line {line}: {message}")]
    Text { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, RequestError>`.
pub type RequestResult<T> = Result<T, RequestError>;
