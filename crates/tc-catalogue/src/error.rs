//! Catalogue error type.

use thiserror::Error;

/// Errors produced while populating a [`Catalogue`](crate::Catalogue).
#[derive(Debug, Error, PartialEq)]
pub enum CatalogueError {
    #[error("stop {0:?} already exists")]
    DuplicateStop(String),

    #[error("bus {0:?} already exists")]
    DuplicateBus(String),

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("bus {0:?} has an empty stop list")]
    EmptyRoute(String),

    #[error("circular bus {0:?} must end at its first stop")]
    UnclosedCircularRoute(String),

    #[error("catalogue cannot hold more than {limit} {what}")]
    CapacityExceeded { what: &'static str, limit: usize },

    #[error("distance from {from:?} to {to:?} has already been set")]
    DuplicateDistance { from: String, to: String },
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
