//! Router error type.

use thiserror::Error;

/// Errors produced while constructing a [`TransportRouter`](crate::TransportRouter).
///
/// Queries never fail: unknown stops and unreachable targets are `None`.
#[derive(Debug, Error, PartialEq)]
pub enum RouterError {
    #[error("bus velocity must be a positive finite number of km/h, got {0}")]
    InvalidVelocity(f64),

    #[error("bus wait time must be a non-negative finite number of minutes, got {0}")]
    InvalidWaitTime(f64),
}

pub type RouterResult<T> = Result<T, RouterError>;
