//! Render error type.

use thiserror::Error;

/// Errors produced while validating [`RenderSettings`](crate::RenderSettings).
///
/// Rendering itself never fails once the settings are accepted.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("render setting `{field}` must be a non-negative finite number, got {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("padding {padding} must be less than half of the smaller canvas side {side}")]
    PaddingTooLarge { padding: f64, side: f64 },

    #[error("color palette is empty")]
    EmptyPalette,
}

pub type RenderResult<T> = Result<T, RenderError>;
