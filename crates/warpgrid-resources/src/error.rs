//! Error types for resource construction and reported arithmetic.

use thiserror::Error;

use crate::resource::Resource;

/// Result type alias for resource operations that can fail.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors produced by the resource core.
///
/// Overflow in scalar arithmetic is never an error: it clamps and emits a
/// diagnostic instead. Only parsing and the reporting subtraction fail.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A subtraction produced negative quantities. `clamped` holds the
    /// valid result with every negative value reset to 0.
    #[error("resource quantity less than zero for: {}", .types.join(", "))]
    NegativeQuantity {
        types: Vec<String>,
        clamped: Resource,
    },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("quantity out of range: {0}")]
    QuantityOverflow(String),

    #[error("invalid resource json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResourceError {
    /// The zero-clamped result carried by a [`ResourceError::NegativeQuantity`].
    pub fn clamped(&self) -> Option<&Resource> {
        match self {
            ResourceError::NegativeQuantity { clamped, .. } => Some(clamped),
            _ => None,
        }
    }

    /// Consume the error and return the clamped result, if any.
    pub fn into_clamped(self) -> Option<Resource> {
        match self {
            ResourceError::NegativeQuantity { clamped, .. } => Some(clamped),
            _ => None,
        }
    }
}
