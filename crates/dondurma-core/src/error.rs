//! # Error Types
//!
//! Domain-specific error types for dondurma-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dondurma-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog lookups, wrapped validation failures    │
//! │  └── ValidationError  - Product records that fail the catalog rules     │
//! │                                                                         │
//! │  storefront errors (app)                                                │
//! │  └── ApiError         - What the front-end sees (serialized)            │
//! │                                                                         │
//! │  Basket operations themselves never fail: an unknown line is a no-op.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog has no product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A catalog record breaks one of the product rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two catalog records share an id.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
