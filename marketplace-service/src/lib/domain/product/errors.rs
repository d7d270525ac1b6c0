use thiserror::Error;

use crate::product::models::ProductId;

/// Error for ProductName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("product name must not be empty")]
    Empty,
}

/// Error for Price validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("price must be a finite number")]
    NotFinite,

    #[error("price must not be negative, got {0}")]
    Negative(f64),
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    // Value object validation errors (automatically converted via #[from])
    #[error("invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    // Authorization
    #[error("only sellers can modify the catalog")]
    SellerRequired,

    // Domain-level errors
    #[error("product not found: {0}")]
    NotFound(ProductId),
}
