use thiserror::Error;

use crate::feedback::FeedbackError;
use crate::products::ProductError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the price-tracking core.
///
/// Only infrastructure and validation failures travel through this type.
/// Domain "not found" outcomes are `None` or empty collections, never
/// errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    #[error("Feedback error: {0}")]
    Feedback(#[from] FeedbackError),
}

/// Failures reported by the backing document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Request to the document store failed: {0}")]
    RequestFailed(String),

    #[error("The document store rejected the request: {0}")]
    Rejected(String),

    #[error("Failed to decode a stored document: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// Add From implementation for rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
