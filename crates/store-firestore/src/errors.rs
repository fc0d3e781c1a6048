use thiserror::Error;

use pricelens_core::errors::{Error, StoreError};

/// Failures talking to the Firestore REST API.
#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error("Firestore request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Firestore API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode Firestore document: {0}")]
    Decode(String),

    #[error("Invalid Firestore endpoint: {0}")]
    Endpoint(String),
}

impl From<FirestoreError> for Error {
    fn from(err: FirestoreError) -> Self {
        match err {
            FirestoreError::Request(e) => Error::Store(StoreError::RequestFailed(e.to_string())),
            FirestoreError::Api { status, message } => {
                Error::Store(StoreError::Rejected(format!("{}: {}", status, message)))
            }
            FirestoreError::Decode(message) => Error::Store(StoreError::Decode(message)),
            FirestoreError::Endpoint(message) => Error::Store(StoreError::Rejected(message)),
        }
    }
}
