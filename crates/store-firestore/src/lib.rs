//! Firestore-backed storage for PriceLens.
//!
//! Implements the repository traits defined in `pricelens-core` against the
//! Firestore REST API. The store is consumed as a plain document service:
//! list a collection, get or add a document, run a filtered query. Nothing
//! in here owns domain logic; decoding is lenient and skips records the
//! core would reject anyway.

pub(crate) mod client;
pub(crate) mod errors;
pub(crate) mod feedback_repository;
pub(crate) mod markets_repository;
pub(crate) mod products_repository;
pub(crate) mod readings_repository;
pub(crate) mod values;

// Re-export the public interface
pub use client::{FirestoreClient, FirestoreConfig, StructuredQuery};
pub use errors::FirestoreError;
pub use feedback_repository::FirestoreFeedbackRepository;
pub use markets_repository::FirestoreMarketRepository;
pub use products_repository::FirestoreProductRepository;
pub use readings_repository::FirestoreReadingRepository;
pub use values::{Document, FieldsBuilder, GeoPoint, Value};
