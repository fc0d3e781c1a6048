//! PriceLens Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for PriceLens: barcode
//! readings, markets resolved from the user's position, and the price
//! aggregations built on top of them. It is store-agnostic and defines the
//! repository traits that are implemented by the `store-firestore` crate.

pub mod cart;
pub mod constants;
pub mod errors;
pub mod feedback;
pub mod geo;
pub mod markets;
pub mod pricing;
pub mod products;
pub mod readings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
