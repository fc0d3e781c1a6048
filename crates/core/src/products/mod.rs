pub(crate) mod products_errors;
pub(crate) mod products_model;
pub(crate) mod products_service;
pub(crate) mod products_traits;

// Re-export the public interface
pub use products_errors::ProductError;
pub use products_model::{Product, Unit};
pub use products_service::ProductService;
pub use products_traits::{ProductRepositoryTrait, ProductServiceTrait};
