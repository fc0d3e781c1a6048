pub(crate) mod markets_model;
pub(crate) mod markets_resolver;
pub(crate) mod markets_service;
pub(crate) mod markets_traits;

// Re-export the public interface
pub use markets_model::{LocatedMarket, Market, MarketDistance};
pub use markets_resolver::{nearby_markets, nearest_market};
pub use markets_service::MarketService;
pub use markets_traits::{MarketRepositoryTrait, MarketServiceTrait};
