use async_trait::async_trait;

use super::markets_model::{LocatedMarket, Market, MarketDistance};
use crate::geo::Coordinate;
use crate::Result;

/// Trait defining the contract for market repository operations.
#[async_trait]
pub trait MarketRepositoryTrait: Send + Sync {
    async fn get_markets(&self) -> Result<Vec<Market>>;
}

/// Trait defining the contract for market resolution operations.
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    async fn get_markets(&self) -> Result<Vec<Market>>;
    async fn locate(&self, position: &Coordinate) -> Result<Option<LocatedMarket>>;
    async fn nearby(&self, position: &Coordinate) -> Result<Vec<MarketDistance>>;
}
