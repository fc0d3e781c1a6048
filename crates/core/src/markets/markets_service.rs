use std::sync::Arc;

use log::debug;

use super::markets_model::{LocatedMarket, Market, MarketDistance};
use super::markets_resolver::{nearby_markets, nearest_market};
use super::markets_traits::{MarketRepositoryTrait, MarketServiceTrait};
use crate::constants::NEARBY_MARKETS_LIMIT;
use crate::geo::{distance_meters, Coordinate};
use crate::Result;

/// Service resolving the user's position against the market list.
pub struct MarketService {
    market_repository: Arc<dyn MarketRepositoryTrait>,
}

impl MarketService {
    /// Creates a new MarketService instance with an injected repository.
    pub fn new(market_repository: Arc<dyn MarketRepositoryTrait>) -> Self {
        Self { market_repository }
    }
}

#[async_trait::async_trait]
impl MarketServiceTrait for MarketService {
    /// Retrieves the full market list, fetched fresh on every call.
    async fn get_markets(&self) -> Result<Vec<Market>> {
        self.market_repository.get_markets().await
    }

    /// Resolves the nearest market to `position` together with the distance
    /// to it in whole meters. `None` when no market can be resolved.
    async fn locate(&self, position: &Coordinate) -> Result<Option<LocatedMarket>> {
        let markets = self.market_repository.get_markets().await?;
        debug!("Resolving nearest market among {} candidates", markets.len());

        let mut located = None;
        if let Some(market) = nearest_market(position, &markets) {
            if let Some(coordinate) = &market.coordinate {
                located = Some(LocatedMarket {
                    distance_meters: distance_meters(position, coordinate).round() as i64,
                    market: market.clone(),
                });
            }
        }

        Ok(located)
    }

    /// Lists the closest markets to `position`, ascending by distance.
    async fn nearby(&self, position: &Coordinate) -> Result<Vec<MarketDistance>> {
        let markets = self.market_repository.get_markets().await?;
        Ok(nearby_markets(position, &markets, NEARBY_MARKETS_LIMIT))
    }
}
