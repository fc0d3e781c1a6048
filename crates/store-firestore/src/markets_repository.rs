use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use pricelens_core::constants::MARKETS_COLLECTION;
use pricelens_core::markets::{Market, MarketRepositoryTrait};
use pricelens_core::Result;

use crate::client::FirestoreClient;
use crate::values::Document;

/// Market records read from the `markets` collection.
pub struct FirestoreMarketRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreMarketRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }

    /// A market needs an id and a name; anything else is optional. A
    /// missing or malformed geo point is preserved as `None` so the
    /// resolver can skip the market instead of the fetch failing.
    fn decode_market(document: &Document) -> Option<Market> {
        let id = document.id()?.to_string();
        let name = document.get("name")?.as_str()?.to_string();
        let city = document
            .get("city")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let coordinate = document.get("coordinates").and_then(|v| v.as_geo_point());

        Some(Market {
            id,
            name,
            city,
            coordinate,
        })
    }
}

#[async_trait]
impl MarketRepositoryTrait for FirestoreMarketRepository {
    async fn get_markets(&self) -> Result<Vec<Market>> {
        let documents = self.client.list_documents(MARKETS_COLLECTION).await?;

        let markets: Vec<Market> = documents
            .iter()
            .filter_map(|document| {
                let market = Self::decode_market(document);
                if market.is_none() {
                    warn!("Skipping market document without id or name");
                }
                market
            })
            .collect();

        Ok(markets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(json: serde_json::Value) -> Document {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn decodes_a_full_market() {
        let market = FirestoreMarketRepository::decode_market(&document(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/markets/m1",
            "fields": {
                "name": {"stringValue": "Atacadao"},
                "city": {"stringValue": "Sao Paulo"},
                "coordinates": {"geoPointValue": {"latitude": -23.5, "longitude": -46.6}}
            }
        })))
        .unwrap();

        assert_eq!(market.id, "m1");
        assert_eq!(market.name, "Atacadao");
        assert_eq!(market.city.as_deref(), Some("Sao Paulo"));
        assert!(market.coordinate.unwrap().is_valid());
    }

    #[test]
    fn missing_geo_point_degrades_to_none() {
        let market = FirestoreMarketRepository::decode_market(&document(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/markets/m2",
            "fields": {
                "name": {"stringValue": "Extra"},
                "coordinates": {"stringValue": "not a geopoint"}
            }
        })))
        .unwrap();

        assert_eq!(market.coordinate, None);
        assert_eq!(market.city, None);
    }

    #[test]
    fn nameless_document_is_dropped() {
        let market = FirestoreMarketRepository::decode_market(&document(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/markets/m3",
            "fields": {}
        })));
        assert!(market.is_none());
    }
}
