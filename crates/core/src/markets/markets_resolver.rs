use crate::geo::{distance_km, Coordinate};

use super::markets_model::{Market, MarketDistance};

/// Returns the market closest to `position`, or `None` when the list is
/// empty or no market carries a usable coordinate.
///
/// Linear scan with a strict `<` comparison, so ties go to the first
/// market seen. Deterministic for identical input order.
pub fn nearest_market<'a>(position: &Coordinate, markets: &'a [Market]) -> Option<&'a Market> {
    let mut nearest: Option<&Market> = None;
    let mut min_distance = f64::INFINITY;

    for market in markets {
        let coordinate = match &market.coordinate {
            Some(c) if c.is_valid() => c,
            _ => continue,
        };

        let distance = distance_km(position, coordinate);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(market);
        }
    }

    nearest
}

/// All markets with usable coordinates, ascending by distance from
/// `position`, capped at `limit`.
pub fn nearby_markets(
    position: &Coordinate,
    markets: &[Market],
    limit: usize,
) -> Vec<MarketDistance> {
    let mut ranked: Vec<MarketDistance> = markets
        .iter()
        .filter_map(|market| {
            let coordinate = market.coordinate.as_ref().filter(|c| c.is_valid())?;
            Some(MarketDistance {
                distance_km: distance_km(position, coordinate),
                market: market.clone(),
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(id: &str, coordinate: Option<Coordinate>) -> Market {
        Market {
            id: id.to_string(),
            name: format!("Market {}", id),
            city: None,
            coordinate,
        }
    }

    #[test]
    fn empty_list_resolves_to_none() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!(nearest_market(&origin, &[]).is_none());
    }

    #[test]
    fn all_invalid_coordinates_resolve_to_none() {
        let origin = Coordinate::new(0.0, 0.0);
        let markets = vec![
            market("a", None),
            market("b", Some(Coordinate::new(f64::NAN, 10.0))),
        ];
        assert!(nearest_market(&origin, &markets).is_none());
    }

    #[test]
    fn picks_the_closest_market() {
        let origin = Coordinate::new(0.0, 0.0);
        let markets = vec![
            market("far", Some(Coordinate::new(0.05, 0.0))), // ~5.5 km
            market("near", Some(Coordinate::new(0.0, 0.001))), // ~110 m
        ];
        let nearest = nearest_market(&origin, &markets).unwrap();
        assert_eq!(nearest.id, "near");
    }

    #[test]
    fn ties_go_to_the_first_seen() {
        let origin = Coordinate::new(0.0, 0.0);
        let markets = vec![
            market("first", Some(Coordinate::new(0.01, 0.0))),
            market("second", Some(Coordinate::new(-0.01, 0.0))),
        ];
        let nearest = nearest_market(&origin, &markets).unwrap();
        assert_eq!(nearest.id, "first");
    }

    #[test]
    fn invalid_markets_are_skipped_not_fatal() {
        let origin = Coordinate::new(0.0, 0.0);
        let markets = vec![
            market("broken", None),
            market("ok", Some(Coordinate::new(0.02, 0.0))),
        ];
        let nearest = nearest_market(&origin, &markets).unwrap();
        assert_eq!(nearest.id, "ok");
    }

    #[test]
    fn nearby_listing_is_sorted_and_capped() {
        let origin = Coordinate::new(0.0, 0.0);
        let markets = vec![
            market("c", Some(Coordinate::new(0.3, 0.0))),
            market("a", Some(Coordinate::new(0.1, 0.0))),
            market("skip", None),
            market("b", Some(Coordinate::new(0.2, 0.0))),
        ];

        let ranked = nearby_markets(&origin, &markets, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].market.id, "a");
        assert_eq!(ranked[1].market.id, "b");
        assert!(ranked[0].distance_km < ranked[1].distance_km);
    }
}
