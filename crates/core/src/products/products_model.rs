use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::products_errors::ProductError;

/// Measurement units a product can be registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Unit count; also the fallback when a stored product carries an
    /// unknown unit string.
    #[default]
    Un,
    Kg,
    G,
    Mg,
    L,
    Ml,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Un, Unit::Kg, Unit::G, Unit::Mg, Unit::L, Unit::Ml];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Un => "un",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::L => "l",
            Unit::Ml => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "un" => Ok(Unit::Un),
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "mg" => Ok(Unit::Mg),
            "l" => Ok(Unit::L),
            "ml" => Ok(Unit::Ml),
            other => Err(ProductError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// A catalog entry, keyed by its barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: Unit,
}
