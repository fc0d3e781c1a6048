//! Typed wire values for the Firestore REST document format.
//!
//! Firestore encodes every field as a single-key object naming its type,
//! e.g. `{"stringValue": "Atacadao"}` or
//! `{"geoPointValue": {"latitude": -23.5, "longitude": -46.6}}`. The enum
//! below maps one-to-one onto that shape. Decoding is lenient: a field of
//! an unexpected type simply fails the typed accessor and the caller
//! degrades to `None`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pricelens_core::geo::Coordinate;

/// A latitude/longitude pair as Firestore serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One typed Firestore value. Only the variants the app's collections use
/// are modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    DoubleValue(f64),
    /// Firestore transports int64 as a JSON string.
    IntegerValue(String),
    BooleanValue(bool),
    TimestampValue(DateTime<Utc>),
    GeoPointValue(GeoPoint),
    NullValue(()),
    MapValue { fields: BTreeMap<String, Value> },
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringValue(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::DoubleValue(v) => Some(*v),
            Value::IntegerValue(raw) => raw.parse().ok(),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::DoubleValue(v) => Decimal::from_f64(*v),
            Value::IntegerValue(raw) => raw.parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::BooleanValue(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::TimestampValue(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Reads a geo point into a domain coordinate. Non-finite components
    /// are kept; the core's validity predicate is the single judge of
    /// usability.
    pub fn as_geo_point(&self) -> Option<Coordinate> {
        match self {
            Value::GeoPointValue(point) => Some(Coordinate::new(point.latitude, point.longitude)),
            _ => None,
        }
    }
}

/// A Firestore document as the REST API returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Full resource name; the trailing segment is the document id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    pub fn with_fields(fields: BTreeMap<String, Value>) -> Self {
        Document { name: None, fields }
    }

    pub fn id(&self) -> Option<&str> {
        self.name.as_deref().and_then(|name| name.rsplit('/').next())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Builder assembling the field map of a document about to be written.
#[derive(Debug, Default)]
pub struct FieldsBuilder {
    fields: BTreeMap<String, Value>,
}

impl FieldsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, field: &str, value: &str) -> Self {
        self.fields
            .insert(field.to_string(), Value::StringValue(value.to_string()));
        self
    }

    pub fn boolean(mut self, field: &str, value: bool) -> Self {
        self.fields
            .insert(field.to_string(), Value::BooleanValue(value));
        self
    }

    /// Prices and quantities travel as doubles, matching what the app has
    /// always written.
    pub fn decimal(mut self, field: &str, value: Decimal) -> Self {
        let double = value.to_f64().unwrap_or(0.0);
        self.fields
            .insert(field.to_string(), Value::DoubleValue(double));
        self
    }

    pub fn timestamp(mut self, field: &str, value: DateTime<Utc>) -> Self {
        self.fields
            .insert(field.to_string(), Value::TimestampValue(value));
        self
    }

    pub fn geo_point(mut self, field: &str, coordinate: &Coordinate) -> Self {
        self.fields.insert(
            field.to_string(),
            Value::GeoPointValue(GeoPoint {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            }),
        );
        self
    }

    pub fn build(self) -> BTreeMap<String, Value> {
        self.fields
    }
}
