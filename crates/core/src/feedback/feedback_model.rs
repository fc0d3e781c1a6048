use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user suggestion submitted from the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub email: String,
    pub message: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Input model for a suggestion about to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuggestion {
    pub email: String,
    pub message: String,
}
