use async_trait::async_trait;

use super::feedback_model::NewSuggestion;
use crate::Result;

/// Trait defining the contract for feedback repository operations.
#[async_trait]
pub trait FeedbackRepositoryTrait: Send + Sync {
    async fn add_suggestion(&self, suggestion: &NewSuggestion) -> Result<()>;
}

/// Trait defining the contract for feedback operations.
#[async_trait]
pub trait FeedbackServiceTrait: Send + Sync {
    async fn submit(&self, email: &str, message: &str) -> Result<()>;
}
