use std::sync::Arc;

use log::debug;

use super::feedback_errors::FeedbackError;
use super::feedback_model::NewSuggestion;
use super::feedback_traits::{FeedbackRepositoryTrait, FeedbackServiceTrait};
use crate::Result;

/// Service forwarding user suggestions to the store.
pub struct FeedbackService {
    feedback_repository: Arc<dyn FeedbackRepositoryTrait>,
}

impl FeedbackService {
    pub fn new(feedback_repository: Arc<dyn FeedbackRepositoryTrait>) -> Self {
        Self { feedback_repository }
    }
}

#[async_trait::async_trait]
impl FeedbackServiceTrait for FeedbackService {
    /// Persists a suggestion. The email is optional free text; the message
    /// must not be blank.
    async fn submit(&self, email: &str, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            return Err(FeedbackError::EmptyMessage.into());
        }

        let suggestion = NewSuggestion {
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        };

        self.feedback_repository.add_suggestion(&suggestion).await?;
        debug!("Submitted suggestion ({} chars)", suggestion.message.len());
        Ok(())
    }
}
