use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use pricelens_core::constants::SUGGESTIONS_COLLECTION;
use pricelens_core::feedback::{FeedbackRepositoryTrait, NewSuggestion};
use pricelens_core::Result;

use crate::client::FirestoreClient;
use crate::values::{Document, FieldsBuilder};

/// Suggestions appended to the `suggestions` collection with
/// store-assigned ids.
pub struct FirestoreFeedbackRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreFeedbackRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedbackRepositoryTrait for FirestoreFeedbackRepository {
    async fn add_suggestion(&self, suggestion: &NewSuggestion) -> Result<()> {
        let document = Document::with_fields(
            FieldsBuilder::new()
                .string("email", &suggestion.email)
                .string("message", &suggestion.message)
                .timestamp("timestamp", Utc::now())
                .build(),
        );

        self.client
            .add_document(SUGGESTIONS_COLLECTION, &document)
            .await?;
        Ok(())
    }
}
