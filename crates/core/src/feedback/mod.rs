pub(crate) mod feedback_errors;
pub(crate) mod feedback_model;
pub(crate) mod feedback_service;
pub(crate) mod feedback_traits;

// Re-export the public interface
pub use feedback_errors::FeedbackError;
pub use feedback_model::{NewSuggestion, Suggestion};
pub use feedback_service::FeedbackService;
pub use feedback_traits::{FeedbackRepositoryTrait, FeedbackServiceTrait};
