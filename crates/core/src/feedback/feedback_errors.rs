use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("A suggestion needs a message")]
    EmptyMessage,
}
