use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(reason) => ProductError::ValidationError(reason),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
