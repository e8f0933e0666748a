use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while resolving the signed-in user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AuthError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(reason) => AuthError::ValidationError(reason),
            other => AuthError::ActorCommunicationError(other.to_string()),
        }
    }
}
