use thiserror::Error;

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::AuthError;

/// Failures while starting, seeding or stopping the in-memory system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
