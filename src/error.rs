use thiserror::Error;

use crate::order_actor::OrderError;

/// Errors surfaced by storefront actions (as opposed to page loads, which
/// degrade to a [`crate::view::PageView`] instead of failing).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Sign in required")]
    Unauthenticated,
    #[error("Order not found: {0}")]
    OrderNotFound(String),
    #[error(transparent)]
    Order(#[from] OrderError),
}
