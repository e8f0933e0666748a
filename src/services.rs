//! Collaborators the storefront is constructed with.
//!
//! The storefront never fetches data itself. It is handed implementations
//! of these traits, which may talk to a remote API or, as in this crate's
//! binary and tests, to the in-memory actors in [`crate::clients`].

use async_trait::async_trait;

use crate::domain::{Order, OrderStatus, PaymentStatus, Product, User};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::AuthError;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The user already resolved for this session, if any.
    fn current_user(&self) -> Option<User>;

    /// Resolves the session, returning `None` when nobody is signed in.
    async fn check_auth(&self) -> Result<Option<User>, AuthError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders placed by `user_id`, optionally narrowed by status.
    async fn user_orders(
        &self,
        user_id: &str,
        status: Option<OrderStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Vec<Order>, OrderError>;

    async fn order(&self, id: &str) -> Result<Option<Order>, OrderError>;

    /// Asks the backend to withdraw a pending, unpaid order.
    async fn cancel_order(&self, id: &str) -> Result<Order, OrderError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// The catalog, optionally narrowed to one category and a search term.
    async fn all_products(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, ProductError>;
}
