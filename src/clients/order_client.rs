use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderCreate, OrderStatus, PaymentStatus};
use crate::order_actor::{OrderAction, OrderError};
use crate::services::OrderRepository;

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self, order), fields(user_id = %order.user_id, name = %order.name))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<String, OrderError> {
        let id = self.inner.create(order).await?;
        info!(order_id = %id, "Order created");
        Ok(id)
    }
}

#[async_trait]
impl OrderRepository for OrderClient {
    #[instrument(skip(self))]
    async fn user_orders(
        &self,
        user_id: &str,
        status: Option<OrderStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        let orders: Vec<Order> = self
            .list_orders()
            .await?
            .into_iter()
            .filter(|order| order.is_visible_to(user_id))
            .filter(|order| status.as_ref().map_or(true, |s| &order.status == s))
            .filter(|order| payment_status.as_ref().map_or(true, |p| &order.payment_status == p))
            .collect();
        info!(count = orders.len(), "Orders loaded");
        Ok(orders)
    }

    async fn order(&self, id: &str) -> Result<Option<Order>, OrderError> {
        self.get_order(id.to_string()).await
    }

    #[instrument(skip(self))]
    async fn cancel_order(&self, id: &str) -> Result<Order, OrderError> {
        match self.inner.perform_action(id.to_string(), OrderAction::Cancel).await {
            Ok(order) => {
                info!("Order cancelled");
                Ok(order)
            }
            Err(FrameworkError::Rejected(reason)) => {
                warn!(%reason, "Cancellation refused");
                Err(OrderError::NotCancellable(reason))
            }
            Err(e) => Err(e.into()),
        }
    }
}
