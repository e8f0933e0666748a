use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::actions::OrderAction;

impl Entity for Order {
    const KIND: &'static str = "order";

    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Order;

    /// Creates a new Order from creation parameters.
    ///
    /// # Errors
    /// Rejects negative or non-finite totals.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if !params.total_price.is_finite() || params.total_price < 0.0 {
            return Err(format!("Invalid total price: {}", params.total_price));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            name: params.name,
            category: params.category,
            total_price: params.total_price,
            created_at: Some(params.created_at),
            delivery_address: Some(params.delivery_address),
            payment_method: params.payment_method,
            status: params.status,
            payment_status: params.payment_status,
            images: params.images,
            credentials: params.credentials,
        })
    }

    /// Handles order-specific actions and returns the updated order.
    fn handle_action(&mut self, action: OrderAction) -> Result<Order, String> {
        match action {
            OrderAction::Cancel => {
                if !self.is_cancellable() {
                    return Err(format!(
                        "Order {} cannot be cancelled (status: {}, payment: {})",
                        self.id, self.status, self.payment_status
                    ));
                }
                self.status = OrderStatus::Cancelled;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentStatus;
    use chrono::Utc;

    fn pending() -> Order {
        let params = OrderCreate::new("user_1", "Netflix Premium", "Streaming Accounts", 4500.0, Utc::now());
        Order::from_create_params("order_1".to_string(), params).unwrap()
    }

    #[test]
    fn test_cancel_pending_unpaid_order() {
        let mut order = pending();
        let updated = order.handle_action(OrderAction::Cancel).unwrap();
        assert_eq!(updated.status, OrderStatus::Cancelled);
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_cancel_paid_order_is_rejected() {
        let mut order = pending();
        order.payment_status = PaymentStatus::Completed;
        let err = order.handle_action(OrderAction::Cancel).unwrap_err();
        assert!(err.contains("cannot be cancelled"));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_cancelled_is_absorbing() {
        let mut order = pending();
        order.handle_action(OrderAction::Cancel).unwrap();
        assert!(order.handle_action(OrderAction::Cancel).is_err());
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let params = OrderCreate::new("user_1", "Bad", "X", -1.0, Utc::now());
        assert!(Order::from_create_params("order_1".to_string(), params).is_err());
    }
}
