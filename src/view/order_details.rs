use crate::domain::Order;
use crate::status::{order_status_badge, payment_method_badge, payment_status_badge, StatusBadge};
use crate::timeline::{self, Timeline};

use super::format::{format_date_time, format_price, text_or, MISSING_TEXT};
use super::orders::OrdersPageConfig;
use super::{EmptyState, Link, PageView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsView {
    pub email: String,
    pub password: String,
    pub notice: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub id: String,
    pub status_badge: StatusBadge,
    pub status_text: String,
    pub product_name: String,
    pub category: String,
    pub amount: String,
    pub placed_at: String,
    pub payment_badge: StatusBadge,
    pub payment_method: StatusBadge,
    pub timeline: Timeline,
    /// Present only once the order is fulfilled.
    pub credentials: Option<CredentialsView>,
    pub back: Link,
}

impl OrderDetails {
    pub const LOADING: &'static str = "Loading order…";
    pub const FAILED: &'static str = "Failed to load order.";

    pub fn loading() -> PageView<OrderDetails> {
        PageView::Loading { message: Self::LOADING }
    }
}

pub fn order_not_found() -> EmptyState {
    EmptyState {
        title: "Order not found",
        message: "We couldn't find this order on your account.",
        action: Some(Link::new("/orders", "Back to orders")),
    }
}

pub fn build_order_details(order: &Order, config: &OrdersPageConfig) -> OrderDetails {
    OrderDetails {
        id: text_or(&order.id, MISSING_TEXT),
        status_badge: order_status_badge(&order.status),
        status_text: text_or(order.status.as_str(), "unknown"),
        product_name: text_or(&order.name, "Untitled order"),
        category: text_or(&order.category, "Uncategorized"),
        amount: format_price(order.total_price, &config.currency_symbol),
        placed_at: format_date_time(order.created_at),
        payment_badge: payment_status_badge(&order.payment_status),
        payment_method: payment_method_badge(order.payment_method),
        timeline: timeline::render(&config.lifecycle, &order.status),
        credentials: order.visible_credentials().map(|credentials| CredentialsView {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            notice: "Keep this information safe.",
        }),
        back: Link::new("/orders", "Back"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Credentials, OrderStatus, PaymentStatus};
    use crate::status::Icon;
    use chrono::{TimeZone, Utc};

    fn fulfilled() -> Order {
        Order {
            id: "65f1c0ffee0123456789abcd".to_string(),
            name: "ChatGPT Plus".to_string(),
            category: "AI / ChatGPT Accounts".to_string(),
            total_price: 18000.0,
            created_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 18, 45, 0).unwrap()),
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Completed,
            credentials: Some(Credentials {
                email: "buyer@example.com".to_string(),
                password: "s3cret".to_string(),
            }),
            ..Order::default()
        }
    }

    #[test]
    fn test_fulfilled_order_shows_credentials() {
        let details = build_order_details(&fulfilled(), &OrdersPageConfig::default());
        assert_eq!(details.amount, "₦18,000");
        assert_eq!(details.placed_at, "Jun 1, 2025, 06:45 PM");
        assert_eq!(details.status_badge.icon, Icon::Check);
        let credentials = details.credentials.expect("credentials visible");
        assert_eq!(credentials.email, "buyer@example.com");
        assert_eq!(credentials.password, "s3cret");
    }

    #[test]
    fn test_unfulfilled_order_hides_credentials() {
        let mut order = fulfilled();
        order.status = OrderStatus::Shipped;
        let details = build_order_details(&order, &OrdersPageConfig::default());
        assert!(details.credentials.is_none());
        assert_eq!(details.timeline.active_step().map(|s| s.label), Some("Shipped"));
    }

    #[test]
    fn test_unknown_status_degrades() {
        let order = Order { status: OrderStatus::from("credentials_available"), ..Order::default() };
        let details = build_order_details(&order, &OrdersPageConfig::default());
        assert_eq!(details.status_badge.label, "Unknown");
        assert_eq!(details.status_text, "credentials_available");
        assert_eq!(details.id, "—");
        assert_eq!(details.placed_at, "Date unavailable");
        assert!(details.credentials.is_none());
    }
}
