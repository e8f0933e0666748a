use crate::domain::{Order, OrderStatus, PaymentStatus};
use crate::listing::FilterSelection;
use crate::status::{order_status_badge, payment_method_badge, payment_status_badge, StatusBadge};
use crate::timeline::{self, Lifecycle, Timeline};

use super::format::{format_date, format_price, short_reference, text_or, MISSING_TEXT};
use super::{EmptyState, Link, PageView};

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersPageConfig {
    pub currency_symbol: String,
    /// Thumbnails shown per card before collapsing into a `+N` tile.
    pub max_thumbnails: usize,
    pub lifecycle: Lifecycle,
}

impl Default for OrdersPageConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₦".to_string(),
            max_thumbnails: 3,
            lifecycle: Lifecycle::standard(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    pub id: String,
    pub reference: String,
    pub name: String,
    pub category: String,
    pub ordered_on: String,
    pub price: String,
    pub payment_badge: StatusBadge,
    pub payment_label: String,
    /// Shown only for cancelled orders.
    pub cancelled_badge: Option<StatusBadge>,
    pub thumbnails: Vec<String>,
    pub hidden_images: usize,
    pub address: String,
    pub payment_method: StatusBadge,
    pub timeline: Timeline,
    pub can_cancel: bool,
    pub details: Link,
}

/// One option of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersPage {
    pub status_options: Vec<FilterOption>,
    pub payment_options: Vec<FilterOption>,
    pub cards: Vec<OrderCard>,
    pub empty: Option<EmptyState>,
}

impl OrdersPage {
    pub const LOADING: &'static str = "Loading orders...";
    pub const FAILED: &'static str = "Failed to load orders.";

    pub fn loading() -> PageView<OrdersPage> {
        PageView::Loading { message: Self::LOADING }
    }

    /// Orders are not price-filtered, so the selection starts unbounded.
    pub fn default_selection() -> FilterSelection {
        FilterSelection::with_price_ceiling(f64::INFINITY)
    }
}

pub fn empty_orders() -> EmptyState {
    EmptyState {
        title: "No Orders Found",
        message: "You haven't placed any orders yet. Start shopping to see your orders here!",
        action: Some(Link::new("/shop", "Start Shopping")),
    }
}

fn address_line(order: &Order) -> String {
    let Some(address) = &order.delivery_address else {
        return MISSING_TEXT.to_string();
    };
    let parts: Vec<&str> = [&address.street, &address.city, &address.state]
        .into_iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() { MISSING_TEXT.to_string() } else { parts.join(", ") }
}

pub fn order_card(order: &Order, config: &OrdersPageConfig) -> OrderCard {
    let cancelled = config.lifecycle.is_terminal(&order.status);
    let thumbnails: Vec<String> = order.images.iter().take(config.max_thumbnails).cloned().collect();

    OrderCard {
        id: order.id.clone(),
        reference: short_reference(&order.id),
        name: text_or(&order.name, "Untitled order"),
        category: text_or(&order.category, "Uncategorized"),
        ordered_on: format!("Ordered on {}", format_date(order.created_at)),
        price: format_price(order.total_price, &config.currency_symbol),
        payment_badge: payment_status_badge(&order.payment_status),
        payment_label: format!("Payment: {}", text_or(order.payment_status.as_str(), "unknown")),
        cancelled_badge: cancelled.then(|| order_status_badge(&order.status)),
        hidden_images: order.images.len().saturating_sub(thumbnails.len()),
        thumbnails,
        address: address_line(order),
        payment_method: payment_method_badge(order.payment_method),
        timeline: timeline::render(&config.lifecycle, &order.status),
        can_cancel: order.is_cancellable(),
        details: Link::new(format!("/orders/{}", order.id), "View Details"),
    }
}

fn status_options(selected: Option<&OrderStatus>) -> Vec<FilterOption> {
    let statuses = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
    let mut options = vec![FilterOption { value: "all", label: "All Status", selected: selected.is_none() }];
    options.extend(statuses.iter().map(|status| FilterOption {
        value: static_status(status),
        label: order_status_badge(status).label,
        selected: selected == Some(status),
    }));
    options
}

fn payment_options(selected: Option<&PaymentStatus>) -> Vec<FilterOption> {
    let statuses = [PaymentStatus::Pending, PaymentStatus::Completed, PaymentStatus::Failed];
    let mut options = vec![FilterOption { value: "all", label: "All Payments", selected: selected.is_none() }];
    options.extend(statuses.iter().map(|status| FilterOption {
        value: static_payment(status),
        label: payment_status_badge(status).label,
        selected: selected == Some(status),
    }));
    options
}

fn static_status(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
        OrderStatus::Processing => "processing",
        OrderStatus::Shipped => "shipped",
        OrderStatus::Delivered => "delivered",
        OrderStatus::Cancelled => "cancelled",
        OrderStatus::Unknown(_) => "unknown",
    }
}

fn static_payment(status: &PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "pending",
        PaymentStatus::Completed => "completed",
        PaymentStatus::Failed => "failed",
        PaymentStatus::Unknown(_) => "unknown",
    }
}

pub fn build_orders_page(orders: &[Order], selection: &FilterSelection, config: &OrdersPageConfig) -> OrdersPage {
    let cards: Vec<OrderCard> = selection
        .apply(orders)
        .iter()
        .map(|order| order_card(order, config))
        .collect();

    OrdersPage {
        status_options: status_options(selection.status.as_ref()),
        payment_options: payment_options(selection.payment_status.as_ref()),
        empty: cards.is_empty().then(empty_orders),
        cards,
    }
}
