use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::wire::{lenient_timestamp, null_as_default};

/// Lifecycle stage of an order, as reported by the backend.
///
/// Values the backend sends that this build does not know about are kept
/// verbatim in [`OrderStatus::Unknown`] instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Absorbing states: no further progress is displayed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    /// The buyer has received what they paid for; credentials may be shown.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown(raw),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        OrderStatus::from(raw.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Unknown(String::new())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the payment transaction, independent of [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Unknown(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => PaymentStatus::Pending,
            "completed" => PaymentStatus::Completed,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Unknown(raw),
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(raw: &str) -> Self {
        PaymentStatus::from(raw.to_string())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Unknown(String::new())
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the buyer pays. Anything other than the card gateway is treated as
/// pay-on-delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Paystack,
    #[default]
    #[serde(other)]
    PayOnDelivery,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
}

/// Account details handed to the buyer once the order is fulfilled.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A customer order. Owned by the backend; the storefront only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(alias = "productName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_price: f64,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_method: PaymentMethod,
    #[serde(deserialize_with = "null_as_default")]
    pub status: OrderStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_status: PaymentStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    pub credentials: Option<Credentials>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub delivery_address: DeliveryAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub images: Vec<String>,
    pub credentials: Option<Credentials>,
}

impl OrderCreate {
    /// A freshly placed order: pending, unpaid, no images or credentials.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        total_price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            category: category.into(),
            total_price,
            created_at,
            delivery_address: DeliveryAddress::default(),
            payment_method: PaymentMethod::default(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            images: Vec::new(),
            credentials: None,
        }
    }
}

impl Order {
    /// Credentials are only revealed once the order is fulfilled.
    pub fn visible_credentials(&self) -> Option<&Credentials> {
        if self.status.is_fulfilled() {
            self.credentials.as_ref()
        } else {
            None
        }
    }

    /// Orders without a recorded owner are shown to whoever asks for them.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.user_id.is_empty() || self.user_id == user_id
    }

    /// The buyer may still withdraw an order nobody has paid for or started on.
    pub fn is_cancellable(&self) -> bool {
        self.status == OrderStatus::Pending && self.payment_status == PaymentStatus::Pending
    }
}
