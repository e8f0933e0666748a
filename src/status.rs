//! Maps backend status values to the badge the storefront shows for them.
//!
//! Every mapping here is total: unrecognised values land on a neutral
//! "Unknown" badge instead of failing.

use crate::domain::{OrderStatus, PaymentMethod, PaymentStatus};

/// Icon identifiers, named after the icon set the storefront ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Clock,
    Package,
    Truck,
    Check,
    CheckCircle,
    XCircle,
    CreditCard,
    HelpCircle,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Clock => "clock",
            Icon::Package => "package",
            Icon::Truck => "truck",
            Icon::Check => "check",
            Icon::CheckCircle => "check-circle",
            Icon::XCircle => "x-circle",
            Icon::CreditCard => "credit-card",
            Icon::HelpCircle => "help-circle",
        }
    }
}

/// Color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Progress,
    Neutral,
}

impl Tone {
    /// Utility classes for a bordered pill in this tone.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Success => "bg-green-500/10 text-green-600 border-green-500/20",
            Tone::Warning => "bg-yellow-500/10 text-yellow-600 border-yellow-500/20",
            Tone::Danger => "bg-red-500/10 text-red-600 border-red-500/20",
            Tone::Progress => "bg-blue-500/10 text-blue-600 border-blue-500/20",
            Tone::Neutral => "bg-gray-500/10 text-gray-600 border-gray-500/20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub icon: Icon,
    pub label: &'static str,
    pub tone: Tone,
}

impl StatusBadge {
    const fn new(icon: Icon, label: &'static str, tone: Tone) -> Self {
        Self { icon, label, tone }
    }

    pub fn class(&self) -> &'static str {
        self.tone.class()
    }
}

pub const UNKNOWN_BADGE: StatusBadge = StatusBadge::new(Icon::HelpCircle, "Unknown", Tone::Neutral);

pub fn order_status_badge(status: &OrderStatus) -> StatusBadge {
    match status {
        OrderStatus::Pending => StatusBadge::new(Icon::Clock, "Pending", Tone::Warning),
        OrderStatus::Processing => StatusBadge::new(Icon::Package, "Processing", Tone::Progress),
        OrderStatus::Shipped => StatusBadge::new(Icon::Truck, "Shipped", Tone::Progress),
        OrderStatus::Delivered => StatusBadge::new(Icon::Check, "Delivered", Tone::Success),
        OrderStatus::Cancelled => StatusBadge::new(Icon::XCircle, "Cancelled", Tone::Danger),
        OrderStatus::Unknown(_) => UNKNOWN_BADGE,
    }
}

pub fn payment_status_badge(status: &PaymentStatus) -> StatusBadge {
    match status {
        PaymentStatus::Pending => StatusBadge::new(Icon::Clock, "Pending", Tone::Warning),
        PaymentStatus::Completed => StatusBadge::new(Icon::CheckCircle, "Completed", Tone::Success),
        PaymentStatus::Failed => StatusBadge::new(Icon::XCircle, "Failed", Tone::Danger),
        PaymentStatus::Unknown(_) => UNKNOWN_BADGE,
    }
}

pub fn payment_method_badge(method: PaymentMethod) -> StatusBadge {
    match method {
        PaymentMethod::Paystack => StatusBadge::new(Icon::CreditCard, "Paystack", Tone::Neutral),
        PaymentMethod::PayOnDelivery => StatusBadge::new(Icon::Truck, "Pay on Delivery", Tone::Neutral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_order_statuses() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    #[test]
    fn test_every_order_status_has_label_and_icon() {
        for status in all_order_statuses() {
            let badge = order_status_badge(&status);
            assert!(!badge.label.is_empty(), "empty label for {status}");
            assert!(!badge.icon.name().is_empty());
            assert_ne!(badge, UNKNOWN_BADGE, "{status} fell through to unknown");
        }
    }

    #[test]
    fn test_every_payment_status_has_label_and_icon() {
        for status in [PaymentStatus::Pending, PaymentStatus::Completed, PaymentStatus::Failed] {
            let badge = payment_status_badge(&status);
            assert!(!badge.label.is_empty());
            assert_ne!(badge, UNKNOWN_BADGE);
        }
    }

    #[test]
    fn test_unknown_values_fall_back_to_neutral() {
        let badge = order_status_badge(&OrderStatus::from("awaiting_payment"));
        assert_eq!(badge, UNKNOWN_BADGE);
        assert_eq!(badge.tone, Tone::Neutral);

        let badge = payment_status_badge(&PaymentStatus::from(""));
        assert_eq!(badge.label, "Unknown");
        assert_eq!(badge.class(), Tone::Neutral.class());
    }

    #[test]
    fn test_payment_status_colors() {
        assert_eq!(payment_status_badge(&PaymentStatus::Completed).tone, Tone::Success);
        assert_eq!(payment_status_badge(&PaymentStatus::Pending).tone, Tone::Warning);
        assert_eq!(payment_status_badge(&PaymentStatus::Failed).tone, Tone::Danger);
    }

    #[test]
    fn test_payment_method_labels() {
        let gateway = payment_method_badge(PaymentMethod::Paystack);
        assert_eq!((gateway.icon, gateway.label), (Icon::CreditCard, "Paystack"));
        let cod = payment_method_badge(PaymentMethod::PayOnDelivery);
        assert_eq!((cod.icon, cod.label), (Icon::Truck, "Pay on Delivery"));
    }
}
