//! Page models. Each page is one parameterized builder; what varied between
//! page variants is carried by the `*Config` structs instead.

pub mod format;
pub mod order_details;
pub mod orders;
pub mod shop;

pub use order_details::{CredentialsView, OrderDetails};
pub use orders::{OrderCard, OrdersPage, OrdersPageConfig};
pub use shop::{ProductCard, ShopConfig, ShopPage, CATEGORIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub to: String,
    pub label: &'static str,
}

impl Link {
    pub fn new(to: impl Into<String>, label: &'static str) -> Self {
        Self { to: to.into(), label }
    }
}

/// What to show when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
    pub action: Option<Link>,
}

/// Everything a page can turn into.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<T> {
    /// The visitor must sign in first.
    Redirect { to: String },
    Loading { message: &'static str },
    Failed { message: &'static str },
    NotFound(EmptyState),
    Ready(T),
}

impl<T> PageView<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            PageView::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, PageView::Redirect { .. })
    }
}
