//! The storefront controller: resolves the session, fetches through the
//! injected collaborators and turns the result into page models.
//!
//! Page loads never fail outright. An unauthenticated visitor gets a
//! redirect, a failed fetch gets a generic message and malformed records
//! get placeholders.

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::app_system::StorefrontConfig;
use crate::domain::User;
use crate::error::StorefrontError;
use crate::listing::FilterSelection;
use crate::services::{AuthProvider, OrderRepository, ProductRepository};
use crate::view::order_details::{build_order_details, order_not_found};
use crate::view::orders::{build_orders_page, order_card};
use crate::view::shop::build_shop_page;
use crate::view::{OrderCard, OrderDetails, OrdersPage, OrdersPageConfig, PageView, ShopConfig, ShopPage};

pub struct Storefront {
    auth: Arc<dyn AuthProvider>,
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
    config: StorefrontConfig,
    orders_page: OrdersPageConfig,
    shop: ShopConfig,
}

impl Storefront {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        config: StorefrontConfig,
    ) -> Self {
        Self {
            orders_page: config.orders_page(),
            shop: config.shop(),
            auth,
            orders,
            products,
            config,
        }
    }

    /// Fresh selection for the shop, spanning the configured price range.
    pub fn shop_selection(&self) -> FilterSelection {
        FilterSelection::with_price_ceiling(self.shop.max_price)
    }

    pub fn orders_selection(&self) -> FilterSelection {
        OrdersPage::default_selection()
    }

    async fn signed_in_user(&self) -> Option<User> {
        if let Some(user) = self.auth.current_user() {
            return Some(user);
        }
        match self.auth.check_auth().await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Auth check failed");
                None
            }
        }
    }

    fn redirect<T>(&self) -> PageView<T> {
        info!(to = %self.config.auth_path, "Redirecting to sign in");
        PageView::Redirect { to: self.config.auth_path.clone() }
    }

    #[instrument(skip(self, selection), fields(status = ?selection.status, payment = ?selection.payment_status))]
    pub async fn orders_page(&self, selection: &FilterSelection) -> PageView<OrdersPage> {
        let Some(user) = self.signed_in_user().await else {
            return self.redirect();
        };

        let fetched = self
            .orders
            .user_orders(&user.id, selection.status.clone(), selection.payment_status.clone())
            .await;

        match fetched {
            Ok(orders) => {
                let page = build_orders_page(&orders, selection, &self.orders_page);
                info!(shown = page.cards.len(), fetched = orders.len(), "Orders page built");
                PageView::Ready(page)
            }
            Err(e) => {
                error!(error = %e, "Failed to load orders");
                PageView::Failed { message: OrdersPage::FAILED }
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn order_details(&self, id: &str) -> PageView<OrderDetails> {
        let Some(user) = self.signed_in_user().await else {
            return self.redirect();
        };

        match self.orders.order(id).await {
            Ok(Some(order)) if order.is_visible_to(&user.id) => {
                PageView::Ready(build_order_details(&order, &self.orders_page))
            }
            Ok(Some(_)) => {
                warn!(user_id = %user.id, "Order belongs to another user");
                PageView::NotFound(order_not_found())
            }
            Ok(None) => PageView::NotFound(order_not_found()),
            Err(e) => {
                error!(error = %e, "Failed to load order");
                PageView::Failed { message: OrderDetails::FAILED }
            }
        }
    }

    #[instrument(skip(self, selection), fields(category = ?selection.category, sort = selection.sort.as_str()))]
    pub async fn shop_page(&self, selection: &FilterSelection) -> PageView<ShopPage> {
        let fetched = self
            .products
            .all_products(selection.category.as_deref(), selection.search_query())
            .await;

        match fetched {
            Ok(products) => {
                let page = build_shop_page(&products, selection, &self.shop, Utc::now());
                info!(shown = page.products.len(), fetched = products.len(), "Shop page built");
                PageView::Ready(page)
            }
            Err(e) => {
                error!(error = %e, "Failed to load products");
                PageView::Failed { message: ShopPage::FAILED }
            }
        }
    }

    /// Cancels one of the signed-in user's orders and returns its refreshed card.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: &str) -> Result<OrderCard, StorefrontError> {
        let user = self.signed_in_user().await.ok_or(StorefrontError::Unauthenticated)?;

        match self.orders.order(id).await? {
            Some(order) if order.is_visible_to(&user.id) => {}
            _ => return Err(StorefrontError::OrderNotFound(id.to_string())),
        }

        let cancelled = self.orders.cancel_order(id).await?;
        info!("Order cancelled");
        Ok(order_card(&cancelled, &self.orders_page))
    }
}
