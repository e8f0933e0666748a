//! Client-side filtering and sorting of order and product lists.
//!
//! A [`FilterSelection`] holds the ephemeral choices a visitor makes on a
//! page. [`FilterSelection::apply`] keeps the items matching every active
//! predicate and orders them with exactly one comparator. Sorting is
//! stable, so items with equal keys keep their incoming order.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::domain::{Order, OrderStatus, PaymentStatus, Product};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Upper bound of the shop's price slider.
pub const DEFAULT_MAX_PRICE: f64 = 300_000.0;

/// Anything that can appear in a filterable list.
pub trait Listing {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> f64;
    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn order_status(&self) -> Option<&OrderStatus> {
        None
    }

    fn payment_status(&self) -> Option<&PaymentStatus> {
        None
    }
}

impl Listing for Order {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> f64 {
        self.total_price
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn order_status(&self) -> Option<&OrderStatus> {
        Some(&self.status)
    }

    fn payment_status(&self) -> Option<&PaymentStatus> {
        Some(&self.payment_status)
    }
}

impl Listing for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_MAX_PRICE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Newest first.
    #[default]
    Default,
    PriceLow,
    PriceHigh,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    /// Form value; unrecognised values select the default ordering.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-low" => SortOption::PriceLow,
            "price-high" => SortOption::PriceHigh,
            "name-asc" => SortOption::NameAsc,
            "name-desc" => SortOption::NameDesc,
            _ => SortOption::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Newest",
            SortOption::PriceLow => "Price: Low → High",
            SortOption::PriceHigh => "Price: High → Low",
            SortOption::NameAsc => "Name A–Z",
            SortOption::NameDesc => "Name Z–A",
        }
    }

    fn compare<T: Listing>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortOption::PriceLow => a.price().total_cmp(&b.price()),
            SortOption::PriceHigh => b.price().total_cmp(&a.price()),
            SortOption::NameAsc => compare_names(a.name(), b.name()),
            SortOption::NameDesc => compare_names(b.name(), a.name()),
            // Option orders None first, so reversing puts undated items last.
            SortOption::Default => b.created_at().cmp(&a.created_at()),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Filter and sort choices for one page visit.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub category: Option<String>,
    pub search: String,
    pub price_range: PriceRange,
    pub sort: SortOption,
    pub view_mode: ViewMode,
    price_ceiling: f64,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::with_price_ceiling(DEFAULT_MAX_PRICE)
    }
}

impl FilterSelection {
    /// Fresh selection whose price range spans `0..=ceiling`.
    pub fn with_price_ceiling(ceiling: f64) -> Self {
        Self {
            status: None,
            payment_status: None,
            category: None,
            search: String::new(),
            price_range: PriceRange::new(0.0, ceiling),
            sort: SortOption::Default,
            view_mode: ViewMode::Grid,
            price_ceiling: ceiling,
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    /// Selecting [`ALL_CATEGORIES`] clears the category filter.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category == ALL_CATEGORIES { None } else { Some(category) };
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// Search text as sent to a backend: `None` when blank.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// The price range no longer spans `0..=ceiling`.
    pub fn price_narrowed(&self) -> bool {
        self.price_range.min > 0.0 || self.price_range.max < self.price_ceiling
    }

    pub fn has_active_filters(&self) -> bool {
        self.search_query().is_some()
            || self.category.is_some()
            || self.status.is_some()
            || self.payment_status.is_some()
            || self.price_narrowed()
    }

    /// Back to defaults. The view mode is a layout preference and survives.
    pub fn reset(&mut self) {
        let view_mode = self.view_mode;
        *self = Self::with_price_ceiling(self.price_ceiling);
        self.view_mode = view_mode;
    }

    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        if let Some(status) = &self.status {
            if item.order_status() != Some(status) {
                return false;
            }
        }
        if let Some(payment) = &self.payment_status {
            if item.payment_status() != Some(payment) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !item.category().eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if !self.price_range.contains(item.price()) {
            return false;
        }
        match self.search_query() {
            Some(query) => matches_search(item, query),
            None => true,
        }
    }

    /// Items matching every active filter, in the selected order.
    pub fn apply<T: Listing + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut selected: Vec<T> = items.iter().filter(|item| self.matches(*item)).cloned().collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }
}

fn matches_search<T: Listing>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.name().to_lowercase().contains(&needle) || item.category().to_lowercase().contains(&needle)
}
