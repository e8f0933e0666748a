use chrono::{DateTime, Utc};

use crate::domain::Product;
use crate::listing::{FilterSelection, SortOption, ViewMode, ALL_CATEGORIES, DEFAULT_MAX_PRICE};

use super::format::{format_price, is_new, text_or};
use super::{EmptyState, Link, PageView};

/// Catalog sections, in display order.
pub const CATEGORIES: [&str; 11] = [
    ALL_CATEGORIES,
    "Facebook Logs",
    "Instagram Logs",
    "TikTok Accounts",
    "Snapchat Accounts",
    "Twitter (X) Accounts",
    "Gmail / Email Logs",
    "VPN Accounts",
    "Streaming Accounts",
    "AI / ChatGPT Accounts",
    "Other Digital Logs",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub currency_symbol: String,
    pub new_product_days: i64,
    pub max_price: f64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₦".to_string(),
            new_product_days: 7,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
    pub is_new: bool,
    pub details: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChoice {
    pub option: SortOption,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopPage {
    pub categories: Vec<CategoryChip>,
    pub sort_choices: Vec<SortChoice>,
    pub view_mode: ViewMode,
    /// Labels of the chips in the "Active filters" row; empty hides the row.
    pub active_filters: Vec<String>,
    pub products: Vec<ProductCard>,
    pub empty: Option<EmptyState>,
}

impl ShopPage {
    pub const LOADING: &'static str = "Loading items…";
    pub const FAILED: &'static str = "Failed to load marketplace items.";

    pub fn loading() -> PageView<ShopPage> {
        PageView::Loading { message: Self::LOADING }
    }
}

pub fn empty_shop() -> EmptyState {
    EmptyState {
        title: "Nothing here",
        message: "No logs or digital items found.",
        action: None,
    }
}

pub fn product_card(product: &Product, config: &ShopConfig, now: DateTime<Utc>) -> ProductCard {
    ProductCard {
        id: product.id.clone(),
        name: text_or(&product.name, "Untitled listing"),
        category: text_or(&product.category, "Uncategorized"),
        price: format_price(product.price, &config.currency_symbol),
        image: product.cover_image().filter(|url| !url.is_empty()).map(str::to_string),
        is_new: is_new(product.created_at, now, config.new_product_days),
        details: Link::new(format!("/shop/{}", product.id), "View Details"),
    }
}

fn active_filter_chips(selection: &FilterSelection) -> Vec<String> {
    let mut chips = Vec::new();
    if selection.search_query().is_some() {
        chips.push("Search".to_string());
    }
    if let Some(category) = &selection.category {
        chips.push(category.clone());
    }
    if selection.price_narrowed() {
        chips.push("Price".to_string());
    }
    chips
}

pub fn build_shop_page(
    products: &[Product],
    selection: &FilterSelection,
    config: &ShopConfig,
    now: DateTime<Utc>,
) -> ShopPage {
    let selected_category = selection.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let cards: Vec<ProductCard> = selection
        .apply(products)
        .iter()
        .map(|product| product_card(product, config, now))
        .collect();

    ShopPage {
        categories: CATEGORIES
            .iter()
            .map(|&name| CategoryChip { name, selected: name == selected_category })
            .collect(),
        sort_choices: SortOption::ALL
            .iter()
            .map(|&option| SortChoice { option, label: option.label(), selected: option == selection.sort })
            .collect(),
        view_mode: selection.view_mode,
        active_filters: active_filter_chips(selection),
        empty: cards.is_empty().then(empty_shop),
        products: cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
    }

    fn product(id: &str, name: &str, category: &str, price: f64, age_days: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            created_at: Some(now() - Duration::days(age_days)),
            images: vec![format!("{id}.png")],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "NordVPN 1 Year", "VPN Accounts", 7000.0, 1),
            product("p2", "Aged Facebook", "Facebook Logs", 15000.0, 30),
            product("p3", "Netflix 4K", "Streaming Accounts", 4000.0, 3),
            product("p4", "Verified Business Page", "Facebook Logs", 450000.0, 2),
        ]
    }

    #[test]
    fn test_default_page() {
        let page = build_shop_page(&catalog(), &FilterSelection::default(), &ShopConfig::default(), now());
        let names: Vec<&str> = page.products.iter().map(|p| p.name.as_str()).collect();
        // Newest first; the 450k listing is above the default price ceiling.
        assert_eq!(names, vec!["NordVPN 1 Year", "Netflix 4K", "Aged Facebook"]);
        assert!(page.active_filters.is_empty());
        assert!(page.empty.is_none());
        assert!(page.categories[0].selected);
        assert_eq!(page.categories.len(), 11);
        assert_eq!(page.view_mode, ViewMode::Grid);
    }

    #[test]
    fn test_product_card() {
        let card = product_card(&catalog()[0], &ShopConfig::default(), now());
        assert_eq!(card.price, "₦7,000");
        assert!(card.is_new);
        assert_eq!(card.image.as_deref(), Some("p1.png"));
        assert_eq!(card.details.to, "/shop/p1");

        let old = product_card(&catalog()[1], &ShopConfig::default(), now());
        assert!(!old.is_new);
    }

    #[test]
    fn test_product_without_images() {
        let mut p = catalog().remove(0);
        p.images.clear();
        assert!(product_card(&p, &ShopConfig::default(), now()).image.is_none());
    }

    #[test]
    fn test_filtered_page_shows_chips_and_sorting() {
        let selection = FilterSelection::default()
            .category("Facebook Logs")
            .search("aged")
            .sort(SortOption::PriceHigh)
            .view_mode(ViewMode::List);
        let page = build_shop_page(&catalog(), &selection, &ShopConfig::default(), now());
        assert_eq!(page.active_filters, vec!["Search".to_string(), "Facebook Logs".to_string()]);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.view_mode, ViewMode::List);
        let selected: Vec<SortOption> = page.sort_choices.iter().filter(|c| c.selected).map(|c| c.option).collect();
        assert_eq!(selected, vec![SortOption::PriceHigh]);
        assert!(page.categories.iter().any(|c| c.name == "Facebook Logs" && c.selected));
    }

    #[test]
    fn test_price_only_filter_chip() {
        let selection = FilterSelection::default().price_range(5000.0, DEFAULT_MAX_PRICE);
        let page = build_shop_page(&catalog(), &selection, &ShopConfig::default(), now());
        assert_eq!(page.active_filters, vec!["Price".to_string()]);
        assert_eq!(page.products.len(), 2);
    }

    #[test]
    fn test_price_chip_alongside_search() {
        let selection = FilterSelection::default().search("vpn").price_range(0.0, 10_000.0);
        let page = build_shop_page(&catalog(), &selection, &ShopConfig::default(), now());
        assert_eq!(page.active_filters, vec!["Search".to_string(), "Price".to_string()]);
    }

    #[test]
    fn test_status_filter_adds_no_chip() {
        let selection = FilterSelection::default().status(crate::domain::OrderStatus::Pending);
        let page = build_shop_page(&catalog(), &selection, &ShopConfig::default(), now());
        assert!(page.active_filters.is_empty());
    }

    #[test]
    fn test_empty_shop() {
        let selection = FilterSelection::default().search("spotify");
        let page = build_shop_page(&catalog(), &selection, &ShopConfig::default(), now());
        assert!(page.products.is_empty());
        assert_eq!(page.empty.map(|e| e.message), Some("No logs or digital items found."));
    }
}
