//! Storefront configuration: built-in defaults overridden by `STOREFRONT_*`
//! environment variables.

use config::{Config, Environment};
use serde::Deserialize;

use crate::listing::DEFAULT_MAX_PRICE;
use crate::timeline::Lifecycle;
use crate::view::{OrdersPageConfig, ShopConfig};

/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log: String,
    pub currency_symbol: String,
    pub max_thumbnails: usize,
    pub new_product_days: i64,
    pub max_price: f64,
    /// Where unauthenticated visitors are sent.
    pub auth_path: String,
    /// Mailbox size of each in-memory actor.
    pub channel_buffer: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log: "info".to_string(),
            currency_symbol: "₦".to_string(),
            max_thumbnails: 3,
            new_product_days: 7,
            max_price: DEFAULT_MAX_PRICE,
            auth_path: "/auth".to_string(),
            channel_buffer: 32,
        }
    }
}

impl StorefrontConfig {
    /// Loads from the process environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_environment(Environment::with_prefix(CONFIG_ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn orders_page(&self) -> OrdersPageConfig {
        OrdersPageConfig {
            currency_symbol: self.currency_symbol.clone(),
            max_thumbnails: self.max_thumbnails,
            lifecycle: Lifecycle::standard(),
        }
    }

    pub fn shop(&self) -> ShopConfig {
        ShopConfig {
            currency_symbol: self.currency_symbol.clone(),
            new_product_days: self.new_product_days,
            max_price: self.max_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Environment::with_prefix(CONFIG_ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = StorefrontConfig::from_environment(env(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = StorefrontConfig::from_environment(env(&[
            ("STOREFRONT_CURRENCY_SYMBOL", "$"),
            ("STOREFRONT_MAX_THUMBNAILS", "5"),
            ("STOREFRONT_MAX_PRICE", "500000"),
        ]))
        .unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.max_thumbnails, 5);
        assert_eq!(config.max_price, 500000.0);
        assert_eq!(config.auth_path, "/auth");
        assert_eq!(config.shop().max_price, 500000.0);
        assert_eq!(config.orders_page().max_thumbnails, 5);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result = StorefrontConfig::from_environment(env(&[("STOREFRONT_MAX_THUMBNAILS", "lots")]));
        assert!(result.is_err());
    }
}
