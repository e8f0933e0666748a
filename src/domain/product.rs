use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{lenient_timestamp, null_as_default};

/// Represents a listing in the marketplace catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub images: Vec<String>,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            created_at,
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

impl Product {
    /// First listing image, if the product has any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_product_still_decodes() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","name":null,"price":null,"images":null,"createdAt":"yesterday"}"#,
        )
        .unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
        assert!(product.images.is_empty());
        assert!(product.created_at.is_none());
        assert!(product.cover_image().is_none());
    }
}
