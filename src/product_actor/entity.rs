use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};

impl Entity for Product {
    const KIND: &'static str = "product";

    type Id = String;
    type CreateParams = ProductCreate;
    type Action = ();
    type ActionResult = ();

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects blank names and negative or non-finite prices.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Product name required".to_string());
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(format!("Invalid price: {}", params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            created_at: Some(params.created_at),
            images: params.images,
        })
    }

    /// The catalog is read-only from the storefront.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
