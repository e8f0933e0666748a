use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate};
use crate::listing::FilterSelection;
use crate::product_actor::ProductError;
use crate::services::ProductRepository;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(product).await?)
    }
}

#[async_trait]
impl ProductRepository for ProductClient {
    #[instrument(skip(self))]
    async fn all_products(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, ProductError> {
        // Unbounded price range: only category and search narrow the catalog here.
        let mut query = FilterSelection::with_price_ceiling(f64::INFINITY);
        if let Some(category) = category {
            query = query.category(category);
        }
        if let Some(search) = search {
            query = query.search(search);
        }
        let products: Vec<Product> = self
            .list_products()
            .await?
            .into_iter()
            .filter(|product| query.matches(product))
            .collect();
        info!(count = products.len(), "Products loaded");
        Ok(products)
    }
}
