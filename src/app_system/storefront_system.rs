use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{OrderClient, ProductClient, SessionAuth, UserClient};
use crate::domain::{Order, Product, User};
use crate::storefront::Storefront;

use super::{StorefrontConfig, SystemError};

fn spawn_actor<T: Entity<Id = String>>(
    buffer_size: usize,
    prefix: &'static str,
) -> (ResourceClient<T>, tokio::task::JoinHandle<()>) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst));
    let (actor, client) = ResourceActor::<T>::new(buffer_size, next_id);
    (client, tokio::spawn(actor.run()))
}

/// The in-memory backend: one actor per entity type plus the clients that
/// implement the storefront's collaborator traits on top of them.
pub struct StorefrontSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub product_client: ProductClient,
    config: StorefrontConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    pub fn new(config: StorefrontConfig) -> Self {
        info!("Starting storefront system");

        let (users, user_handle) = spawn_actor::<User>(config.channel_buffer, "user");
        let (products, product_handle) = spawn_actor::<Product>(config.channel_buffer, "product");
        let (orders, order_handle) = spawn_actor::<Order>(config.channel_buffer, "order");

        Self {
            order_client: OrderClient::new(orders),
            user_client: UserClient::new(users),
            product_client: ProductClient::new(products),
            config,
            handles: vec![user_handle, product_handle, order_handle],
        }
    }

    /// A storefront whose session belongs to `user_id`, or to nobody.
    pub fn storefront(&self, session_user_id: Option<&str>) -> Storefront {
        let auth = match session_user_id {
            Some(id) => SessionAuth::signed_in(self.user_client.clone(), id),
            None => SessionAuth::anonymous(self.user_client.clone()),
        };
        Storefront::new(
            Arc::new(auth),
            Arc::new(self.order_client.clone()),
            Arc::new(self.product_client.clone()),
            self.config.clone(),
        )
    }

    /// Drops the clients, closing every mailbox, then waits for the actors.
    /// Storefronts handed out earlier must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
