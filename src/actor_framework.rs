//! # Resource actors
//!
//! A generic in-memory store that runs as a tokio task and is addressed
//! through a cloneable [`ResourceClient`]. Each request carries a oneshot
//! channel for its reply. The storefront's in-memory backend is built from
//! one `ResourceActor` per entity type.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    /// Used in log fields and error messages.
    const KIND: &'static str;

    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// Handle a domain-specific action against the stored entity
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self), fields(kind = T::KIND))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(%id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .insertion_order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(|e| {
                            warn!(%id, error = %e, "Action rejected");
                            FrameworkError::Rejected(e)
                        }),
                        None => Err(FrameworkError::NotFound { kind: T::KIND, id: id.to_string() }),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("Actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(id.clone(), item);
        self.insertion_order.push(id.clone());
        debug!(%id, "Created");
        Ok(id)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derived Clone would demand `T: Clone` on every associated type.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        title: String,
        closed: bool,
    }

    #[derive(Debug)]
    enum TicketAction {
        Close,
    }

    impl Entity for Ticket {
        const KIND: &'static str = "ticket";

        type Id = String;
        type CreateParams = String;
        type Action = TicketAction;
        type ActionResult = bool;

        fn from_create_params(id: String, title: String) -> Result<Self, String> {
            if title.is_empty() {
                return Err("title required".to_string());
            }
            Ok(Self { id, title, closed: false })
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<bool, String> {
            match action {
                TicketAction::Close if self.closed => Err("already closed".to_string()),
                TicketAction::Close => {
                    self.closed = true;
                    Ok(true)
                }
            }
        }
    }

    fn start() -> ResourceClient<Ticket> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("ticket_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_get_and_list_in_insertion_order() {
        let client = start();
        let first = client.create("one".to_string()).await.unwrap();
        let second = client.create("two".to_string()).await.unwrap();
        assert_eq!(first, "ticket_1");

        let fetched = client.get(second.clone()).await.unwrap().unwrap();
        assert_eq!(fetched.title, "two");

        let titles: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_create_validation_is_reported() {
        let client = start();
        let result = client.create(String::new()).await;
        assert_eq!(result, Err(FrameworkError::Rejected("title required".to_string())));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_actions_mutate_and_can_be_rejected() {
        let client = start();
        let id = client.create("bug".to_string()).await.unwrap();
        assert_eq!(client.perform_action(id.clone(), TicketAction::Close).await, Ok(true));
        assert_eq!(
            client.perform_action(id.clone(), TicketAction::Close).await,
            Err(FrameworkError::Rejected("already closed".to_string()))
        );
        assert!(client.get(id).await.unwrap().unwrap().closed);
    }

    #[tokio::test]
    async fn test_missing_entity() {
        let client = start();
        assert_eq!(client.get("nope".to_string()).await, Ok(None));
        let err = client.perform_action("nope".to_string(), TicketAction::Close).await.unwrap_err();
        assert_eq!(err.to_string(), "ticket not found: nope");
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (actor, client) = ResourceActor::<Ticket>::new(1, || "x".to_string());
        drop(actor);
        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }
}
