use async_trait::async_trait;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate};
use crate::services::AuthProvider;
use crate::user_actor::AuthError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, AuthError, user);

impl UserClient {
    #[instrument(skip(self, user), fields(user_email = %user.email))]
    pub async fn create_user(&self, user: UserCreate) -> Result<String, AuthError> {
        debug!("Sending request");
        Ok(self.inner.create(user).await?)
    }
}

/// Session-scoped [`AuthProvider`]: remembers which user id the session
/// belongs to and caches the user once resolved.
pub struct SessionAuth {
    users: UserClient,
    session_user_id: Option<String>,
    resolved: Mutex<Option<User>>,
}

impl SessionAuth {
    pub fn signed_in(users: UserClient, user_id: impl Into<String>) -> Self {
        Self {
            users,
            session_user_id: Some(user_id.into()),
            resolved: Mutex::new(None),
        }
    }

    pub fn anonymous(users: UserClient) -> Self {
        Self {
            users,
            session_user_id: None,
            resolved: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AuthProvider for SessionAuth {
    fn current_user(&self) -> Option<User> {
        self.resolved.lock().ok().and_then(|cached| cached.clone())
    }

    #[instrument(skip(self))]
    async fn check_auth(&self) -> Result<Option<User>, AuthError> {
        let Some(user_id) = self.session_user_id.clone() else {
            debug!("No session");
            return Ok(None);
        };
        let user = self.users.get_user(user_id).await?;
        match &user {
            Some(user) => info!(user_name = %user.name, "Session resolved"),
            None => warn!("Session refers to unknown user"),
        }
        if let Ok(mut cached) = self.resolved.lock() {
            *cached = user.clone();
        }
        Ok(user)
    }
}
