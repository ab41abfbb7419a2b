//! Session lifecycle over the transient key-value namespace.

use crate::directory::UserDirectory;
use crate::error::{AuthError, Result};
use crate::types::User;
use bridge_traits::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session namespace key for the signed-in user
pub const SESSION_USER_KEY: &str = "session.user";

/// Holds the signed-in user and mirrors it into session storage
pub struct AuthManager {
    directory: UserDirectory,
    session: Arc<dyn KeyValueStore>,
    current: RwLock<Option<User>>,
}

impl AuthManager {
    pub fn new(directory: UserDirectory, session: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory,
            session,
            current: RwLock::new(None),
        }
    }

    /// Reload the signed-in user from session storage.
    ///
    /// An unreadable stored record resolves to signed-out rather than an
    /// error.
    pub async fn hydrate(&self) -> Result<()> {
        let user = match self.session.get(SESSION_USER_KEY).await? {
            Some(value) => match serde_json::from_value::<User>(value) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Stored session user unreadable, signing out");
                    None
                }
            },
            None => None,
        };

        debug!(signed_in = user.is_some(), "Hydrated session");
        *self.current.write().await = user;
        Ok(())
    }

    /// Check credentials against the directory and open a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .directory
            .find_by_credentials(email, password)
            .ok_or(AuthError::InvalidCredentials)?;

        let value = serde_json::to_value(&user)
            .map_err(|e| AuthError::Bridge(bridge_traits::BridgeError::StorageError(e.to_string())))?;
        self.session.set(SESSION_USER_KEY, value).await?;
        *self.current.write().await = Some(user.clone());

        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Close the session and forget the stored user.
    pub async fn logout(&self) -> Result<()> {
        self.session.remove(SESSION_USER_KEY).await?;
        *self.current.write().await = None;
        info!("Signed out");
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}
