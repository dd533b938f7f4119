//! Session registry standing in for the external identity provider.
//!
//! Issues opaque bearer tokens for signed-in users. Nothing is persisted;
//! restarting the service signs everyone out.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::User;

#[derive(Default)]
pub struct SessionStore {
    users: RwLock<HashMap<String, User>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in and return their session.
    pub fn create_session(&self, display_name: &str, email: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            token: Uuid::new_v4().to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            signed_in_at: Utc::now(),
            last_seen_at: Utc::now(),
        };

        self.users
            .write()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))?
            .insert(user.token.clone(), user.clone());

        Ok(user)
    }

    /// Look up the user owning `token`.
    pub fn get_by_token(&self, token: &str) -> Result<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))?;
        Ok(users.get(token).cloned())
    }

    /// Record activity on a session.
    pub fn touch(&self, token: &str, at: DateTime<Utc>) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))?;
        if let Some(user) = users.get_mut(token) {
            user.last_seen_at = at;
        }
        Ok(())
    }

    /// Sign out; returns whether the session existed.
    pub fn remove(&self, token: &str) -> Result<bool> {
        let mut users = self
            .users
            .write()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))?;
        Ok(users.remove(token).is_some())
    }
}
