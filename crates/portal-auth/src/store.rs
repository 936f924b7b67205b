// In-memory session store.
//
// HashMap keyed by opaque token behind an `Arc<RwLock<...>>`; data is lost
// when the process exits. This is the process-local stand-in for whatever
// session backend a deployment would delegate to.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::RwLock;

use crate::session::{Session, SessionUser};

/// Length of generated session tokens.
const TOKEN_LENGTH: usize = 32;

/// Generate an opaque alphanumeric token. Used for session tokens and for
/// the OAuth `state` parameter.
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a user with the given TTL in seconds.
    pub async fn create(&self, user: SessionUser, expires_in: u64) -> Session {
        let session = Session {
            token: generate_token(),
            user,
            expires_at: Utc::now() + TimeDelta::seconds(expires_in as i64),
        };
        self.inner
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Resolve a token to a live session. Expired sessions are removed on
    /// read and resolve to `None`.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let expired = {
            let sessions = self.inner.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.inner.write().await.remove(token);
        }
        None
    }

    /// Delete a session. Deleting an unknown token is a no-op — the session
    /// may already have expired or been removed.
    pub async fn remove(&self, token: &str) {
        self.inner.write().await.remove(token);
    }

    /// Number of stored sessions (including not-yet-collected expired ones).
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
