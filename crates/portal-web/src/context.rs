// Application context — the one shared object.
//
// Built once in `main` from options + the provider registry and passed to
// request handlers as `Arc<AppContext>` state. There is no module-level
// auth instance.

use std::sync::Arc;

use axum::http::HeaderMap;

use portal_auth::{AppOptions, AuthCallbacks, ProviderRegistry, Session, SessionStore};

use crate::cookies;

/// Shared application state.
pub struct AppContext {
    pub options: AppOptions,
    pub registry: ProviderRegistry,
    pub store: SessionStore,
    /// The registered auth callbacks (redirect policy, session shaping,
    /// sign-in acceptance).
    pub callbacks: Arc<dyn AuthCallbacks>,
}

// Manual Debug impl because dyn AuthCallbacks is not Debug
impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppContext {
    pub fn new(
        options: AppOptions,
        registry: ProviderRegistry,
        callbacks: Arc<dyn AuthCallbacks>,
    ) -> Arc<Self> {
        Arc::new(Self {
            options,
            registry,
            store: SessionStore::new(),
            callbacks,
        })
    }

    /// Resolve the request's session from its headers, if any.
    pub async fn session_from_headers(&self, headers: &HeaderMap) -> Option<Session> {
        let token =
            cookies::extract_session_token(headers, &self.options.session.cookie_prefix)?;
        self.store.get(&token).await
    }
}
