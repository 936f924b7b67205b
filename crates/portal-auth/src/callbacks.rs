// Auth callbacks — the extension points the application registers with the
// routing layer. Invocation order and triggers are owned by the routing
// layer, not by implementations.

use async_trait::async_trait;

use crate::providers::ProviderId;
use crate::session::{Session, SessionUser};

/// Lifecycle callbacks fired during authentication.
///
/// Every method has a permissive default: sign-in is allowed, the redirect
/// target is honored as requested, and the session passes through
/// unmodified. Applications override the ones they care about.
#[async_trait]
pub trait AuthCallbacks: Send + Sync {
    /// Called when a provider callback has produced a user, before a
    /// session is created. Returning `false` rejects the sign-in.
    async fn on_sign_in(&self, user: &SessionUser, provider: ProviderId) -> bool {
        let _ = (user, provider);
        true
    }

    /// Called to pick the post-authentication landing page. `url` is the
    /// requested destination, `base_url` the site base URL.
    async fn on_redirect(&self, url: &str, base_url: &str) -> String {
        let _ = base_url;
        url.to_string()
    }

    /// Called to shape the session exposed to pages.
    async fn on_session(&self, session: Session) -> Session {
        session
    }
}

/// The no-op callback set: all defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCallbacks;

#[async_trait]
impl AuthCallbacks for DefaultCallbacks {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_default_sign_in_allows() {
        let callbacks = DefaultCallbacks;
        let user = SessionUser::default();
        assert!(callbacks.on_sign_in(&user, ProviderId::Google).await);
    }

    #[tokio::test]
    async fn test_default_redirect_honors_request() {
        let callbacks = DefaultCallbacks;
        let url = callbacks
            .on_redirect("https://app.example/settings", "https://app.example")
            .await;
        assert_eq!(url, "https://app.example/settings");
    }

    #[tokio::test]
    async fn test_default_session_is_identity() {
        let callbacks = DefaultCallbacks;
        let session = Session {
            token: "tok".into(),
            user: SessionUser {
                name: Some("Ada".into()),
                email: None,
                image: None,
            },
            expires_at: Utc::now(),
        };
        let shaped = callbacks.on_session(session.clone()).await;
        assert_eq!(shaped, session);
    }
}
