// The app's auth callbacks: unconditional sign-in acceptance, the
// dashboard redirect policy, and pass-through session shaping.

use async_trait::async_trait;

use portal_auth::providers::ProviderId;
use portal_auth::{AuthCallbacks, Session, SessionUser};

/// Pick the post-authentication landing page.
///
/// Any same-origin or root target lands on the dashboard; anything else is
/// honored as requested. The `starts_with` arm also covers the equality
/// arm and, for same-origin callback URLs, the `contains` arm — all four
/// are kept in this order to preserve the observable behavior, including
/// the pass-through of foreign-origin targets.
pub fn decide_redirect(target_url: &str, base_url: &str) -> String {
    if target_url.contains("/api/auth/callback")
        || target_url == base_url
        || target_url == "/"
        || target_url.starts_with(base_url)
    {
        return format!("{base_url}/dashboard");
    }
    target_url.to_string()
}

/// The callback set registered by this app.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardCallbacks;

#[async_trait]
impl AuthCallbacks for DashboardCallbacks {
    /// Every provider-authenticated user is allowed in; there is no
    /// allow-list or denial logic.
    async fn on_sign_in(&self, user: &SessionUser, provider: ProviderId) -> bool {
        tracing::info!(%provider, email = ?user.email, "sign-in attempt");
        true
    }

    async fn on_redirect(&self, url: &str, base_url: &str) -> String {
        let target = decide_redirect(url, base_url);
        tracing::debug!(requested = url, landing = %target, "redirect decided");
        target
    }

    /// Identity — the session is exposed to pages unmodified. Kept as the
    /// seam for future claim shaping.
    async fn on_session(&self, session: Session) -> Session {
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const BASE: &str = "https://app.example";

    #[test]
    fn test_callback_url_lands_on_dashboard() {
        assert_eq!(
            decide_redirect("https://app.example/api/auth/callback/google", BASE),
            "https://app.example/dashboard"
        );
    }

    #[test]
    fn test_foreign_callback_url_still_lands_on_dashboard() {
        // The contains arm fires even for a foreign origin carrying the
        // callback path.
        assert_eq!(
            decide_redirect("https://elsewhere.example/api/auth/callback/google", BASE),
            "https://app.example/dashboard"
        );
    }

    #[test]
    fn test_base_url_lands_on_dashboard() {
        assert_eq!(decide_redirect(BASE, BASE), "https://app.example/dashboard");
    }

    #[test]
    fn test_root_lands_on_dashboard() {
        assert_eq!(decide_redirect("/", BASE), "https://app.example/dashboard");
    }

    #[test]
    fn test_same_origin_target_lands_on_dashboard() {
        assert_eq!(
            decide_redirect("https://app.example/settings", BASE),
            "https://app.example/dashboard"
        );
        assert_eq!(
            decide_redirect("https://app.example/", BASE),
            "https://app.example/dashboard"
        );
    }

    #[test]
    fn test_foreign_origin_is_honored() {
        // Foreign-origin targets pass through unchanged.
        assert_eq!(
            decide_redirect("https://attacker.example", BASE),
            "https://attacker.example"
        );
        assert_eq!(
            decide_redirect("https://evil.example/", BASE),
            "https://evil.example/"
        );
    }

    #[test]
    fn test_relative_non_root_target_is_honored() {
        assert_eq!(decide_redirect("/settings", BASE), "/settings");
    }

    #[tokio::test]
    async fn test_on_redirect_applies_policy() {
        let callbacks = DashboardCallbacks;
        assert_eq!(
            callbacks.on_redirect("/", BASE).await,
            "https://app.example/dashboard"
        );
        assert_eq!(
            callbacks.on_redirect("https://attacker.example", BASE).await,
            "https://attacker.example"
        );
    }

    #[tokio::test]
    async fn test_on_sign_in_always_allows() {
        let callbacks = DashboardCallbacks;
        assert!(callbacks.on_sign_in(&SessionUser::default(), ProviderId::Google).await);
        assert!(
            callbacks
                .on_sign_in(
                    &SessionUser {
                        name: None,
                        email: Some("anyone@anywhere.example".into()),
                        image: None,
                    },
                    ProviderId::Linkedin,
                )
                .await
        );
    }

    #[tokio::test]
    async fn test_on_session_is_identity() {
        let callbacks = DashboardCallbacks;
        let session = Session {
            token: "tok".into(),
            user: SessionUser {
                name: Some("Ada".into()),
                email: Some("ada@example.com".into()),
                image: Some("https://img.example/a.png".into()),
            },
            expires_at: Utc::now(),
        };
        assert_eq!(callbacks.on_session(session.clone()).await, session);
    }
}
