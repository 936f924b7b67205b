// Route guard middleware.
//
// Declares which paths require an authenticated session and redirects
// unauthenticated requests to the sign-in page. Session validity itself is
// decided by the store; the guard holds no state beyond the pattern list.

use std::sync::Arc;

use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::context::AppContext;
use crate::cookies;
use crate::routes::redirect_found;

/// Paths that require an authenticated session.
pub const PROTECTED_PATHS: &[&str] = &["/dashboard"];

/// Whether a request path is protected: equal to a pattern, or extending
/// it with a further `/` segment.
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.iter().any(|pattern| {
        path == *pattern
            || path
                .strip_prefix(pattern)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Axum middleware enforcing the protected-path list.
///
/// On a protected path, resolves the session and either passes the request
/// through (with the session attached as an extension) or redirects to the
/// sign-in page.
pub async fn require_session(
    State(ctx): State<Arc<AppContext>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if !is_protected(path) {
        return next.run(req).await;
    }

    let token = cookies::extract_session_token(req.headers(), &ctx.options.session.cookie_prefix);
    let session = match token {
        Some(ref token) => ctx.store.get(token).await,
        None => None,
    };

    match session {
        Some(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        None => {
            tracing::debug!(path = %req.uri().path(), "unauthenticated request to protected path");
            redirect_found(&ctx.options.pages.sign_in)
        }
    }
}
