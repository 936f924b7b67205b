// Page actions — sign-in and sign-out dispatch.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use portal_auth::providers::authorization_url;
use portal_auth::store::generate_token;

use crate::context::AppContext;
use crate::cookies;
use crate::error::ApiError;
use crate::routes::redirect_found;

/// POST /signin/{provider} — redirect the browser to the provider's
/// authorization endpoint.
///
/// The provider name is not validated here; an unknown or unregistered
/// name surfaces as the registry's not-found error.
pub async fn sign_in(
    State(ctx): State<Arc<AppContext>>,
    Path(provider): Path<String>,
) -> Result<Response, ApiError> {
    let descriptor = ctx.registry.lookup(&provider)?;

    // State round-trips through the provider; verifying it on return is
    // owned by the deployment's auth boundary, not this app.
    let state = generate_token();
    let redirect_uri = ctx.options.callback_url(descriptor.id);
    let url = authorization_url(descriptor, &state, &redirect_uri)?;

    tracing::info!(provider = %descriptor.id, "dispatching sign-in");
    Ok(redirect_found(url.as_str()))
}

/// POST /signout — end the session and land on the sign-out page.
pub async fn sign_out(State(ctx): State<Arc<AppContext>>, headers: HeaderMap) -> Response {
    let prefix = &ctx.options.session.cookie_prefix;
    if let Some(token) = cookies::extract_session_token(&headers, prefix) {
        // The session may already be gone; removal is a no-op then.
        ctx.store.remove(&token).await;
    }

    tracing::info!("signed out");
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, ctx.options.pages.signed_out.clone()),
            (header::SET_COOKIE, cookies::clear_session_cookie(prefix)),
        ],
    )
        .into_response()
}
