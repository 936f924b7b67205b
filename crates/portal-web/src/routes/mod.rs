// Router assembly and shared response helpers.

pub mod actions;
pub mod callback;
pub mod pages;

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::middleware as axum_mw;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::guard;

/// Create a 302 Found redirect response.
pub(crate) fn redirect_found(url: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
}

/// Build the application router.
///
/// The route guard wraps every route; it only acts on the protected-path
/// list, so pages and auth endpoints pass through untouched.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/dashboard", get(pages::dashboard))
        .route("/signin/{provider}", post(actions::sign_in))
        .route("/signout", post(actions::sign_out))
        .route("/api/auth/callback/{provider}", get(callback::callback))
        .layer(axum_mw::from_fn_with_state(ctx.clone(), guard::require_session))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
