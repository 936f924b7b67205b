// portal — social-login demo server.

use std::sync::Arc;

use portal_auth::{env, AppOptions, ProviderRegistry};
use portal_web::hooks::DashboardCallbacks;
use portal_web::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env::init_logger();
    env::log_startup_env();

    let base_url =
        env::base_url_from_env().unwrap_or_else(|| "http://localhost:3000".to_string());
    let options = AppOptions::new(base_url);
    let registry = ProviderRegistry::from_env();

    let ctx = AppContext::new(options, registry, Arc::new(DashboardCallbacks));
    let router = portal_web::build_router(ctx);

    let addr = env::listen_addr_from_env().unwrap_or_else(|| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "portal listening");
    axum::serve(listener, router).await?;

    Ok(())
}
