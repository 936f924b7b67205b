// Environment detection, logger initialization, and credential loading.
//
// All configuration comes from the process environment, read once at
// startup. Credential presence is logged, never enforced — a missing
// secret shows up as a warning and an empty string, and the provider's
// sign-in simply fails at the provider's end.

use std::sync::OnceLock;

use crate::providers::ProviderId;

/// Cached environment mode.
static ENV_MODE: OnceLock<EnvMode> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    Production,
    Development,
    Test,
}

/// Detect the current environment mode from environment variables.
/// Checks `PORTAL_ENV` and `RUST_ENV` in order.
pub fn detect_env_mode() -> EnvMode {
    *ENV_MODE.get_or_init(|| {
        let env_val = std::env::var("PORTAL_ENV")
            .or_else(|_| std::env::var("RUST_ENV"))
            .unwrap_or_default()
            .to_lowercase();

        match env_val.as_str() {
            "production" | "prod" => EnvMode::Production,
            "test" | "testing" => EnvMode::Test,
            _ => EnvMode::Development,
        }
    })
}

pub fn is_production() -> bool {
    detect_env_mode() == EnvMode::Production
}

/// Get the site base URL from `PORTAL_URL`.
pub fn base_url_from_env() -> Option<String> {
    std::env::var("PORTAL_URL").ok()
}

/// Get the listen address from `PORTAL_LISTEN`.
pub fn listen_addr_from_env() -> Option<String> {
    std::env::var("PORTAL_LISTEN").ok()
}

/// Initialize the `tracing` subscriber with appropriate defaults.
/// `RUST_LOG` wins when set; otherwise development gets debug-level
/// app logs and production info-level.
pub fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production() {
            EnvFilter::new("portal=info,tower_http=warn")
        } else {
            EnvFilter::new("portal=debug,tower_http=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}

/// A client id/secret pair read from the environment.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Environment variable names for a provider's credential pair.
fn credential_vars(id: ProviderId) -> (&'static str, &'static str) {
    match id {
        ProviderId::Google => ("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
        ProviderId::Github => ("GITHUB_ID", "GITHUB_SECRET"),
        ProviderId::Linkedin => ("LINKEDIN_ID", "LINKEDIN_SECRET"),
    }
}

/// Read a provider's credential pair from the environment.
///
/// Presence is logged; absence is a warning, not an error. Missing values
/// come back as empty strings so startup never fails on configuration.
pub fn credentials_from_env(id: ProviderId) -> Credentials {
    let (id_var, secret_var) = credential_vars(id);
    let client_id = std::env::var(id_var).unwrap_or_default();
    let client_secret = std::env::var(secret_var).unwrap_or_default();

    tracing::info!(
        provider = %id,
        client_id_present = !client_id.is_empty(),
        client_secret_present = !client_secret.is_empty(),
        "provider credentials loaded"
    );
    if client_id.is_empty() || client_secret.is_empty() {
        tracing::warn!(provider = %id, "incomplete credentials; sign-in with this provider will fail upstream");
    }

    Credentials { client_id, client_secret }
}

/// Log the informational redirect-related environment variables.
///
/// `AUTH_REDIRECT` is never consumed by any logic; it is logged for
/// operator visibility only.
pub fn log_startup_env() {
    tracing::info!(
        portal_url = ?std::env::var("PORTAL_URL").ok(),
        auth_redirect = ?std::env::var("AUTH_REDIRECT").ok(),
        "startup environment"
    );
}
