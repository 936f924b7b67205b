// AppOptions — the application configuration struct.
//
// Built once during process initialization and handed to the request
// handlers by reference; there is no ambient global configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the portal app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOptions {
    /// Base URL of the site (e.g., "http://localhost:3000").
    pub base_url: String,

    /// Path prefix for auth endpoints (default: "/api/auth").
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Page routing for auth flows.
    #[serde(default)]
    pub pages: PageRoutes,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionOptions,
}

fn default_base_path() -> String {
    "/api/auth".to_string()
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            base_path: default_base_path(),
            pages: PageRoutes::default(),
            session: SessionOptions::default(),
        }
    }
}

impl AppOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// The redirect URI registered with a provider for its callback.
    pub fn callback_url(&self, provider: impl std::fmt::Display) -> String {
        format!("{}{}/callback/{}", self.base_url, self.base_path, provider)
    }
}

/// Where auth flows land. The sign-in page, error page, and sign-out
/// landing page are all the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRoutes {
    /// Sign-in page (default: "/").
    #[serde(default = "default_root")]
    pub sign_in: String,

    /// Error page (default: "/").
    #[serde(default = "default_root")]
    pub error: String,

    /// Where the browser lands after sign-out (default: "/").
    #[serde(default = "default_root")]
    pub signed_out: String,
}

fn default_root() -> String {
    "/".to_string()
}

impl Default for PageRoutes {
    fn default() -> Self {
        Self {
            sign_in: default_root(),
            error: default_root(),
            signed_out: default_root(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOptions {
    /// Session TTL in seconds (default: 604800 = 7 days).
    #[serde(default = "default_session_expires_in")]
    pub expires_in: u64,

    /// Cookie name prefix (default: "portal"). The session cookie is
    /// `{prefix}.session_token`.
    #[serde(default = "default_cookie_prefix")]
    pub cookie_prefix: String,
}

fn default_session_expires_in() -> u64 {
    604_800 // 7 days
}

fn default_cookie_prefix() -> String {
    "portal".to_string()
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            expires_in: default_session_expires_in(),
            cookie_prefix: default_cookie_prefix(),
        }
    }
}
