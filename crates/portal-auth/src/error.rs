// Error types for the auth layer.
//
// The app has almost no failure modes of its own: provider-protocol errors
// arrive as callback query parameters and are routed to the error page, so
// the only locally-produced errors are an unregistered provider name and
// configuration/URL-construction failures.

use std::fmt;

/// Auth layer error.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A provider name that is not registered in the provider registry.
    /// Surfaced by registry lookups; sign-in dispatch does not pre-validate.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Configuration error (duplicate provider registration, bad option).
    #[error("configuration error: {0}")]
    Config(String),

    /// Authorization URL could not be constructed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl AuthError {
    /// Stable machine-readable code for the HTTP surface.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProviderNotFound(_) => "PROVIDER_NOT_FOUND",
            Self::Config(_) => "CONFIGURATION_ERROR",
            Self::Url(_) => "INVALID_URL",
        }
    }

    pub fn config(msg: impl fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }
}

/// Unified result type for auth-layer operations.
pub type Result<T> = std::result::Result<T, AuthError>;
