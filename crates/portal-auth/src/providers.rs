// OAuth provider registry.
//
// Each provider gets a static endpoint/scope config plus a per-deployment
// descriptor carrying its credential pair and optional authorization
// parameter overrides. Descriptors are built once at startup from the
// environment and are immutable afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::{credentials_from_env, Credentials};
use crate::error::AuthError;

/// The providers this app can sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Google,
    Github,
    Linkedin,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [Self::Google, Self::Github, Self::Linkedin];

    /// Canonical lower-case identifier (e.g., "google").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::Github),
            "linkedin" => Ok(Self::Linkedin),
            other => Err(AuthError::ProviderNotFound(other.to_string())),
        }
    }
}

/// Static configuration for a provider: endpoints and default scopes.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    pub id: ProviderId,
    pub name: &'static str,
    pub authorization_endpoint: &'static str,
    pub default_scopes: &'static [&'static str],
    pub scope_joiner: &'static str,
}

pub static GOOGLE: ProviderConfig = ProviderConfig {
    id: ProviderId::Google,
    name: "Google",
    authorization_endpoint: "https://accounts.google.com/o/oauth2/v2/auth",
    default_scopes: &["openid", "email", "profile"],
    scope_joiner: " ",
};

pub static GITHUB: ProviderConfig = ProviderConfig {
    id: ProviderId::Github,
    name: "GitHub",
    authorization_endpoint: "https://github.com/login/oauth/authorize",
    default_scopes: &["read:user", "user:email"],
    scope_joiner: " ",
};

pub static LINKEDIN: ProviderConfig = ProviderConfig {
    id: ProviderId::Linkedin,
    name: "LinkedIn",
    authorization_endpoint: "https://www.linkedin.com/oauth/v2/authorization",
    default_scopes: &["profile", "email", "openid"],
    scope_joiner: " ",
};

/// Lookup the static config for a provider.
pub fn provider_config(id: ProviderId) -> &'static ProviderConfig {
    match id {
        ProviderId::Google => &GOOGLE,
        ProviderId::Github => &GITHUB,
        ProviderId::Linkedin => &LINKEDIN,
    }
}

/// A registered provider: static config + deployment credentials +
/// authorization parameter overrides.
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    pub client_id: String,
    pub client_secret: String,
    /// Extra query parameters appended to the authorization URL
    /// (e.g., Google's `prompt=consent`).
    pub authorization_params: HashMap<String, String>,
}

impl ProviderDescriptor {
    pub fn new(id: ProviderId, credentials: Credentials) -> Self {
        Self {
            id,
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            authorization_params: HashMap::new(),
        }
    }

    pub fn with_authorization_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.authorization_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn config(&self) -> &'static ProviderConfig {
        provider_config(self.id)
    }
}

/// The set of registered providers. Provider ids are unique; registration
/// order is preserved for display purposes.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. Rejects duplicate ids.
    pub fn register(&mut self, descriptor: ProviderDescriptor) -> crate::Result<()> {
        if self.providers.iter().any(|p| p.id == descriptor.id) {
            return Err(AuthError::config(format!(
                "provider '{}' registered twice",
                descriptor.id
            )));
        }
        self.providers.push(descriptor);
        Ok(())
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: ProviderId) -> Option<&ProviderDescriptor> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Look up a descriptor by its canonical name, erroring on unknown or
    /// unregistered names.
    pub fn lookup(&self, name: &str) -> crate::Result<&ProviderDescriptor> {
        let id: ProviderId = name.parse()?;
        self.get(id)
            .ok_or_else(|| AuthError::ProviderNotFound(name.to_string()))
    }

    /// Registered descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Build the full registry from environment credentials.
    ///
    /// Google carries the authorization parameter overrides used by this
    /// deployment; GitHub and LinkedIn use their provider defaults.
    pub fn from_env() -> Self {
        let mut registry = Self::new();
        for id in ProviderId::ALL {
            let mut descriptor = ProviderDescriptor::new(id, credentials_from_env(id));
            if id == ProviderId::Google {
                descriptor = descriptor.with_authorization_params([
                    ("prompt", "consent"),
                    ("access_type", "offline"),
                    ("response_type", "code"),
                ]);
            }
            // Ids come from ProviderId::ALL, so duplicates cannot occur here.
            let _ = registry.register(descriptor);
        }
        registry
    }
}

/// Build a provider's authorization URL.
///
/// Assembles response_type, client_id, state, scope, and redirect_uri,
/// then appends the descriptor's authorization parameter overrides (which
/// may repeat response_type — providers take the last occurrence).
pub fn authorization_url(
    descriptor: &ProviderDescriptor,
    state: &str,
    redirect_uri: &str,
) -> crate::Result<url::Url> {
    let config = descriptor.config();
    let mut url = url::Url::parse(config.authorization_endpoint)?;

    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &descriptor.client_id)
        .append_pair("state", state)
        .append_pair("scope", &config.default_scopes.join(config.scope_joiner))
        .append_pair("redirect_uri", redirect_uri);

    // Overrides are appended in sorted order so the URL is deterministic.
    let mut params: Vec<_> = descriptor.authorization_params.iter().collect();
    params.sort();
    for (key, value) in params {
        url.query_pairs_mut().append_pair(key, value);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: ProviderId) -> ProviderDescriptor {
        ProviderDescriptor::new(
            id,
            Credentials {
                client_id: "client-123".into(),
                client_secret: "secret-456".into(),
            },
        )
    }

    #[test]
    fn test_provider_id_round_trip() {
        for id in ProviderId::ALL {
            assert_eq!(id.as_str().parse::<ProviderId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_provider_name() {
        let err = "twitter".parse::<ProviderId>().unwrap_err();
        assert!(matches!(err, AuthError::ProviderNotFound(ref name) if name == "twitter"));
    }

    #[test]
    fn test_static_configs() {
        assert_eq!(
            provider_config(ProviderId::Google).authorization_endpoint,
            "https://accounts.google.com/o/oauth2/v2/auth"
        );
        assert_eq!(provider_config(ProviderId::Github).name, "GitHub");
        assert_eq!(
            provider_config(ProviderId::Linkedin).default_scopes,
            &["profile", "email", "openid"]
        );
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = ProviderRegistry::new();
        registry.register(descriptor(ProviderId::Google)).unwrap();
        let err = registry.register(descriptor(ProviderId::Google)).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = ProviderRegistry::new();
        registry.register(descriptor(ProviderId::Github)).unwrap();

        assert!(registry.lookup("github").is_ok());
        // Known provider that is not registered
        assert!(matches!(
            registry.lookup("google").unwrap_err(),
            AuthError::ProviderNotFound(_)
        ));
        // Unknown provider name
        assert!(matches!(
            registry.lookup("myspace").unwrap_err(),
            AuthError::ProviderNotFound(_)
        ));
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = ProviderRegistry::new();
        registry.register(descriptor(ProviderId::Linkedin)).unwrap();
        registry.register(descriptor(ProviderId::Google)).unwrap();
        let ids: Vec<_> = registry.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProviderId::Linkedin, ProviderId::Google]);
    }

    #[test]
    fn test_authorization_url_basic() {
        let url = authorization_url(
            &descriptor(ProviderId::Github),
            "random-state",
            "https://app.example/api/auth/callback/github",
        )
        .unwrap();

        let url_str = url.to_string();
        assert!(url_str.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url_str.contains("response_type=code"));
        assert!(url_str.contains("client_id=client-123"));
        assert!(url_str.contains("state=random-state"));
        assert!(url_str.contains("scope=read%3Auser+user%3Aemail"));
        assert!(url_str.contains("redirect_uri=https%3A%2F%2Fapp.example%2Fapi%2Fauth%2Fcallback%2Fgithub"));
    }

    #[test]
    fn test_authorization_url_with_overrides() {
        let descriptor = descriptor(ProviderId::Google).with_authorization_params([
            ("prompt", "consent"),
            ("access_type", "offline"),
        ]);

        let url = authorization_url(&descriptor, "s", "https://app.example/cb").unwrap();
        let url_str = url.to_string();
        assert!(url_str.contains("prompt=consent"));
        assert!(url_str.contains("access_type=offline"));
    }
}
