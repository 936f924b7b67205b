// Session types.
//
// The session shape is owned by the auth layer; pages only read the
// optional user fields, with fallbacks for anything the provider did not
// supply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user attached to a session. Every field is optional — providers
/// differ in what they return, and pages must render defensively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SessionUser {
    /// Display name with fallback chain: name, then email, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Signed-in user")
    }

    /// Email for display; empty string when absent.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque session token (also the store key and cookie value).
    pub token: String,
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_display_name_fallbacks() {
        let full = SessionUser {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            image: None,
        };
        assert_eq!(full.display_name(), "Ada");

        let email_only = SessionUser {
            name: None,
            email: Some("ada@example.com".into()),
            image: None,
        };
        assert_eq!(email_only.display_name(), "ada@example.com");

        let empty = SessionUser::default();
        assert_eq!(empty.display_name(), "Signed-in user");
        assert_eq!(empty.display_email(), "");
    }

    #[test]
    fn test_expiry() {
        let live = Session {
            token: "t".into(),
            user: SessionUser::default(),
            expires_at: Utc::now() + TimeDelta::hours(1),
        };
        assert!(!live.is_expired());

        let dead = Session {
            token: "t".into(),
            user: SessionUser::default(),
            expires_at: Utc::now() - TimeDelta::seconds(1),
        };
        assert!(dead.is_expired());
    }
}
