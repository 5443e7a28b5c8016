//! # User and token models
//!
//! [`User`] is the opaque profile returned by the auth service. The client
//! never validates it; the only derived value is [`User::display_name`],
//! which falls back to the email local-part when no name is set.
//!
//! [`TokenPair`] and [`AuthResponse`] mirror the service's camelCase JSON.
//! Snake-case spellings are accepted as aliases so both backend styles
//! deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Get display name, falling back to the email local-part if name is not set.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name;
        }
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => "User",
        }
    }
}

/// Access/refresh token pair issued by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    #[serde(alias = "access_token")]
    pub access_token: String,
    #[serde(alias = "refresh_token")]
    pub refresh_token: String,
}

/// Successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: &str) -> User {
        User {
            id: None,
            name: name.map(str::to_string),
            email: email.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(user(Some("Ada Lovelace"), "ada@acme.test").display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        assert_eq!(user(None, "grace.hopper@acme.test").display_name(), "grace.hopper");
        assert_eq!(user(Some("   "), "linus@acme.test").display_name(), "linus");
    }

    #[test]
    fn test_display_name_last_resort() {
        assert_eq!(user(None, "@acme.test").display_name(), "User");
        assert_eq!(user(None, "").display_name(), "User");
    }

    #[test]
    fn test_auth_response_camel_case() {
        let json = r#"{
            "user": {
                "id": "42",
                "name": "Ada",
                "email": "ada@acme.test",
                "createdAt": "2025-08-16T10:00:00Z",
                "updatedAt": "2025-09-15T08:30:00Z"
            },
            "accessToken": "acc",
            "refreshToken": "ref"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.display_name(), "Ada");
        assert_eq!(resp.tokens.access_token, "acc");
        assert_eq!(resp.tokens.refresh_token, "ref");
        assert!(resp.user.created_at.is_some());
    }

    #[test]
    fn test_auth_response_snake_case_aliases() {
        let json = r#"{
            "user": { "email": "ada@acme.test", "created_at": "2025-08-16T10:00:00Z" },
            "access_token": "acc",
            "refresh_token": "ref"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.tokens.access_token, "acc");
        assert!(resp.user.name.is_none());
        assert!(resp.user.created_at.is_some());
        assert_eq!(resp.user.display_name(), "ada");
    }
}
