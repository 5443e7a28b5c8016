//! # Auth error taxonomy
//!
//! Every failure of a remote auth call is mapped into one [`AuthError`]
//! variant. The `Display` text of each variant is the message shown to the
//! user (toast and inline banner), so it never contains transport details or
//! anything the server did not intend to expose. Diagnostic detail is kept in
//! variant fields and logged instead.
//!
//! | Status | Endpoint | Variant |
//! |--------|----------|---------|
//! | 401, 403 | login | [`AuthError::InvalidCredentials`] |
//! | 409, 403 | register | [`AuthError::Conflict`] |
//! | 401 | refresh, me, logout | [`AuthError::SessionExpired`] |
//! | 400, 422 | any | [`AuthError::Rejected`] with the server message |
//! | 5xx, other | any | [`AuthError::Server`] |

use serde::Deserialize;

/// Which remote operation produced a response. Status codes mean different
/// things per endpoint (a 403 on register is a duplicate email, on login it
/// is a refused sign-in).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    Logout,
    Refresh,
    Me,
}

/// Typed failure of an auth operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("This email is already registered. Please use a different email.")]
    Conflict,

    #[error("{0}")]
    Rejected(String),

    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    #[error("Unable to reach the server. Please check your connection and try again.")]
    Network(String),

    #[error("Something went wrong on our side. Please try again.")]
    Server { status: u16, detail: Option<String> },

    #[error("Unexpected response from the server. Please try again.")]
    Decode(String),

    #[error("Another request is already in progress.")]
    Busy,

    #[error("Your sign-in could not be saved on this device. Please try again.")]
    Storage(#[from] store::StorageError),
}

/// Message used when a 400 carries no readable body.
pub const DEFAULT_REJECTED_MESSAGE: &str = "The request was rejected. Please check your details and try again.";

impl AuthError {
    /// Map a non-success HTTP status and its body to an error.
    pub fn from_response(endpoint: Endpoint, status: u16, body: &str) -> Self {
        match (endpoint, status) {
            (Endpoint::Login, 401 | 403) => Self::InvalidCredentials,
            (Endpoint::Register, 409 | 403) => Self::Conflict,
            (Endpoint::Refresh | Endpoint::Me | Endpoint::Logout, 401) => Self::SessionExpired,
            (_, 400 | 422) => Self::Rejected(
                server_message(body).unwrap_or_else(|| DEFAULT_REJECTED_MESSAGE.to_string()),
            ),
            (_, status) => Self::Server {
                status,
                detail: server_message(body),
            },
        }
    }

    /// Whether the form that produced this error should be cleared.
    ///
    /// Only a duplicate email resets the sign-up form; every other failure
    /// keeps the user's input so they can fix and resubmit.
    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Conflict)
    }

    /// Whether the stored session is no longer usable.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Error body shape: `{ "message": "..." }` or `{ "message": ["...", "..."] }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<ErrorMessage>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// Extract the human-readable message from an error body, if any.
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message {
        Some(ErrorMessage::One(m)) => m,
        Some(ErrorMessage::Many(list)) => list.join(". "),
        None => parsed.error?,
    };
    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_do_not_leak_detail() {
        let err = AuthError::from_response(Endpoint::Login, 401, r#"{"message":"user ada not found"}"#);
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!err.to_string().contains("ada"));
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        for status in [403, 409] {
            let err = AuthError::from_response(Endpoint::Register, status, "");
            assert_eq!(err, AuthError::Conflict);
            assert!(err.resets_form());
        }
    }

    #[test]
    fn test_bad_request_carries_server_message() {
        let err = AuthError::from_response(
            Endpoint::Register,
            400,
            r#"{"statusCode":400,"message":["email must be an email","password too weak"]}"#,
        );
        assert_eq!(
            err,
            AuthError::Rejected("email must be an email. password too weak".to_string())
        );
        assert!(!err.resets_form());
    }

    #[test]
    fn test_bad_request_without_body_uses_default() {
        let err = AuthError::from_response(Endpoint::Login, 400, "<html>");
        assert_eq!(err, AuthError::Rejected(DEFAULT_REJECTED_MESSAGE.to_string()));
    }

    #[test]
    fn test_expired_tokens() {
        let err = AuthError::from_response(Endpoint::Refresh, 401, "");
        assert!(err.ends_session());
        let err = AuthError::from_response(Endpoint::Me, 401, "");
        assert!(err.ends_session());
    }

    #[test]
    fn test_server_errors_keep_detail_out_of_message() {
        let err = AuthError::from_response(Endpoint::Login, 502, r#"{"error":"upstream timeout"}"#);
        assert_eq!(
            err,
            AuthError::Server {
                status: 502,
                detail: Some("upstream timeout".to_string())
            }
        );
        assert!(!err.to_string().contains("upstream"));
    }

    #[test]
    fn test_server_message_shapes() {
        assert_eq!(server_message(r#"{"message":"  nope "}"#).as_deref(), Some("nope"));
        assert_eq!(server_message(r#"{"message":""}"#), None);
        assert_eq!(server_message(r#"{"statusCode":500}"#), None);
        assert_eq!(server_message("not json"), None);
    }
}
