//! # Remote auth client
//!
//! [`AuthApi`] is the seam between the session store and the auth service.
//! [`HttpAuthApi`] talks JSON over HTTP with `reqwest`, which compiles to
//! `fetch` on WASM and to hyper on desktop.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`login`](AuthApi::login) | `POST {base}/auth/login` |
//! | [`signup`](AuthApi::signup) | `POST {base}/auth/register` |
//! | [`logout`](AuthApi::logout) | `POST {base}/auth/logout` |
//! | [`refresh`](AuthApi::refresh) | `POST {base}/auth/refresh` |
//! | [`me`](AuthApi::me) | `GET {base}/auth/me` with a bearer token |
//!
//! The trait is `?Send` because browser futures are not `Send`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AuthError, Endpoint};
use crate::forms::{LoginForm, SignupForm};
use crate::models::{AuthResponse, TokenPair, User};

/// Operations offered by the remote auth service.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, form: &LoginForm) -> Result<AuthResponse, AuthError>;
    async fn signup(&self, form: &SignupForm) -> Result<AuthResponse, AuthError>;
    /// Invalidate a refresh token server-side.
    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError>;
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
    async fn me(&self, access_token: &str) -> Result<User, AuthError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// JSON-over-HTTP implementation of [`AuthApi`].
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &store::AcmeConfig) -> Self {
        Self::new(config.api_base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: Endpoint,
        response: reqwest::Response,
    ) -> Result<T, AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let body = response.text().await.unwrap_or_default();
        let err = AuthError::from_response(endpoint, status.as_u16(), &body);
        if let AuthError::Server { status, detail } = &err {
            tracing::error!(?endpoint, status, detail = detail.as_deref().unwrap_or(""), "Auth service error");
        } else {
            tracing::debug!(?endpoint, status = status.as_u16(), "Auth request refused");
        }
        Err(err)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, form: &LoginForm) -> Result<AuthResponse, AuthError> {
        self.post_json(Endpoint::Login, "/auth/login", form).await
    }

    async fn signup(&self, form: &SignupForm) -> Result<AuthResponse, AuthError> {
        self.post_json(Endpoint::Register, "/auth/register", form).await
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.url("/auth/logout"))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::from_response(Endpoint::Logout, status.as_u16(), &body))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        self.post_json(Endpoint::Refresh, "/auth/refresh", &RefreshRequest { refresh_token })
            .await
    }

    async fn me(&self, access_token: &str) -> Result<User, AuthError> {
        let response = self
            .client
            .get(self.url("/auth/me"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::decode(Endpoint::Me, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpAuthApi::new("https://api.acme.test///");
        assert_eq!(api.url("/auth/login"), "https://api.acme.test/auth/login");
    }

    #[test]
    fn test_from_config() {
        let config = store::AcmeConfig::default().with_overrides(Some("http://127.0.0.1:9/"), None);
        let api = HttpAuthApi::from_config(&config);
        assert_eq!(api.url("/auth/me"), "http://127.0.0.1:9/auth/me");
    }

    #[test]
    fn test_refresh_request_is_camel_case() {
        let body = serde_json::to_string(&RefreshRequest { refresh_token: "r1" }).unwrap();
        assert_eq!(body, r#"{"refreshToken":"r1"}"#);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) is closed on test machines; the connection is refused.
        let api = HttpAuthApi::new("http://127.0.0.1:9");
        let err = api
            .login(&LoginForm::new("ada@acme.test", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
    }
}
