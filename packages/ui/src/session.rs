//! # Session store, the single source of truth for authentication state
//!
//! [`Session`] is the value every component reads: the signed-in [`User`],
//! the token pair, and the `is_loading` flag of the in-flight operation.
//! [`SessionStore`] owns it and is the only thing that writes it.
//!
//! ## Cells
//!
//! The store does not care where the `Session` lives. It talks to a
//! [`SessionCell`], implemented for `Signal<Session>` (the running app, where
//! every write re-renders subscribers) and for `Rc<RefCell<Session>>` (tests
//! and non-reactive hosts).
//!
//! ## Persistence
//!
//! Every change goes through `commit`, which writes the durable auth record
//! and the in-memory session from the same value in one synchronous step.
//! There is no await point between the two writes, so no render and no other
//! handler can observe one updated and the other stale.
//!
//! Memory only changes once storage has accepted the write. Clearing falls
//! back to overwriting the record with JSON `null` when the backend refuses
//! the removal; if neither succeeds the operation fails and the session is
//! left as it was. A sign-in whose record cannot be saved stays in memory
//! only, with any older record cleared.
//!
//! `refresh` and `revalidate` remember the token they sent and drop their
//! result when the session changed while the request was in flight.
//!
//! | Operation | Network | Memory + storage |
//! |-----------|---------|------------------|
//! | [`login`](SessionStore::login) / [`signup`](SessionStore::signup) | `POST` | populated on success |
//! | [`logout`](SessionStore::logout) | best-effort `POST` after clearing | cleared first |
//! | [`refresh`](SessionStore::refresh) | `POST` | tokens replaced, cleared if expired |
//! | [`revalidate`](SessionStore::revalidate) | `GET /auth/me` | user replaced |

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use api::{AuthApi, AuthError, AuthResponse, FieldErrors, LoginForm, SignupForm, TokenPair, User};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use store::{keys, load_json, save_json, Storage, StorageError};

/// Client-held record of the authenticated user and their tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_loading: bool,
}

impl Session {
    /// Both the user and the access token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    /// Rebuild the session persisted by a previous run, or an empty one.
    pub fn restore<S: Storage + ?Sized>(storage: &S) -> Self {
        load_json::<Option<PersistedAuth>, S>(storage, keys::AUTH_TOKENS)
            .flatten()
            .map(Session::from)
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(User::display_name)
    }

    fn authenticated(response: AuthResponse) -> Self {
        Self {
            user: Some(response.user),
            access_token: Some(response.tokens.access_token),
            refresh_token: Some(response.tokens.refresh_token),
            is_loading: false,
        }
    }
}

/// Written over the auth record when the backend refuses to remove it.
const CLEARED_RECORD: &str = "null";

/// What survives a reload under [`keys::AUTH_TOKENS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuth {
    user: User,
    access_token: String,
    refresh_token: String,
}

impl PersistedAuth {
    fn from_session(session: &Session) -> Option<Self> {
        Some(Self {
            user: session.user.clone()?,
            access_token: session.access_token.clone()?,
            refresh_token: session.refresh_token.clone().unwrap_or_default(),
        })
    }
}

impl From<PersistedAuth> for Session {
    fn from(record: PersistedAuth) -> Self {
        Self {
            user: Some(record.user),
            access_token: Some(record.access_token),
            refresh_token: Some(record.refresh_token).filter(|t| !t.is_empty()),
            is_loading: false,
        }
    }
}

/// Where a [`SessionStore`] keeps its [`Session`].
pub trait SessionCell {
    fn snapshot(&self) -> Session;
    fn update(&mut self, f: impl FnOnce(&mut Session));
}

impl SessionCell for Signal<Session> {
    fn snapshot(&self) -> Session {
        self.read().clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut Session)) {
        f(&mut *self.write());
    }
}

impl SessionCell for Rc<RefCell<Session>> {
    fn snapshot(&self) -> Session {
        self.borrow().clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut Session)) {
        f(&mut self.borrow_mut());
    }
}

/// Failure of a form submission: either the schema rejected the input (no
/// request was made) or the auth service did.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please correct the highlighted fields.")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Auth(_) => None,
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Auth(e) if e.resets_form())
    }
}

/// Owner of the session state. Clone it into event handlers; clones share the
/// same cell, storage and API client.
#[derive(Clone)]
pub struct SessionStore<C> {
    cell: C,
    storage: Rc<dyn Storage>,
    api: Rc<dyn AuthApi>,
}

impl<C: SessionCell> SessionStore<C> {
    pub fn new(cell: C, storage: Rc<dyn Storage>, api: Rc<dyn AuthApi>) -> Self {
        Self { cell, storage, api }
    }

    pub fn snapshot(&self) -> Session {
        self.cell.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot().is_loading
    }

    /// Sign in with credentials that already passed validation.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.login_checked(LoginForm::new(email, password)).await
    }

    /// Register a new account with input that already passed validation.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.signup_checked(SignupForm::new(name, email, password)).await
    }

    /// Validate the sign-in form, then sign in.
    pub async fn submit_login(&mut self, form: LoginForm) -> Result<(), SubmitError> {
        let form = form.check().map_err(SubmitError::Invalid)?;
        Ok(self.login_checked(form).await?)
    }

    /// Validate the sign-up form, then register.
    pub async fn submit_signup(&mut self, form: SignupForm) -> Result<(), SubmitError> {
        let form = form.check().map_err(SubmitError::Invalid)?;
        Ok(self.signup_checked(form).await?)
    }

    /// Clear the session locally, then ask the service to invalidate the
    /// refresh token.
    ///
    /// The local clear happens before this returns; the returned future only
    /// performs the remote call and never touches local state, so callers
    /// may navigate immediately and run it detached from any component.
    ///
    /// Fails, leaving the user signed in, when storage refuses to drop the
    /// record: a reload would otherwise sign them back in.
    pub fn logout(&mut self) -> Result<impl Future<Output = ()> + 'static, StorageError> {
        let refresh_token = self.snapshot().refresh_token;
        self.commit(Session::default())?;
        tracing::info!("Signed out");

        let api = self.api.clone();
        Ok(async move {
            let Some(token) = refresh_token else {
                return;
            };
            if let Err(e) = api.logout(&token).await {
                tracing::warn!("Refresh token invalidation failed: {e}");
            }
        })
    }

    /// Exchange the refresh token for a new pair. An expired refresh token
    /// ends the session.
    pub async fn refresh(&mut self) -> Result<(), AuthError> {
        let Some(token) = self.snapshot().refresh_token else {
            return Err(AuthError::SessionExpired);
        };
        let outcome = self.api.refresh(&token).await;

        if self.snapshot().refresh_token.as_deref() != Some(token.as_str()) {
            tracing::debug!("Session changed during token refresh, result dropped");
            return outcome.map(drop);
        }
        match outcome {
            Ok(tokens) => Ok(self.replace_tokens(tokens)?),
            Err(e) => {
                if e.ends_session() {
                    tracing::info!("Refresh token rejected, clearing session");
                    self.commit(Session::default())?;
                }
                Err(e)
            }
        }
    }

    /// Re-fetch the profile of a restored session. An expired access token
    /// falls back to [`refresh`](Self::refresh); transport failures keep the
    /// restored session as is.
    pub async fn revalidate(&mut self) -> Result<(), AuthError> {
        let Some(access_token) = self.snapshot().access_token else {
            return Ok(());
        };
        let outcome = self.api.me(&access_token).await;

        let mut next = self.snapshot();
        // Signed out, or signed in again, while the request was in flight
        if next.access_token.as_deref() != Some(access_token.as_str()) {
            tracing::debug!("Session changed during revalidation, result dropped");
            return Ok(());
        }
        match outcome {
            Ok(user) => {
                next.user = Some(user);
                Ok(self.commit(next)?)
            }
            Err(e) if e.ends_session() => self.refresh().await,
            Err(e) => Err(e),
        }
    }

    async fn login_checked(&mut self, form: LoginForm) -> Result<(), AuthError> {
        self.begin()?;
        let result = self.api.login(&form).await;
        self.finish(result)
    }

    async fn signup_checked(&mut self, form: SignupForm) -> Result<(), AuthError> {
        self.begin()?;
        let result = self.api.signup(&form).await;
        self.finish(result)
    }

    fn begin(&mut self) -> Result<(), AuthError> {
        if self.is_loading() {
            return Err(AuthError::Busy);
        }
        self.cell.update(|s| s.is_loading = true);
        Ok(())
    }

    fn finish(&mut self, result: Result<AuthResponse, AuthError>) -> Result<(), AuthError> {
        let result = result.and_then(|response| {
            let user = response.user.display_name().to_string();
            self.commit(Session::authenticated(response))?;
            tracing::info!(user = %user, "Signed in");
            Ok(())
        });
        if result.is_err() {
            self.cell.update(|s| s.is_loading = false);
        }
        result
    }

    fn replace_tokens(&mut self, tokens: TokenPair) -> Result<(), StorageError> {
        let mut next = self.snapshot();
        next.access_token = Some(tokens.access_token);
        next.refresh_token = Some(tokens.refresh_token);
        self.commit(next)
    }

    /// Write `next` to storage, then to memory. Memory is untouched when
    /// storage refuses every write.
    fn commit(&mut self, next: Session) -> Result<(), StorageError> {
        match PersistedAuth::from_session(&next) {
            Some(record) => save_json(&*self.storage, keys::AUTH_TOKENS, &record).or_else(|e| {
                tracing::warn!("Auth record not saved, session kept in memory only: {e}");
                self.clear_record()
            })?,
            None => self.clear_record()?,
        }
        self.cell.update(|s| *s = next);
        Ok(())
    }

    fn clear_record(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::AUTH_TOKENS).or_else(|e| {
            tracing::warn!("{e}; overwriting the auth record instead");
            self.storage.set(keys::AUTH_TOKENS, CLEARED_RECORD)
        })
    }
}
