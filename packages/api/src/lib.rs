//! # API crate: the contract with the remote auth service
//!
//! The auth backend is an external collaborator. This crate is everything the
//! frontends need to talk to it, and nothing about how it works internally.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`User`], [`TokenPair`], [`AuthResponse`] as they appear on the wire |
//! | [`error`] | [`AuthError`] taxonomy and the status → error mapping |
//! | [`forms`] | Declarative [`LoginForm`] / [`SignupForm`] schemas (`validator` derive) |
//! | [`client`] | The [`AuthApi`] trait and its `reqwest` implementation [`HttpAuthApi`] |

pub mod client;
pub mod error;
pub mod forms;
pub mod models;

pub use client::{AuthApi, HttpAuthApi};
pub use error::{AuthError, Endpoint};
pub use forms::{FieldErrors, LoginForm, SignupForm};
pub use models::{AuthResponse, TokenPair, User};
