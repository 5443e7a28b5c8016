//! Data models exchanged with the auth service.

mod user;

pub use user::{AuthResponse, TokenPair, User};
