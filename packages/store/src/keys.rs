//! Storage keys owned by the client.

/// JSON record holding the signed-in user and the token pair.
pub const AUTH_TOKENS: &str = "auth-tokens";

/// Sidebar collapsed preference, stored as `"1"` or `"0"`.
pub const SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";
