//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`Session`] state and the [`SessionStore`] that owns it |
//! | [`guard`] | Pure route access decisions |
//! | [`components`] | Buttons, inputs, cards, alerts and toasts |
//! | [`views`] | Landing, sign-in, sign-up, dashboard shell, overview, profile |

use dioxus::prelude::*;

pub mod components;
pub mod guard;
pub mod session;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaGoogle, FaMicrosoft, FaTwitter};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const ACME_CSS: Asset = asset!("/assets/acme.css");

mod storage;
pub use storage::{make_storage, use_storage, APP_DIR};

mod auth;
pub use auth::{use_session, SessionProvider, SharedSession};

mod sidebar;
pub use sidebar::{load_collapsed, store_collapsed, toggle_collapsed, use_sidebar_collapsed, Sidebar};

mod profile_button;
pub use profile_button::ProfileButton;

pub use guard::{route_guard, use_route_guard, Destination, GuardDecision, RouteAccess};
pub use session::{Session, SessionCell, SessionStore, SubmitError};
