//! Page-level views shared by every platform.
//!
//! Each view is platform-agnostic: navigation that depends on the router's
//! `Route` enum is handed back to the platform package through callbacks.

mod auth_form;
pub use auth_form::Brand;

mod landing;
pub use landing::{LandingView, PRODUCT_NAME};

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayoutView;

mod overview;
pub use overview::{OverviewView, RangeTab, DATE_RANGE};

mod profile;
pub use profile::{format_date, ProfileView};
