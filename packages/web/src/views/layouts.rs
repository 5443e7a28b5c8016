//! Guarded layouts and the catch-all redirect.

use dioxus::prelude::*;
use ui::views::SidebarLayoutView;
use ui::{use_route_guard, RouteAccess};

use crate::Route;

/// Layout for `/login` and `/signup`; signed-in users go to the dashboard.
#[component]
pub fn PublicOnly() -> Element {
    if !use_route_guard::<Route>(RouteAccess::PublicOnly) {
        return rsx! {};
    }
    rsx! {
        Outlet::<Route> {}
    }
}

/// Protected dashboard shell; anonymous visitors go to sign-in.
#[component]
pub fn DashboardLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    if !use_route_guard::<Route>(RouteAccess::Protected) {
        return rsx! {};
    }

    let title = match &route {
        Route::Profile {} => "Profile",
        _ => "Overview",
    }
    .to_string();

    rsx! {
        SidebarLayoutView {
            active_path: route.to_string(),
            title,
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths redirect to the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    use_effect(move || {
        tracing::debug!(%path, "Unknown route, redirecting home");
        nav.replace(Route::Landing {});
    });

    rsx! {}
}
