use dioxus::prelude::*;
use ui::views::{OverviewView, ProfileView};

use crate::Route;

/// `/dashboard` index.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        OverviewView {}
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_back: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
