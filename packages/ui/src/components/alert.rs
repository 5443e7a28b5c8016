use dioxus::prelude::*;

use crate::icons;
use dioxus_free_icons::Icon;

/// Inline error banner shown above a form.
#[component]
pub fn Alert(title: String, message: String) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            Icon { width: 16, height: 16, icon: icons::FaCircleExclamation }
            div {
                p { class: "alert-title", "{title}" }
                p { class: "alert-message", "{message}" }
            }
        }
    }
}
