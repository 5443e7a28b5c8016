use dioxus::prelude::*;
use ui::views::SignUpView;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        SignUpView {
            on_authenticated: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
