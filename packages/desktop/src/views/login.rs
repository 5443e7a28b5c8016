use dioxus::prelude::*;
use ui::views::SignInView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInView {
            on_authenticated: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
