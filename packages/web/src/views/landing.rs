use dioxus::prelude::*;
use ui::views::LandingView;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingView {}
    }
}
