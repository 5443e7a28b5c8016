//! Toast notifications on top of `dioxus_primitives::toast`.
//!
//! [`ToastProvider`] hosts the stack (pinned top-right by `acme.css`); views
//! below it call [`use_toast`] and pass [`toast_options`] so every message
//! closes itself after [`TOAST_DURATION`]. The primitive renders the close
//! button.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub fn toast_options() -> ToastOptions {
    ToastOptions::new().duration(TOAST_DURATION)
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider { {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_close_after_four_seconds() {
        assert_eq!(TOAST_DURATION, Duration::from_secs(4));
    }
}
