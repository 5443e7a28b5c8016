//! Pieces shared by the sign-in and sign-up cards.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{toast_options, use_toast, Button, ButtonVariant, FieldError, Input, Label};
use crate::icons;

pub(crate) const NOT_IMPLEMENTED: &str = "Not implemented yet";

/// Logo and product name above the card.
#[component]
pub fn Brand() -> Element {
    rsx! {
        div { class: "brand",
            div { class: "brand-logo", "A" }
            span { class: "brand-name", "Acme" }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub(crate) fn PasswordField(
    value: String,
    oninput: EventHandler<String>,
    autocomplete: String,
    error: Option<String>,
    /// Show the "Forgot password?" link next to the label.
    #[props(default)]
    forgot_link: bool,
) -> Element {
    let mut visible = use_signal(|| false);
    let invalid = error.is_some();
    let (input_type, toggle_label) = if visible() {
        ("text", "Hide password")
    } else {
        ("password", "Show password")
    };

    rsx! {
        div { class: "field",
            div { class: "field-label-row",
                Label { r#for: "password", "Password" }
                if forgot_link {
                    Link { class: "muted-link", to: "/forgot-password", "Forgot password?" }
                }
            }
            div { class: "field-control",
                span { class: "field-icon", Icon { width: 14, height: 14, icon: icons::FaLock } }
                Input {
                    id: "password",
                    r#type: "{input_type}",
                    class: "with-icon with-action",
                    autocomplete,
                    invalid,
                    value,
                    oninput,
                }
                button {
                    class: "field-action",
                    r#type: "button",
                    aria_label: toggle_label,
                    onclick: move |_| visible.toggle(),
                    if visible() {
                        Icon { width: 14, height: 14, icon: icons::FaEyeSlash }
                    } else {
                        Icon { width: 14, height: 14, icon: icons::FaEye }
                    }
                }
            }
            FieldError { message: error }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldIcon {
    User,
    Mail,
}

/// Labelled text input with a leading icon and its validation message.
#[component]
pub(crate) fn TextField(
    id: String,
    label: String,
    r#type: String,
    icon: FieldIcon,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] autocomplete: String,
    error: Option<String>,
) -> Element {
    let input_type = r#type;
    let invalid = error.is_some();
    let label_for = id.clone();
    rsx! {
        div { class: "field",
            Label { r#for: label_for, "{label}" }
            div { class: "field-control",
                span { class: "field-icon",
                    {match icon {
                        FieldIcon::User => rsx! { Icon { width: 14, height: 14, icon: icons::FaUser } },
                        FieldIcon::Mail => rsx! { Icon { width: 14, height: 14, icon: icons::FaEnvelope } },
                    }}
                }
                Input {
                    id,
                    r#type: "{input_type}",
                    class: "with-icon",
                    autocomplete,
                    invalid,
                    value,
                    oninput,
                }
            }
            FieldError { message: error }
        }
    }
}

/// "Or continue with" divider and the social sign-in buttons.
#[component]
pub(crate) fn SocialSignIn() -> Element {
    let toast = use_toast();

    rsx! {
        div { class: "divider",
            span { "Or continue with" }
        }
        div { class: "social-buttons",
            Button {
                variant: ButtonVariant::Outline,
                class: "social-button",
                onclick: move |_| toast.error(NOT_IMPLEMENTED.to_string(), toast_options()),
                Icon { width: 16, height: 16, icon: icons::FaGoogle }
                "Google"
            }
            Button {
                variant: ButtonVariant::Outline,
                class: "social-button",
                onclick: move |_| toast.error(NOT_IMPLEMENTED.to_string(), toast_options()),
                Icon { width: 16, height: 16, icon: icons::FaMicrosoft }
                "Microsoft"
            }
        }
    }
}
