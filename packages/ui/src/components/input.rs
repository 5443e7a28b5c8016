use dioxus::prelude::*;
use dioxus_primitives::label;

/// Text input bound to a caller-owned value.
#[component]
pub fn Input(
    id: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    #[props(default)] class: String,
) -> Element {
    let input_type = r#type;
    let state = if invalid { "input input-invalid" } else { "input" };

    rsx! {
        input {
            id: "{id}",
            name: "{id}",
            class: "{state} {class}",
            r#type: "{input_type}",
            value: "{value}",
            placeholder: "{placeholder}",
            autocomplete: "{autocomplete}",
            aria_invalid: invalid,
            disabled,
            oninput: move |evt| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Label(r#for: String, children: Element) -> Element {
    rsx! {
        label::Label { class: "label", html_for: r#for, {children} }
    }
}

/// Message under an invalid field; renders nothing without one.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        p { class: "field-error", role: "alert", "{message}" }
    }
}
