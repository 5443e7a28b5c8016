use api::{FieldErrors, SignupForm};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{toast_options, use_toast, Alert, Button, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::icons;
use crate::session::SubmitError;
use crate::use_session;

use super::auth_form::{Brand, FieldIcon, PasswordField, SocialSignIn, TextField};

/// Registration page.
///
/// A duplicate email clears the form; every other failure keeps the input.
#[component]
pub fn SignUpView(on_authenticated: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| Option::<String>::None);

    let is_loading = session.is_loading();

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let mut session = session.clone();
        spawn(async move {
            error.set(None);
            let form = SignupForm::new(name(), email(), password());
            let result = session.submit_signup(form).await;
            match result {
                Ok(()) => {
                    field_errors.set(FieldErrors::default());
                    toast.success("Account created successfully!".to_string(), toast_options());
                    on_authenticated.call(());
                }
                Err(SubmitError::Invalid(errors)) => field_errors.set(errors),
                Err(err @ SubmitError::Auth(_)) => {
                    tracing::debug!("Sign-up failed: {err:?}");
                    if err.resets_form() {
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                    }
                    field_errors.set(FieldErrors::default());
                    toast.error(err.to_string(), toast_options());
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let errors = field_errors.read();
    let name_error = errors.get("name").map(str::to_string);
    let email_error = errors.get("email").map(str::to_string);
    let password_error = errors.get("password").map(str::to_string);
    drop(errors);

    rsx! {
        div { class: "auth-page",
            div { class: "auth-column",
                Brand {}
                Card {
                    CardHeader {
                        CardTitle { "Create your account" }
                        CardDescription { "Please fill in the details to get started." }
                    }
                    CardContent {
                        form { class: "auth-form", novalidate: true, onsubmit: handle_signup,
                            if let Some(message) = error() {
                                Alert { title: "Sign-up failed", message }
                            }

                            TextField {
                                id: "name",
                                label: "Name",
                                r#type: "text",
                                icon: FieldIcon::User,
                                autocomplete: "name",
                                value: name(),
                                oninput: move |v: String| name.set(v),
                                error: name_error,
                            }

                            TextField {
                                id: "email",
                                label: "Email",
                                r#type: "email",
                                icon: FieldIcon::Mail,
                                autocomplete: "email",
                                value: email(),
                                oninput: move |v: String| email.set(v),
                                error: email_error,
                            }

                            PasswordField {
                                value: password(),
                                oninput: move |v: String| password.set(v),
                                autocomplete: "new-password",
                                error: password_error,
                            }

                            Button {
                                class: "w-full",
                                r#type: "submit",
                                disabled: is_loading,
                                if is_loading {
                                    span { class: "spin", Icon { width: 14, height: 14, icon: icons::FaSpinner } }
                                }
                                "Create account"
                            }

                            SocialSignIn {}

                            p { class: "auth-footer",
                                "Already have an account? "
                                Link { class: "link", to: "/login", "Sign in" }
                            }
                        }
                    }
                }
            }
        }
    }
}
