use api::{FieldErrors, LoginForm};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{toast_options, use_toast, Alert, Button, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::icons;
use crate::session::SubmitError;
use crate::use_session;

use super::auth_form::{Brand, FieldIcon, PasswordField, SocialSignIn, TextField};

/// Sign-in page.
///
/// Platform packages navigate to the dashboard in `on_authenticated`.
#[component]
pub fn SignInView(on_authenticated: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| Option::<String>::None);

    let is_loading = session.is_loading();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let mut session = session.clone();
        spawn(async move {
            error.set(None);
            let form = LoginForm::new(email(), password());
            match session.submit_login(form).await {
                Ok(()) => {
                    field_errors.set(FieldErrors::default());
                    toast.success("Logged in successfully!".to_string(), toast_options());
                    on_authenticated.call(());
                }
                Err(SubmitError::Invalid(errors)) => field_errors.set(errors),
                Err(SubmitError::Auth(e)) => {
                    tracing::debug!("Sign-in failed: {e:?}");
                    field_errors.set(FieldErrors::default());
                    toast.error(e.to_string(), toast_options());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let email_error = field_errors.read().get("email").map(str::to_string);
    let password_error = field_errors.read().get("password").map(str::to_string);

    rsx! {
        div { class: "auth-page",
            div { class: "auth-column",
                Brand {}
                Card {
                    CardHeader {
                        CardTitle { "Sign in to your account" }
                        CardDescription { "Welcome back! Please sign in to continue." }
                    }
                    CardContent {
                        form { class: "auth-form", novalidate: true, onsubmit: handle_login,
                            if let Some(message) = error() {
                                Alert { title: "Sign-in failed", message }
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
                                autocomplete: "current-password",
                                error: password_error,
                                forgot_link: true,
                            }

                            Button {
                                class: "w-full",
                                r#type: "submit",
                                disabled: is_loading,
                                if is_loading {
                                    span { class: "spin", Icon { width: 14, height: 14, icon: icons::FaSpinner } }
                                }
                                "Sign in"
                            }

                            SocialSignIn {}

                            p { class: "auth-footer",
                                "Don't have an account? "
                                Link { class: "link", to: "/signup", "Sign up" }
                            }
                        }
                    }
                }
            }
        }
    }
}
