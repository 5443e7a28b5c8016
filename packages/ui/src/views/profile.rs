use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::icons;
use crate::use_session;

/// Long date for account timestamps, `"N/A"` when the service sent none.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Account details of the signed-in user.
#[component]
pub fn ProfileView(on_back: EventHandler<()>) -> Element {
    let session = use_session().snapshot();
    let Some(user) = session.user else {
        return rsx! {};
    };
    let display_name = user.display_name().to_string();
    let created = format_date(user.created_at.as_ref());
    let updated = format_date(user.updated_at.as_ref());

    rsx! {
        div { class: "profile",
            div { class: "profile-heading",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_back.call(()),
                    Icon { width: 12, height: 12, icon: icons::FaArrowLeft }
                    "Back to Home"
                }
                h1 { "User Profile" }
                p { class: "muted", "Manage your account information" }
            }

            div { class: "profile-grid",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { width: 16, height: 16, icon: icons::FaUser }
                            "Personal Information"
                        }
                        CardDescription { "Your account details and information" }
                    }
                    CardContent { class: "profile-fields",
                        div { class: "profile-field",
                            span { class: "label", "Name" }
                            p { "{display_name}" }
                        }
                        div { class: "profile-field",
                            span { class: "label", "Email Address" }
                            p { class: "with-icon-inline",
                                Icon { width: 14, height: 14, icon: icons::FaEnvelope }
                                "{user.email}"
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon { width: 16, height: 16, icon: icons::FaCalendar }
                            "Account Information"
                        }
                        CardDescription { "Account creation and activity details" }
                    }
                    CardContent { class: "profile-fields",
                        div { class: "profile-field",
                            span { class: "label", "Account Created" }
                            p { "{created}" }
                        }
                        div { class: "profile-field",
                            span { class: "label", "Last Updated" }
                            p { "{updated}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2025, 9, 5, 14, 30, 0).unwrap();
        assert_eq!(format_date(Some(&date)), "September 5, 2025");
        assert_eq!(format_date(None), "N/A");
    }
}
