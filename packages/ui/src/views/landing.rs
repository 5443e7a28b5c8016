use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::icons;

pub const PRODUCT_NAME: &str = "Auth App";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeatureIcon {
    Shield,
    Bolt,
    Users,
    Lock,
    Gauge,
    Rocket,
}

struct Feature {
    icon: FeatureIcon,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::Shield,
        title: "Secure Authentication",
        description: "Token-based auth with refresh tokens and robust server-side validation.",
    },
    Feature {
        icon: FeatureIcon::Bolt,
        title: "Fast & Modern",
        description: "Compiled to WebAssembly and native desktop from one shared UI crate.",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "User Management",
        description: "Registration, session handling, protected routes, and profile basics.",
    },
    Feature {
        icon: FeatureIcon::Lock,
        title: "Best Practices",
        description: "Minimal token payload, server-driven profile, sane defaults for safety.",
    },
    Feature {
        icon: FeatureIcon::Gauge,
        title: "Minimal & Scalable",
        description: "Simple layout primitives that scale with your product needs.",
    },
    Feature {
        icon: FeatureIcon::Rocket,
        title: "Ready to Ship",
        description: "Drop-in pages, cohesive styling, and easy deployment story.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Create an account", "Sign up with email and password."),
    ("Verify & sign in", "Obtain tokens and hydrate profile."),
    ("Start building", "Access dashboard and secure routes."),
];

const LOGOS: [&str; 4] = ["Airbnb", "Google", "Microsoft", "Oracle"];

/// `STEPS` with 1-based numbers.
fn numbered_steps() -> impl Iterator<Item = (usize, &'static str, &'static str)> {
    STEPS.iter().enumerate().map(|(i, &(title, text))| (i + 1, title, text))
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Public marketing page.
#[component]
pub fn LandingView() -> Element {
    let year = current_year();

    rsx! {
        div { class: "landing",
            header { class: "landing-header",
                div { class: "landing-container landing-header-row",
                    Link { class: "landing-logo", to: "/",
                        div { class: "brand-logo brand-logo-sm", "A" }
                        span { "{PRODUCT_NAME}" }
                    }
                    nav { class: "landing-nav",
                        a { href: "#features", "Features" }
                        a { href: "#how-it-works", "How it works" }
                        a { href: "#preview", "Preview" }
                    }
                    div { class: "landing-actions",
                        Link { to: "/login",
                            Button { variant: ButtonVariant::Ghost, "Sign In" }
                        }
                        Link { to: "/signup",
                            Button {
                                "Get Started"
                                Icon { width: 14, height: 14, icon: icons::FaArrowRight }
                            }
                        }
                    }
                }
            }

            section { class: "hero",
                div { class: "landing-container hero-body",
                    h1 {
                        "Minimal Auth, "
                        span { class: "hero-accent", "Maximum Velocity" }
                    }
                    p { class: "hero-lead",
                        "A clean, modern starter for authentication-driven apps, focused on clarity, security, and speed."
                    }
                    div { class: "hero-actions",
                        Link { to: "/signup",
                            Button { size: ButtonSize::Large,
                                "Create Account"
                                Icon { width: 14, height: 14, icon: icons::FaArrowRight }
                            }
                        }
                        Link { to: "/login",
                            Button { size: ButtonSize::Large, variant: ButtonVariant::Outline, "Sign In" }
                        }
                    }
                    div { class: "hero-note", "No clutter. No bloat. Just what you need to start." }
                }
            }

            section { class: "logo-strip",
                div { class: "landing-container logo-grid",
                    for name in LOGOS {
                        div { key: "{name}", class: "logo-cell", "{name}" }
                    }
                }
            }

            section { id: "features", class: "landing-section",
                div { class: "landing-container",
                    div { class: "section-heading",
                        h2 { "Everything you need, nothing you don't" }
                        p { "Production-ready primitives with minimal styling and sensible defaults." }
                    }
                    div { class: "feature-grid",
                        for feature in FEATURES.iter() {
                            Card { key: "{feature.title}", class: "feature-card",
                                CardHeader {
                                    div { class: "feature-icon", FeatureGlyph { icon: feature.icon } }
                                    CardTitle { "{feature.title}" }
                                    CardDescription { "{feature.description}" }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "preview", class: "landing-section landing-section-muted",
                div { class: "landing-container",
                    div { class: "section-heading",
                        h3 { "See it in action" }
                        p { "Auth screens and dashboard are included and wired to the backend." }
                    }
                    div { class: "preview-row",
                        PreviewCard { title: "Auth Screens", description: "Sign Up / Sign In", placeholder: "Auth preview" }
                        PreviewCard {
                            title: "Dashboard",
                            description: "Minimal layout with collapsible sidebar",
                            placeholder: "Dashboard preview",
                        }
                    }
                }
            }

            section { id: "how-it-works", class: "landing-section",
                div { class: "landing-container",
                    div { class: "section-heading",
                        h3 { "Kick off in three steps" }
                        p { "From zero to authenticated in minutes." }
                    }
                    ol { class: "steps",
                        for (number, title, text) in numbered_steps() {
                            li { key: "{title}",
                                Card {
                                    CardHeader {
                                        div { class: "step-number", "Step {number}" }
                                        CardTitle { "{title}" }
                                        CardDescription { "{text}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "cta",
                div { class: "landing-container cta-body",
                    h3 { "Ready to get started?" }
                    p { "Sign up and jump straight into a clean, secure, and extensible starter." }
                    div { class: "hero-actions",
                        Link { to: "/signup",
                            Button { size: ButtonSize::Large, variant: ButtonVariant::Secondary, "Create Account" }
                        }
                        Link { to: "/login",
                            Button { size: ButtonSize::Large, variant: ButtonVariant::Outline, class: "btn-on-dark", "Sign In" }
                        }
                    }
                }
            }

            footer { class: "landing-footer",
                div { class: "landing-container landing-footer-row",
                    p { "© {year} {PRODUCT_NAME}. All rights reserved." }
                    div { class: "landing-footer-links",
                        a { href: "#features", "Features" }
                        a { href: "#preview", "Preview" }
                        Link { to: "/login", "Sign In" }
                    }
                }
            }
        }
    }
}

#[component]
fn PreviewCard(title: String, description: String, placeholder: String) -> Element {
    rsx! {
        Card { class: "preview-card",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardContent {
                div { class: "preview-frame", "{placeholder}" }
            }
        }
    }
}

#[component]
fn FeatureGlyph(icon: FeatureIcon) -> Element {
    match icon {
        FeatureIcon::Shield => rsx! { Icon { width: 16, height: 16, icon: icons::FaShieldHalved } },
        FeatureIcon::Bolt => rsx! { Icon { width: 16, height: 16, icon: icons::FaBolt } },
        FeatureIcon::Users => rsx! { Icon { width: 16, height: 16, icon: icons::FaUsers } },
        FeatureIcon::Lock => rsx! { Icon { width: 16, height: 16, icon: icons::FaLock } },
        FeatureIcon::Gauge => rsx! { Icon { width: 16, height: 16, icon: icons::FaGauge } },
        FeatureIcon::Rocket => rsx! { Icon { width: 16, height: 16, icon: icons::FaRocket } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_year_is_current() {
        assert!(current_year() >= 2025);
    }

    #[test]
    fn test_steps_are_numbered_from_one() {
        let numbers: Vec<_> = numbered_steps().map(|(n, _, _)| n).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn test_feature_titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
