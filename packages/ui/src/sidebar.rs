use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use store::{keys, Storage};

use crate::icons;
use crate::ProfileButton;

/// Read the persisted collapsed flag; anything but `"1"` means expanded.
pub fn load_collapsed<S: Storage + ?Sized>(storage: &S) -> bool {
    storage.get(keys::SIDEBAR_COLLAPSED).as_deref() == Some("1")
}

/// Persist the flag. A refused write only costs the preference, so it is logged.
pub fn store_collapsed<S: Storage + ?Sized>(storage: &S, collapsed: bool) {
    if let Err(e) = storage.set(keys::SIDEBAR_COLLAPSED, if collapsed { "1" } else { "0" }) {
        tracing::warn!("Sidebar preference not saved: {e}");
    }
}

/// Collapsed flag, initialised from storage.
pub fn use_sidebar_collapsed() -> Signal<bool> {
    let storage = crate::use_storage();
    use_signal(move || load_collapsed(&*storage))
}

/// Flip the flag and persist the new value.
pub fn toggle_collapsed<S: Storage + ?Sized>(collapsed: &mut Signal<bool>, storage: &S) {
    let next = !*collapsed.read();
    store_collapsed(storage, next);
    collapsed.set(next);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavIcon {
    Home,
    Contacts,
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NavItem {
    label: &'static str,
    to: &'static str,
    icon: NavIcon,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Home", to: "/dashboard", icon: NavIcon::Home },
    NavItem { label: "Contacts", to: "/contacts", icon: NavIcon::Contacts },
    NavItem { label: "Settings", to: "/settings", icon: NavIcon::Settings },
];

const FAVORITES: [&str; 3] = ["Airbnb", "Google", "Microsoft"];

fn link_class(current: &str, to: &str) -> &'static str {
    if is_active(current, to) {
        "sidebar-link active"
    } else {
        "sidebar-link"
    }
}

/// `to` is active for itself and every path below it.
fn is_active(current: &str, to: &str) -> bool {
    let current = current.split(['?', '#']).next().unwrap_or_default();
    current == to || current.strip_prefix(to).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar(
    collapsed: bool,
    /// Path of the current route, used for active highlighting.
    active_path: String,
    #[props(default = "Acme".to_string())] org_name: String,
    user_name: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let org_initial = org_name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let state = if collapsed { "sidebar sidebar-collapsed" } else { "sidebar" };

    rsx! {
        aside { class: "{state}", aria_label: "Primary",
            div { class: "sidebar-top",
                div { class: "sidebar-org",
                    div { class: "sidebar-org-badge", "{org_initial}" }
                    if !collapsed {
                        span { class: "sidebar-org-name", "{org_name}" }
                    }
                }

                nav { class: "sidebar-nav", role: "navigation",
                    for item in NAV_ITEMS {
                        Link {
                            key: "{item.label}",
                            to: item.to,
                            class: link_class(&active_path, item.to),
                            span { class: "sidebar-link-icon", title: "{item.label}", NavItemIcon { icon: item.icon } }
                            if !collapsed {
                                span { class: "sidebar-link-label", "{item.label}" }
                            }
                        }
                    }
                }

                div { class: "sidebar-favorites",
                    if !collapsed {
                        div { class: "sidebar-section-title", "Favorites" }
                    }
                    for favorite in FAVORITES {
                        div { key: "{favorite}", class: "sidebar-link", title: "{favorite}",
                            span { class: "sidebar-favorite-icon",
                                Icon { width: 14, height: 14, icon: icons::FaStar }
                            }
                            if !collapsed {
                                span { class: "sidebar-link-label", "{favorite}" }
                            }
                        }
                    }
                }
            }

            div { class: "sidebar-bottom",
                button { class: "sidebar-link", r#type: "button", title: "Invite member",
                    Icon { width: 14, height: 14, icon: icons::FaPlus }
                    if !collapsed {
                        span { class: "sidebar-link-label", "Invite member" }
                    }
                }
                button { class: "sidebar-link", r#type: "button", title: "Feedback",
                    Icon { width: 14, height: 14, icon: icons::FaComment }
                    if !collapsed {
                        span { class: "sidebar-link-label", "Feedback" }
                    }
                }

                div { class: "sidebar-user",
                    div { class: "sidebar-user-avatar" }
                    if !collapsed {
                        span { class: "sidebar-user-name", "{user_name}" }
                        ProfileButton { on_signed_out }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItemIcon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { width: 14, height: 14, icon: icons::FaHouse } },
        NavIcon::Contacts => rsx! { Icon { width: 14, height: 14, icon: icons::FaUsers } },
        NavIcon::Settings => rsx! { Icon { width: 14, height: 14, icon: icons::FaGear } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStorage;

    #[test]
    fn test_collapsed_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(!load_collapsed(&storage));

        store_collapsed(&storage, true);
        assert_eq!(storage.get(keys::SIDEBAR_COLLAPSED).as_deref(), Some("1"));
        assert!(load_collapsed(&storage));

        store_collapsed(&storage, false);
        assert_eq!(storage.get(keys::SIDEBAR_COLLAPSED).as_deref(), Some("0"));
        assert!(!load_collapsed(&storage));
    }

    #[test]
    fn test_unexpected_value_reads_expanded() {
        let storage = MemoryStorage::new();
        for raw in ["true", "yes", "", " 1"] {
            storage.set(keys::SIDEBAR_COLLAPSED, raw).unwrap();
            assert!(!load_collapsed(&storage), "{raw:?}");
        }
    }

    #[test]
    fn test_active_link_matching() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(is_active("/dashboard/profile", "/dashboard"));
        assert!(is_active("/dashboard?tab=7d", "/dashboard"));
        assert!(!is_active("/dashboards", "/dashboard"));
        assert!(!is_active("/settings", "/dashboard"));
    }
}
