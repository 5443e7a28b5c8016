use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::{icons, toggle_collapsed, use_session, use_sidebar_collapsed, use_storage, Sidebar};

/// Shared dashboard shell: collapsible sidebar plus a sticky header.
///
/// Platform packages pass the current path and an `Outlet` as children.
#[component]
pub fn SidebarLayoutView(
    /// Path of the current route (e.g. "/dashboard/profile").
    active_path: String,
    /// Heading shown in the header bar.
    title: String,
    /// Called after the user logged out from the profile menu.
    on_signed_out: EventHandler<()>,
    children: Element,
) -> Element {
    let session = use_session();
    let storage = use_storage();
    let mut collapsed = use_sidebar_collapsed();

    let user_name = session
        .snapshot()
        .display_name()
        .unwrap_or("User")
        .to_string();
    let is_collapsed = collapsed();
    let toggle_label = if is_collapsed { "Expand sidebar" } else { "Collapse sidebar" };

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-sidebar",
                Sidebar {
                    collapsed: is_collapsed,
                    active_path,
                    user_name,
                    on_signed_out,
                }
            }

            div { class: "dashboard-main",
                header { class: "dashboard-header",
                    div { class: "dashboard-header-left",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: toggle_label.to_string(),
                            onclick: move |_| toggle_collapsed(&mut collapsed, &*storage),
                            Icon { width: 14, height: 14, icon: icons::FaBars }
                        }
                        div { class: "header-separator", role: "separator" }
                        h1 { class: "dashboard-title", "{title}" }
                        span { class: "muted-icon", Icon { width: 14, height: 14, icon: icons::FaCircleInfo } }
                    }
                    div { class: "dashboard-header-right",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: "GitHub".to_string(),
                            Icon { width: 16, height: 16, icon: icons::FaGithub }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: "X".to_string(),
                            Icon { width: 16, height: 16, icon: icons::FaTwitter }
                        }
                    }
                }

                {children}
            }
        }
    }
}
