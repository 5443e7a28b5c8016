use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_primitives::dropdown_menu::{DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger};

use crate::components::{toast_options, use_toast};
use crate::icons;
use crate::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileAction {
    Profile,
    Settings,
    Logout,
}

impl ProfileAction {
    /// Page the entry opens; `None` for actions handled in place.
    fn path(self) -> Option<&'static str> {
        match self {
            Self::Profile => Some("/dashboard/profile"),
            Self::Settings => Some("/settings"),
            Self::Logout => None,
        }
    }
}

/// "More actions" menu next to the current user in the sidebar.
///
/// Logout clears the session before `on_signed_out` fires. The remote token
/// invalidation is spawned outside this component, so it still completes
/// after the sidebar unmounts.
#[component]
pub fn ProfileButton(on_signed_out: EventHandler<()>) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let toast = use_toast();

    let select = use_callback(move |action: ProfileAction| {
        if let Some(path) = action.path() {
            nav.push(path);
            return;
        }
        let mut session = session.clone();
        match session.logout() {
            Ok(invalidate) => {
                spawn_forever(invalidate);
                on_signed_out.call(());
            }
            Err(e) => {
                tracing::error!("Sign-out not persisted: {e}");
                toast.error("Could not sign out on this device. Please try again.".to_string(), toast_options());
            }
        }
    });

    rsx! {
        DropdownMenu { class: "menu",
            DropdownMenuTrigger { class: "menu-trigger", aria_label: "More actions",
                Icon { width: 14, height: 14, icon: icons::FaEllipsis }
            }
            DropdownMenuContent { class: "menu-content",
                DropdownMenuItem::<ProfileAction> {
                    class: "menu-item",
                    value: ProfileAction::Profile,
                    index: 0usize,
                    on_select: select,
                    Icon { width: 14, height: 14, icon: icons::FaUser }
                    "Profile"
                }
                DropdownMenuItem::<ProfileAction> {
                    class: "menu-item",
                    value: ProfileAction::Settings,
                    index: 1usize,
                    on_select: select,
                    Icon { width: 14, height: 14, icon: icons::FaGear }
                    "Settings"
                }
                div { class: "menu-separator", role: "separator" }
                DropdownMenuItem::<ProfileAction> {
                    class: "menu-item menu-item-danger",
                    value: ProfileAction::Logout,
                    index: 2usize,
                    on_select: select,
                    Icon { width: 14, height: 14, icon: icons::FaArrowRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_logout_stays_in_place() {
        assert_eq!(ProfileAction::Profile.path(), Some("/dashboard/profile"));
        assert_eq!(ProfileAction::Settings.path(), Some("/settings"));
        assert_eq!(ProfileAction::Logout.path(), None);
    }
}
