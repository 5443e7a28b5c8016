use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::icons;

/// Reporting window of the overview toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeTab {
    OneDay,
    ThreeDays,
    SevenDays,
    #[default]
    ThirtyDays,
    Custom,
}

impl RangeTab {
    pub const ALL: [RangeTab; 5] = [
        RangeTab::OneDay,
        RangeTab::ThreeDays,
        RangeTab::SevenDays,
        RangeTab::ThirtyDays,
        RangeTab::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::ThreeDays => "3d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::Custom => "Custom",
        }
    }
}

/// Fixed window shown on the date chip until real reporting exists.
pub const DATE_RANGE: &str = "Aug 16, 2025 - Sep 15, 2025";

#[derive(Clone, Debug, PartialEq)]
struct Contact {
    name: &'static str,
    visits: u32,
}

const CONTACTS: [&str; 6] = ["Oracle", "Hugo Schmidt", "Mateo Jensen", "Airbnb", "Olivia Weber", "Tesla"];

fn contacts() -> Vec<Contact> {
    CONTACTS.iter().map(|&name| Contact { name, visits: 0 }).collect()
}

/// Dashboard landing content.
#[component]
pub fn OverviewView() -> Element {
    let mut range = use_signal(RangeTab::default);

    rsx! {
        div { class: "toolbar",
            div { class: "range-tabs", role: "tablist", aria_label: "Range",
                for tab in RangeTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if range() == tab { "range-tab active" } else { "range-tab" },
                        r#type: "button",
                        role: "tab",
                        aria_selected: range() == tab,
                        onclick: move |_| range.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            Button { variant: ButtonVariant::Outline, class: "date-chip",
                Icon { width: 14, height: 14, icon: icons::FaCalendar }
                span { "{DATE_RANGE}" }
            }
        }

        div { class: "overview",
            Card { class: "lead-card",
                div { class: "lead-card-header",
                    div { class: "lead-card-heading",
                        div { class: "lead-card-title", "Lead generation" }
                        div { class: "lead-card-subtitle", "New contacts added to the pool." }
                    }
                    div { class: "stat-cells",
                        StatCell { title: "People", value: 0 }
                        StatCell { title: "Companies", value: 0 }
                    }
                }
                CardContent {
                    div { class: "chart-placeholder" }
                }
            }

            div { class: "contact-lists",
                ContactList { title: "Most visited contacts", items: contacts() }
                ContactList { title: "Least visited contacts", items: contacts() }
            }
        }
    }
}

#[component]
fn StatCell(title: String, value: u32) -> Element {
    rsx! {
        div { class: "stat-cell",
            div { class: "stat-cell-title", "{title}" }
            div { class: "stat-cell-value", "{value}" }
        }
    }
}

#[component]
fn ContactList(title: String, items: Vec<Contact>) -> Element {
    rsx! {
        Card { class: "contact-list",
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent {
                ul {
                    for contact in items {
                        li { key: "{contact.name}", class: "contact-row",
                            div { class: "contact-name",
                                span { class: "contact-avatar",
                                    Icon { width: 14, height: 14, icon: icons::FaUsers }
                                }
                                span { "{contact.name}" }
                            }
                            span { class: "contact-count", "{contact.visits}" }
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

    #[test]
    fn test_range_tabs() {
        assert_eq!(RangeTab::default(), RangeTab::ThirtyDays);
        let labels: Vec<_> = RangeTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["1d", "3d", "7d", "30d", "Custom"]);
    }

    #[test]
    fn test_contact_lists_start_empty() {
        let list = contacts();
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].name, "Oracle");
        assert!(list.iter().all(|c| c.visits == 0));
    }
}
