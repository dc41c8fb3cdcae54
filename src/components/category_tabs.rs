//! Category tab bar.
//!
//! One button per catalog category. The handler receives the selected
//! category id explicitly; active styling is derived from props, never from
//! the event target.

use dioxus::prelude::*;

/// Props for the category tab bar.
#[derive(Props, Clone, PartialEq)]
pub struct CategoryTabsProps {
    /// (id, label) pairs in catalog order
    pub categories: Vec<(String, String)>,
    /// Currently active category id (if any)
    pub active: Option<String>,
    /// Handler receiving the selected category id
    pub on_select: EventHandler<String>,
}

/// Tab bar listing every category.
#[component]
pub fn CategoryTabs(props: CategoryTabsProps) -> Element {
    rsx! {
        nav { class: "category-tabs",
            for (id, label) in props.categories.iter() {
                {
                    let id_for_click = id.clone();
                    let tab_class = tab_class(props.active.as_deref() == Some(id.as_str()));
                    let on_select = props.on_select; // Callback is Copy

                    rsx! {
                        button {
                            key: "{id}",
                            class: "{tab_class}",
                            onclick: move |_| on_select.call(id_for_click.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn tab_class(is_active: bool) -> &'static str {
    if is_active {
        "tab active"
    } else {
        "tab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class_when_active() {
        assert_eq!(tab_class(true), "tab active");
    }

    #[test]
    fn test_tab_class_when_inactive() {
        assert_eq!(tab_class(false), "tab");
    }
}
