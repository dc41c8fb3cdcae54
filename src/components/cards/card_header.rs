//! Card Header Component
//!
//! Always-visible top strip of a quest card; clicking anywhere on it toggles
//! the card body.

use dioxus::prelude::*;

/// Quest card header with image, id, name, subtitle, and difficulty
#[component]
pub fn CardHeader(
    quest_id: String,
    name: String,
    subtitle: String,
    image_url: String,
    /// Pre-built glyph string; empty when the quest carries no rating
    difficulty: String,
    chevron: String,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "quest-header",
            onclick: move |_| on_toggle.call(()),

            if !image_url.is_empty() {
                img {
                    class: "quest-image",
                    src: "{image_url}",
                    alt: "{name}",
                }
            }

            div { class: "quest-info",
                div { class: "quest-id", "{quest_id}" }
                h2 { class: "quest-name", "{name}" }
                if !subtitle.is_empty() {
                    p { class: "quest-subtitle", "{subtitle}" }
                }
                if !difficulty.is_empty() {
                    div { class: "quest-difficulty", "Difficulty: {difficulty}" }
                }
            }

            div { class: "expand-icon", "{chevron}" }
        }
    }
}
