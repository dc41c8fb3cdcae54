//! Quest card body sections.
//!
//! Each section renders nothing at all when its view-model slice is empty;
//! an absent section is omitted, never shown as an empty heading.

use dioxus::prelude::*;
use questboard_core::{ClaimSection, CurrencyBlock, RequirementsView, RewardSection};

/// Reward lists per track, under a "Rewards" heading
#[component]
pub fn RewardSections(sections: Vec<RewardSection>) -> Element {
    if sections.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "rewards",
            h3 { "Rewards" }
            for section in sections.iter() {
                div { key: "{section.label}", class: "reward-section",
                    h4 { "{section.label}" }
                    ul {
                        for line in section.lines.iter() {
                            li { "{line}" }
                        }
                    }
                }
            }
        }
    }
}

/// Bounty Coin / Gacha Ticket amounts
#[component]
pub fn CurrencyBlocks(blocks: Vec<CurrencyBlock>) -> Element {
    if blocks.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "currency-rewards",
            for block in blocks.iter() {
                div { key: "{block.label}", class: "currency-section",
                    h4 { "{block.label}" }
                    for amount in block.amounts.iter() {
                        p { "{amount}" }
                    }
                }
            }
        }
    }
}

/// The requirements section; mode always renders, the rest only when present
#[component]
pub fn RequirementsSection(requirements: RequirementsView) -> Element {
    rsx! {
        section { class: "requirements",
            h3 { "Requirements" }
            p {
                strong { "Mode: " }
                "{requirements.mode}"
            }

            if !requirements.mode_notes.is_empty() {
                div { class: "mode-notes",
                    for note in requirements.mode_notes.iter() {
                        p { "• {note}" }
                    }
                }
            }

            for list in requirements.restriction_lists.iter() {
                div { key: "{list.label}", class: "restriction-list",
                    strong { "{list.label}:" }
                    ul {
                        for item in list.items.iter() {
                            li { "{item}" }
                        }
                    }
                }
            }

            if !requirements.weapon_times.is_empty() {
                div { class: "weapon-times",
                    strong { "Time Requirements:" }
                    for entry in requirements.weapon_times.iter() {
                        div { key: "{entry.weapons}", class: "weapon-time",
                            p { strong { "{entry.weapons}" } }
                            p { "{entry.threshold}" }
                            if let Some(note) = &entry.note {
                                p { class: "note", "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The "How to Claim" section, in fixed order
#[component]
pub fn ClaimSections(sections: Vec<ClaimSection>) -> Element {
    if sections.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "how-to-claim",
            h3 { "How to Claim" }
            for (index, claim_section) in sections.iter().enumerate() {
                {
                    match claim_section {
                        ClaimSection::List(list) => rsx! {
                            div { key: "{index}", class: "claim-section",
                                strong { "{list.label}:" }
                                ul {
                                    for item in list.items.iter() {
                                        li { "{item}" }
                                    }
                                }
                            }
                        },
                        ClaimSection::Note(note) => rsx! {
                            div { key: "{index}", class: "claim-section",
                                strong { "Note: " }
                                "{note}"
                            }
                        },
                    }
                }
            }
        }
    }
}
