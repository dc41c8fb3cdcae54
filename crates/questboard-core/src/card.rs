//! Quest card view models
//!
//! `CardView::from_quest` is a pure mapping from one quest document to the
//! structure a card displays. It knows nothing about display technology; the
//! desktop components (or any other backend) render it. A section whose
//! source data is absent or empty is omitted from the view model entirely
//! rather than rendered empty.

use crate::types::{HowToClaim, Quest, Requirements, Rewards, Track, TrackAmounts};

const FULL_STAR: &str = "⭐";
const HALF_STAR: &str = "🌟";

/// Everything one quest card displays
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub quest_id: String,
    pub name: String,
    pub subtitle: String,
    pub image_url: String,
    /// Concatenated star glyphs, empty when the quest has no rating
    pub difficulty: String,
    /// Reward sections for tracks with at least one entry, in track order
    pub rewards: Vec<RewardSection>,
    /// Currency blocks with at least one awarded amount
    pub currencies: Vec<CurrencyBlock>,
    pub requirements: RequirementsView,
    /// Claim sections in fixed order: screenshots, multiplayer, note, proof
    pub claim: Vec<ClaimSection>,
}

/// One reward track's labeled list of `"<item> x<quantity>"` lines
#[derive(Debug, Clone, PartialEq)]
pub struct RewardSection {
    pub label: &'static str,
    pub lines: Vec<String>,
}

/// One currency's awarded amounts, as `"<Track>: <amount>"` lines
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyBlock {
    pub label: &'static str,
    pub amounts: Vec<String>,
}

/// A labeled bullet list
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledList {
    pub label: &'static str,
    pub items: Vec<String>,
}

/// One weapon/time requirement line group
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponTimeView {
    /// Bracketed weapon list, e.g. "[Bow, Lance]"
    pub weapons: String,
    /// Threshold line, e.g. "Under 20 minutes"
    pub threshold: String,
    pub note: Option<String>,
}

/// The requirements section; `mode` always renders, the rest is optional
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementsView {
    pub mode: String,
    pub mode_notes: Vec<String>,
    pub restriction_lists: Vec<LabeledList>,
    pub weapon_times: Vec<WeaponTimeView>,
}

/// One block in the "How to Claim" section
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimSection {
    List(LabeledList),
    Note(String),
}

impl CardView {
    /// Map one quest document into its card view model
    pub fn from_quest(quest: &Quest) -> Self {
        let currencies = [
            ("Bounty Coin", &quest.bounty_coin),
            ("Gacha Ticket", &quest.gacha_ticket),
        ]
        .into_iter()
        .filter_map(|(label, amounts)| currency_block(label, amounts))
        .collect();

        Self {
            quest_id: quest.quest_id.to_string(),
            name: quest.quest_name.clone(),
            subtitle: quest.quest_subtitle.clone(),
            image_url: quest.image_url.clone(),
            difficulty: difficulty_glyphs(quest.difficulty.stars, quest.difficulty.half_stars),
            rewards: reward_sections(&quest.rewards),
            currencies,
            requirements: requirements_view(&quest.requirements),
            claim: claim_sections(&quest.how_to_claim),
        }
    }
}

/// Star glyph string: `stars` full stars, one half star iff `half_stars > 0`
pub fn difficulty_glyphs(stars: u8, half_stars: u8) -> String {
    let mut glyphs = FULL_STAR.repeat(stars as usize);
    if half_stars > 0 {
        glyphs.push_str(HALF_STAR);
    }
    glyphs
}

fn reward_sections(rewards: &Rewards) -> Vec<RewardSection> {
    Track::ALL
        .iter()
        .filter_map(|&track| {
            let entries = rewards.track(track);
            if entries.is_empty() {
                return None;
            }
            Some(RewardSection {
                label: track.label(),
                lines: entries
                    .iter()
                    .map(|entry| format!("{} x{}", entry.item, entry.quantity))
                    .collect(),
            })
        })
        .collect()
}

fn currency_block(label: &'static str, amounts: &TrackAmounts) -> Option<CurrencyBlock> {
    if !amounts.any_awarded() {
        return None;
    }
    let lines = Track::ALL
        .iter()
        .filter_map(|&track| {
            amounts
                .awarded(track)
                .map(|amount| format!("{}: {}", track.label(), amount))
        })
        .collect();
    Some(CurrencyBlock {
        label,
        amounts: lines,
    })
}

fn requirements_view(requirements: &Requirements) -> RequirementsView {
    let mut restriction_lists = Vec::new();
    if !requirements.restrictions.is_empty() {
        restriction_lists.push(LabeledList {
            label: "Restrictions",
            items: requirements.restrictions.clone(),
        });
    }
    if !requirements.multiplayer_restrictions.is_empty() {
        restriction_lists.push(LabeledList {
            label: "Multiplayer Restrictions",
            items: requirements.multiplayer_restrictions.clone(),
        });
    }

    let weapon_times = requirements
        .weapon_time_requirements
        .iter()
        .map(|req| WeaponTimeView {
            weapons: format!("[{}]", req.weapons.join(", ")),
            threshold: format!("Under {} minutes", format_minutes(req.time_limit_minutes)),
            note: req.submission_note.clone(),
        })
        .collect();

    RequirementsView {
        mode: requirements.mode.clone(),
        mode_notes: requirements.mode_notes.clone(),
        restriction_lists,
        weapon_times,
    }
}

fn claim_sections(claim: &HowToClaim) -> Vec<ClaimSection> {
    let mut sections = Vec::new();
    if !claim.screenshot_requirements.is_empty() {
        sections.push(ClaimSection::List(LabeledList {
            label: "Screenshot Requirements",
            items: claim.screenshot_requirements.clone(),
        }));
    }
    if !claim.multiplayer_requirements.is_empty() {
        sections.push(ClaimSection::List(LabeledList {
            label: "Multiplayer Requirements",
            items: claim.multiplayer_requirements.clone(),
        }));
    }
    if let Some(note) = &claim.speedrun_submission_note {
        if !note.is_empty() {
            sections.push(ClaimSection::Note(note.clone()));
        }
    }
    if !claim.proof_required.is_empty() {
        sections.push(ClaimSection::List(LabeledList {
            label: "Proof Required",
            items: claim.proof_required.clone(),
        }));
    }
    sections
}

/// Whole-number thresholds render without a trailing ".0"
fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{}", minutes as i64)
    } else {
        format!("{}", minutes)
    }
}
