//! Quest document types
//!
//! One JSON document per quest, read-only. Every field except `quest_id` is
//! optional: a missing field is absent, never an error, and unknown fields
//! are ignored.

use serde::Deserialize;

/// Sort key for quests within a category.
///
/// Documents carry the id as either a JSON string or a number; numbers are
/// kept as their decimal rendering. Ordering is lexicographic on the carried
/// text, so numeric-looking ids of differing width sort as text ("10" < "2").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct QuestId(String);

impl QuestId {
    /// Create an id from its text form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The text form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for QuestId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => QuestId(text),
            Repr::Number(number) => QuestId(number.to_string()),
        })
    }
}

/// One of the three reward/currency contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Solo,
    Multiplayer,
    Speedrun,
}

impl Track {
    /// Canonical track order used everywhere tracks are rendered
    pub const ALL: [Track; 3] = [Track::Solo, Track::Multiplayer, Track::Speedrun];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Track::Solo => "Solo",
            Track::Multiplayer => "Multiplayer",
            Track::Speedrun => "Speedrun",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Star rating on a quest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Difficulty {
    /// Full star count
    #[serde(default)]
    pub stars: u8,
    /// Half star flag; any value above zero means one half star
    #[serde(default)]
    pub half_stars: u8,
}

/// A single reward line: an item and how many of it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewardEntry {
    pub item: String,
    pub quantity: u32,
}

/// Per-track reward lists, each in stored order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Rewards {
    #[serde(default)]
    pub solo: Vec<RewardEntry>,
    #[serde(default)]
    pub multiplayer: Vec<RewardEntry>,
    #[serde(default)]
    pub speedrun: Vec<RewardEntry>,
}

impl Rewards {
    /// The reward list for one track
    pub fn track(&self, track: Track) -> &[RewardEntry] {
        match track {
            Track::Solo => &self.solo,
            Track::Multiplayer => &self.multiplayer,
            Track::Speedrun => &self.speedrun,
        }
    }
}

/// Per-track currency amounts (bounty coins or gacha tickets).
///
/// A track that is omitted, null, or zero awards nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TrackAmounts {
    #[serde(default)]
    pub solo: Option<u32>,
    #[serde(default)]
    pub multiplayer: Option<u32>,
    #[serde(default)]
    pub speedrun: Option<u32>,
}

impl TrackAmounts {
    /// The awarded amount for a track, if any; zero counts as not awarded
    pub fn awarded(&self, track: Track) -> Option<u32> {
        let amount = match track {
            Track::Solo => self.solo,
            Track::Multiplayer => self.multiplayer,
            Track::Speedrun => self.speedrun,
        };
        amount.filter(|&n| n > 0)
    }

    /// Whether any track awards this currency
    pub fn any_awarded(&self) -> bool {
        Track::ALL.iter().any(|&track| self.awarded(track).is_some())
    }
}

/// A weapon set with a completion-time threshold
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeaponTimeRequirement {
    #[serde(default)]
    pub weapons: Vec<String>,
    pub time_limit_minutes: f64,
    #[serde(default)]
    pub submission_note: Option<String>,
}

/// What a player must do (and must not do) to complete the quest
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub mode_notes: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub multiplayer_restrictions: Vec<String>,
    #[serde(default)]
    pub weapon_time_requirements: Vec<WeaponTimeRequirement>,
}

/// Proof a player must submit to claim the quest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HowToClaim {
    #[serde(default)]
    pub screenshot_requirements: Vec<String>,
    #[serde(default)]
    pub multiplayer_requirements: Vec<String>,
    #[serde(default)]
    pub speedrun_submission_note: Option<String>,
    #[serde(default)]
    pub proof_required: Vec<String>,
}

/// One static quest document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quest {
    /// Sort key; the one required field
    pub quest_id: QuestId,
    #[serde(default)]
    pub quest_name: String,
    #[serde(default)]
    pub quest_subtitle: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub rewards: Rewards,
    #[serde(default)]
    pub bounty_coin: TrackAmounts,
    #[serde(default)]
    pub gacha_ticket: TrackAmounts,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub how_to_claim: HowToClaim,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_id_lexicographic_order() {
        // "10" sorts before "2" as text
        assert!(QuestId::new("10") < QuestId::new("2"));
        assert!(QuestId::new("01") < QuestId::new("18"));
    }

    #[test]
    fn test_quest_id_from_json_string() {
        let id: QuestId = serde_json::from_str("\"18\"").unwrap();
        assert_eq!(id.as_str(), "18");
    }

    #[test]
    fn test_quest_id_from_json_number() {
        let id: QuestId = serde_json::from_str("18").unwrap();
        assert_eq!(id.as_str(), "18");
    }

    #[test]
    fn test_track_order_fixed() {
        let labels: Vec<&str> = Track::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Solo", "Multiplayer", "Speedrun"]);
    }

    #[test]
    fn test_track_amounts_zero_not_awarded() {
        let amounts: TrackAmounts =
            serde_json::from_str(r#"{"solo": 0, "multiplayer": null}"#).unwrap();
        assert_eq!(amounts.awarded(Track::Solo), None);
        assert_eq!(amounts.awarded(Track::Multiplayer), None);
        assert!(!amounts.any_awarded());
    }

    #[test]
    fn test_track_amounts_partial() {
        let amounts: TrackAmounts = serde_json::from_str(r#"{"solo": 5}"#).unwrap();
        assert_eq!(amounts.awarded(Track::Solo), Some(5));
        assert_eq!(amounts.awarded(Track::Speedrun), None);
        assert!(amounts.any_awarded());
    }

    #[test]
    fn test_minimal_document_parses() {
        let quest: Quest = serde_json::from_str(r#"{"quest_id": "01"}"#).unwrap();
        assert_eq!(quest.quest_id.as_str(), "01");
        assert!(quest.quest_name.is_empty());
        assert!(quest.rewards.solo.is_empty());
        assert!(!quest.bounty_coin.any_awarded());
    }

    #[test]
    fn test_document_without_id_rejected() {
        let result = serde_json::from_str::<Quest>(r#"{"quest_name": "Nameless"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let quest: Quest =
            serde_json::from_str(r#"{"quest_id": "01", "future_field": {"x": 1}}"#).unwrap();
        assert_eq!(quest.quest_id.as_str(), "01");
    }
}
