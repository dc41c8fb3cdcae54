//! Property-based tests for quest aggregation
//!
//! Uses proptest to verify ordering and filtering invariants independent of
//! fetch-completion order.

use proptest::prelude::*;
use questboard_core::loader::{LoadBatch, LoadError, LoadFailure};
use questboard_core::types::{
    Difficulty, HowToClaim, Quest, QuestId, Requirements, Rewards, TrackAmounts,
};
use questboard_core::{aggregate, EmptyReason};

// ============================================================================
// Strategy Generators
// ============================================================================

fn quest(id: &str, name: &str) -> Quest {
    Quest {
        quest_id: QuestId::new(id),
        quest_name: name.to_string(),
        quest_subtitle: String::new(),
        image_url: String::new(),
        difficulty: Difficulty::default(),
        rewards: Rewards::default(),
        bounty_coin: TrackAmounts::default(),
        gacha_ticket: TrackAmounts::default(),
        requirements: Requirements::default(),
        how_to_claim: HowToClaim::default(),
    }
}

fn failure() -> LoadFailure {
    LoadFailure {
        file: "missing.json".to_string(),
        error: LoadError::Transport(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        )),
    }
}

/// Generate quest ids that collide often enough to exercise stability
fn quest_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,2}").expect("valid regex")
}

/// One per-item outcome: a quest (tagged with its position) or a failure
fn outcomes_strategy() -> impl Strategy<Value = Vec<Result<Quest, LoadFailure>>> {
    prop::collection::vec(
        prop_oneof![
            4 => quest_id_strategy().prop_map(Some),
            1 => Just(None),
        ],
        0..32,
    )
    .prop_map(|slots| {
        slots
            .into_iter()
            .enumerate()
            .map(|(position, slot)| match slot {
                // Zero-padded position in the name makes text order match
                // arrival order inside an id group
                Some(id) => Ok(quest(&id, &format!("quest-{:03}", position))),
                None => Err(failure()),
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Rendered order is non-decreasing in quest_id under lexicographic order
    #[test]
    fn prop_aggregate_orders_by_id(outcomes in outcomes_strategy()) {
        if let Ok(quests) = aggregate(LoadBatch::Fetched(outcomes)) {
            for pair in quests.windows(2) {
                prop_assert!(pair[0].quest_id <= pair[1].quest_id);
            }
        }
    }

    /// Equal-key quests keep their pre-sort relative order (stability)
    #[test]
    fn prop_equal_ids_keep_relative_order(outcomes in outcomes_strategy()) {
        // Survivor names encode original positions, so within an id group
        // the positions must still be increasing after the sort
        if let Ok(quests) = aggregate(LoadBatch::Fetched(outcomes)) {
            for pair in quests.windows(2) {
                if pair[0].quest_id == pair[1].quest_id {
                    prop_assert!(pair[0].quest_name < pair[1].quest_name);
                }
            }
        }
    }

    /// Aggregating an already-clean, already-sorted list returns it unchanged
    #[test]
    fn prop_aggregate_idempotent(outcomes in outcomes_strategy()) {
        if let Ok(once) = aggregate(LoadBatch::Fetched(outcomes)) {
            let again = aggregate(LoadBatch::Fetched(
                once.iter().cloned().map(Ok).collect(),
            ));
            prop_assert_eq!(again.as_ref(), Ok(&once));
        }
    }

    /// Failures never change which quests survive or their relative order
    #[test]
    fn prop_failures_are_invisible_to_survivors(outcomes in outcomes_strategy()) {
        let clean: Vec<Result<Quest, LoadFailure>> = outcomes
            .iter()
            .filter(|outcome| outcome.is_ok())
            .map(|outcome| Ok(outcome.as_ref().unwrap().clone()))
            .collect();

        let mixed = aggregate(LoadBatch::Fetched(outcomes));
        let filtered = aggregate(LoadBatch::Fetched(clean));

        match (mixed, filtered) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(EmptyReason::AllFailed), Err(EmptyReason::AllFailed)) => {}
            (a, b) => prop_assert!(false, "mismatched outcomes: {:?} vs {:?}", a, b),
        }
    }
}
