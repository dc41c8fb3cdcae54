//! Filtering and ordering of loaded quests
//!
//! Failed documents are dropped; survivors are sorted ascending by id with a
//! stable sort, so display order never depends on which read finished first.

use crate::loader::LoadBatch;
use crate::types::Quest;

/// Why a category produced no quests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No documents are configured for the category
    NothingConfigured,
    /// Documents were configured but every one failed to load
    AllFailed,
}

/// Filter out failures and sort the surviving quests by id.
///
/// Ties keep their post-filter relative order (`sort_by` is stable).
pub fn aggregate(batch: LoadBatch) -> Result<Vec<Quest>, EmptyReason> {
    let outcomes = match batch {
        LoadBatch::NothingConfigured => return Err(EmptyReason::NothingConfigured),
        LoadBatch::Fetched(outcomes) => outcomes,
    };

    let mut quests: Vec<Quest> = outcomes.into_iter().filter_map(Result::ok).collect();
    if quests.is_empty() {
        return Err(EmptyReason::AllFailed);
    }

    quests.sort_by(|a, b| a.quest_id.cmp(&b.quest_id));
    Ok(quests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadError, LoadFailure};
    use crate::types::QuestId;

    fn quest(id: &str, name: &str) -> Quest {
        let json = format!(r#"{{"quest_id": "{}", "quest_name": "{}"}}"#, id, name);
        serde_json::from_str(&json).unwrap()
    }

    fn failure(file: &str) -> LoadFailure {
        LoadFailure {
            file: file.to_string(),
            error: LoadError::Transport(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )),
        }
    }

    #[test]
    fn test_failures_dropped_and_sorted() {
        let batch = LoadBatch::Fetched(vec![
            Ok(quest("18", "Late")),
            Err(failure("07.json")),
            Ok(quest("01", "Early")),
        ]);
        let quests = aggregate(batch).unwrap();
        let ids: Vec<&str> = quests.iter().map(|q| q.quest_id.as_str()).collect();
        assert_eq!(ids, vec!["01", "18"]);
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        let batch = LoadBatch::Fetched(vec![Ok(quest("2", "Two")), Ok(quest("10", "Ten"))]);
        let quests = aggregate(batch).unwrap();
        let ids: Vec<&str> = quests.iter().map(|q| q.quest_id.as_str()).collect();
        assert_eq!(ids, vec!["10", "2"]);
    }

    #[test]
    fn test_duplicate_ids_keep_relative_order() {
        // Stable sort: equal keys stay in post-filter order regardless of
        // where failures sat between them
        let batch = LoadBatch::Fetched(vec![
            Ok(quest("05", "first")),
            Err(failure("x.json")),
            Ok(quest("05", "second")),
            Ok(quest("01", "lead")),
        ]);
        let quests = aggregate(batch).unwrap();
        let names: Vec<&str> = quests.iter().map(|q| q.quest_name.as_str()).collect();
        assert_eq!(names, vec!["lead", "first", "second"]);
    }

    #[test]
    fn test_nothing_configured() {
        let result = aggregate(LoadBatch::NothingConfigured);
        assert_eq!(result.unwrap_err(), EmptyReason::NothingConfigured);
    }

    #[test]
    fn test_all_failed_distinct_from_nothing_configured() {
        let batch = LoadBatch::Fetched(vec![Err(failure("01.json")), Err(failure("02.json"))]);
        let result = aggregate(batch);
        assert_eq!(result.unwrap_err(), EmptyReason::AllFailed);
    }

    #[test]
    fn test_filtering_idempotent() {
        let batch = LoadBatch::Fetched(vec![Ok(quest("01", "a")), Ok(quest("02", "b"))]);
        let once = aggregate(batch).unwrap();

        let again = aggregate(LoadBatch::Fetched(
            once.iter().cloned().map(Ok).collect(),
        ))
        .unwrap();
        assert_eq!(once, again);
    }

    #[test]
    fn test_sorted_by_quest_id() {
        let batch = LoadBatch::Fetched(vec![
            Ok(quest("c", "")),
            Ok(quest("a", "")),
            Ok(quest("b", "")),
        ]);
        let quests = aggregate(batch).unwrap();
        assert!(quests
            .windows(2)
            .all(|pair| pair[0].quest_id <= pair[1].quest_id));
        assert_eq!(quests[0].quest_id, QuestId::new("a"));
    }
}
