//! In-memory operations on a loaded [`PromptList`].

use rand::Rng;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Result, StoreError};
use crate::types::{PickedPrompt, PromptEntry, PromptList};

/// Insert a new prompt or update an existing one, returning the pair in
/// effect afterwards.
///
/// - Existing name without `overwrite`: nothing changes, the stored pair is
///   returned.
/// - Existing name with `overwrite`: `positive` is replaced only by a
///   non-blank value. `negative` is replaced when the incoming value is
///   non-empty or when the stored negative is already empty.
/// - New name: a non-blank `positive` is required and the entry is appended.
pub fn upsert(
    list: &mut PromptList,
    name: &str,
    positive: &str,
    negative: &str,
    overwrite: bool,
) -> Result<PromptEntry> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("name required".to_string()));
    }
    let positive = positive.trim();

    if let Some(existing) = list.get_mut(name) {
        if overwrite {
            if !positive.is_empty() {
                existing.positive = positive.to_string();
            }
            if !negative.is_empty() || existing.negative.is_empty() {
                existing.negative = negative.to_string();
            }
            tracing::info!(name = %name, "Updated prompt");
        } else {
            tracing::debug!(name = %name, "Prompt exists, overwrite disabled");
        }
        return Ok(existing.clone());
    }

    if positive.is_empty() {
        return Err(StoreError::Validation(
            "positive prompt required for new entry".to_string(),
        ));
    }

    let entry = PromptEntry::new(positive, negative);
    list.insert(name.to_string(), entry.clone());
    tracing::info!(name = %name, "Added prompt");
    Ok(entry)
}

/// Pick one entry uniformly at random.
pub fn pick_random(list: &PromptList) -> Result<PickedPrompt> {
    pick_random_with(list, &mut rand::thread_rng())
}

/// Same as [`pick_random`] with a caller-supplied RNG.
pub fn pick_random_with<R: Rng>(list: &PromptList, rng: &mut R) -> Result<PickedPrompt> {
    if list.is_empty() {
        return Err(StoreError::EmptyList);
    }

    let index = rng.gen_range(0..list.len());
    let (name, entry) = list.get_index(index).ok_or(StoreError::EmptyList)?;

    Ok(PickedPrompt {
        name: name.clone(),
        positive: entry.positive.clone(),
        negative: entry.negative.clone(),
    })
}

/// Prompt names in list order.
pub fn prompt_names(list: &PromptList) -> Vec<String> {
    list.keys().cloned().collect()
}

/// Render a list the way it is written to disk: 4-space indentation,
/// non-ASCII characters left as-is.
pub fn to_json(list: &PromptList) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    list.serialize(&mut serializer)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn list_with(entries: &[(&str, &str, &str)]) -> PromptList {
        entries
            .iter()
            .map(|(name, pos, neg)| (name.to_string(), PromptEntry::new(*pos, *neg)))
            .collect()
    }

    #[test]
    fn test_upsert_new_entry() {
        let mut list = PromptList::new();

        let entry = upsert(&mut list, "A", "pos", "neg", false).unwrap();

        assert_eq!(entry, PromptEntry::new("pos", "neg"));
        assert_eq!(list.len(), 1);
        assert_eq!(list["A"], PromptEntry::new("pos", "neg"));
    }

    #[test]
    fn test_upsert_trims_name_and_positive() {
        let mut list = PromptList::new();

        upsert(&mut list, "  A  ", "  pos \n", " neg ", false).unwrap();

        let entry = &list["A"];
        assert_eq!(entry.positive, "pos");
        // negative is stored as given
        assert_eq!(entry.negative, " neg ");
    }

    #[test]
    fn test_upsert_new_entry_defaults_negative() {
        let mut list = PromptList::new();

        let entry = upsert(&mut list, "A", "pos", "", false).unwrap();

        assert_eq!(entry.negative, "");
    }

    #[test]
    fn test_upsert_requires_name() {
        let mut list = PromptList::new();

        let err = upsert(&mut list, "   ", "pos", "neg", false).unwrap_err();

        assert!(matches!(err, StoreError::Validation(ref m) if m == "name required"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_upsert_new_entry_requires_positive() {
        let mut list = PromptList::new();

        let err = upsert(&mut list, "A", "", "neg", false).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        let err = upsert(&mut list, "A", "  \t", "neg", true).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_upsert_without_overwrite_reads_back() {
        let mut list = list_with(&[("A", "p", "n")]);

        let entry = upsert(&mut list, "A", "ignored", "ignored", false).unwrap();

        assert_eq!(entry, PromptEntry::new("p", "n"));
        assert_eq!(list["A"], PromptEntry::new("p", "n"));
    }

    #[test]
    fn test_upsert_without_overwrite_allows_empty_positive() {
        let mut list = list_with(&[("A", "p", "n")]);

        let entry = upsert(&mut list, "A", "", "", false).unwrap();

        assert_eq!(entry, PromptEntry::new("p", "n"));
    }

    #[test]
    fn test_overwrite_replaces_both() {
        let mut list = list_with(&[("A", "p", "n")]);

        let entry = upsert(&mut list, "A", "p2", "n2", true).unwrap();

        assert_eq!(entry, PromptEntry::new("p2", "n2"));
    }

    #[test]
    fn test_overwrite_keeps_positive_when_blank() {
        let mut list = list_with(&[("A", "p", "n")]);

        let entry = upsert(&mut list, "A", "   ", "n2", true).unwrap();

        assert_eq!(entry, PromptEntry::new("p", "n2"));
    }

    #[test]
    fn test_overwrite_negative_asymmetry() {
        // Non-empty incoming negative always wins
        let mut list = list_with(&[("A", "p", "")]);
        let entry = upsert(&mut list, "A", "", "newneg", true).unwrap();
        assert_eq!(entry.negative, "newneg");

        // Empty incoming over empty stored stays empty
        let mut list = list_with(&[("A", "p", "")]);
        let entry = upsert(&mut list, "A", "", "", true).unwrap();
        assert_eq!(entry.negative, "");

        // Empty incoming never clears a stored negative
        let mut list = list_with(&[("A", "p", "keep")]);
        let entry = upsert(&mut list, "A", "", "", true).unwrap();
        assert_eq!(entry.negative, "keep");
    }

    #[test]
    fn test_upsert_appends_in_insertion_order() {
        let mut list = PromptList::new();
        upsert(&mut list, "zeta", "z", "", false).unwrap();
        upsert(&mut list, "alpha", "a", "", false).unwrap();
        upsert(&mut list, "mid", "m", "", false).unwrap();
        upsert(&mut list, "zeta", "z2", "", true).unwrap();

        assert_eq!(prompt_names(&list), vec!["zeta", "alpha", "mid"]);
        assert_eq!(list["zeta"].positive, "z2");
    }

    #[test]
    fn test_pick_random_empty() {
        let list = PromptList::new();

        let err = pick_random(&list).unwrap_err();

        assert!(matches!(err, StoreError::EmptyList));
    }

    #[test]
    fn test_pick_random_single() {
        let list = list_with(&[("only", "p", "n")]);

        let picked = pick_random(&list).unwrap();

        assert_eq!(picked.name, "only");
        assert_eq!(picked.positive, "p");
        assert_eq!(picked.negative, "n");
    }

    #[test]
    fn test_pick_random_distribution() {
        let list = list_with(&[("a", "1", ""), ("b", "2", ""), ("c", "3", "")]);
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 3000;

        let mut counts = std::collections::HashMap::new();
        for _ in 0..trials {
            let picked = pick_random_with(&list, &mut rng).unwrap();
            *counts.entry(picked.name).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), 3);
        for (name, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "{} picked {} times out of {}",
                name,
                count,
                trials
            );
        }
    }

    #[test]
    fn test_to_json_four_space_indent() {
        let list = list_with(&[("A", "p", "n")]);

        let json = to_json(&list).unwrap();

        assert_eq!(
            json,
            "{\n    \"A\": {\n        \"positive\": \"p\",\n        \"negative\": \"n\"\n    }\n}"
        );
    }

    #[test]
    fn test_to_json_keeps_non_ascii() {
        let list = list_with(&[("猫", "ねこ, café", "")]);

        let json = to_json(&list).unwrap();

        assert!(json.contains("\"猫\""));
        assert!(json.contains("ねこ, café"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&PromptList::new()).unwrap(), "{}");
    }
}
