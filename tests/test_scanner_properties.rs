//! Property tests for the scanner and validator.

use std::collections::HashMap;

use proptest::prelude::*;

use allowlint::allowlist::{Scanner, ValidationFailure, ValidationResult, parse_bool, validate};

/// Strategy for extension keys: no dots, colons, whitespace, or comments.
const KEY: &str = "[a-z][a-z0-9_-]{0,8}";

fn build_file(entries: &[(String, String)]) -> String {
    let mut file = String::from("ExtensionAllowlist:\n");
    for (key, value) in entries {
        file.push_str("    ");
        file.push_str(key);
        file.push_str(": ");
        file.push_str(value);
        file.push('\n');
    }
    file
}

proptest! {
    /// Distinct keys with recognized boolean spellings always pass, and
    /// every key maps to its coerced value.
    #[test]
    fn distinct_keys_pass(entries in prop::collection::hash_map(KEY, any::<bool>(), 1..8)) {
        let lines: Vec<(String, String)> = entries
            .iter()
            .map(|(k, &v)| (k.clone(), if v { "true" } else { "false" }.to_string()))
            .collect();
        let file = build_file(&lines);

        let outcome = Scanner::new().scan(&file);
        prop_assert_eq!(outcome.entries.len(), entries.len());
        for (key, &allowed) in &entries {
            prop_assert_eq!(outcome.entries.get(key), Some(&allowed));
        }
        prop_assert!(validate(&outcome).is_valid());
    }

    /// A repeated key appears exactly once in the duplicate list, keeps its
    /// first value, and never passes validation.
    #[test]
    fn repeated_key_never_passes(
        entries in prop::collection::hash_map(KEY, any::<bool>(), 1..6),
        repeats in 1_usize..3,
    ) {
        let mut lines: Vec<(String, String)> = entries
            .iter()
            .map(|(k, &v)| (k.clone(), if v { "yes" } else { "no" }.to_string()))
            .collect();
        let (dup_key, &first_value) = entries.iter().next().unwrap();
        for _ in 0..repeats {
            // Repeat with the opposite value; the original must win.
            lines.push((
                dup_key.clone(),
                if first_value { "no" } else { "yes" }.to_string(),
            ));
        }

        let outcome = Scanner::new().scan(&build_file(&lines));
        prop_assert_eq!(
            outcome.duplicates.iter().filter(|d| *d == dup_key).count(),
            1
        );
        prop_assert_eq!(outcome.entries.get(dup_key), Some(&first_value));

        match validate(&outcome) {
            ValidationResult::Fail(ValidationFailure::DuplicateKeys(keys)) => {
                prop_assert!(keys.contains(dup_key));
            }
            other => prop_assert!(false, "expected duplicate failure, got {:?}", other),
        }
    }

    /// A dotted key conflicts exactly when its prefix is a recorded
    /// top-level key.
    #[test]
    fn prefix_conflict_iff_top_level_present(
        parent in KEY,
        child in KEY,
        include_parent in any::<bool>(),
    ) {
        let mut lines = Vec::new();
        if include_parent {
            lines.push((parent.clone(), "true".to_string()));
        }
        lines.push((format!("{parent}.{child}"), "false".to_string()));

        let result = validate(&Scanner::new().scan(&build_file(&lines)));
        if include_parent {
            let expected = format!("{parent}.{child} conflicts with top-level key {parent}");
            match result {
                ValidationResult::Fail(ValidationFailure::PrefixConflicts(conflicts)) => {
                    prop_assert_eq!(conflicts, vec![expected]);
                }
                other => prop_assert!(false, "expected conflict failure, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_valid());
        }
    }

    /// Scanning the same input twice yields the same outcome.
    #[test]
    fn scan_is_deterministic(entries in prop::collection::hash_map(KEY, any::<bool>(), 0..6)) {
        let lines: Vec<(String, String)> = entries
            .iter()
            .map(|(k, &v)| (k.clone(), if v { "1" } else { "0" }.to_string()))
            .collect();
        let file = build_file(&lines);

        let first = Scanner::new().scan(&file);
        let second = Scanner::new().scan(&file);
        let first_entries: HashMap<_, _> = first.entries.clone().into_iter().collect();
        let second_entries: HashMap<_, _> = second.entries.clone().into_iter().collect();
        prop_assert_eq!(first_entries, second_entries);
        prop_assert_eq!(&first.duplicates, &second.duplicates);
        prop_assert_eq!(validate(&first), validate(&second));
    }

    /// Boolean coercion accepts exactly `true`/`yes`/`1` case-insensitively
    /// and never errors on anything else.
    #[test]
    fn boolean_coercion_is_total(value in "[A-Za-z0-9_-]{1,8}") {
        let expected = matches!(value.to_lowercase().as_str(), "true" | "yes" | "1");
        prop_assert_eq!(parse_bool(&value), expected);
    }
}
