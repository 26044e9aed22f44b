//! Property-based tests for the points trie.
//!
//! Every operation sequence is replayed against a `BTreeMap` model; the trie
//! must agree with the model on every result and keep exactly the nodes that
//! lie on a path to a stored key.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use crate::data_structures::{Points, PointsTrie};
use crate::tests::{key_strategy, operations_strategy, Operation};

/// Number of distinct non-empty prefixes of the model's keys.
fn prefix_count(model: &BTreeMap<String, Points>) -> usize {
    let prefixes: BTreeSet<&str> = model
        .keys()
        .flat_map(|key| (1..=key.len()).map(move |end| &key[..end]))
        .collect();
    prefixes.len()
}

/// Rebuilds the canonical rendering from the model alone.
fn render_model(model: &BTreeMap<String, Points>) -> String {
    fn render(model: &BTreeMap<String, Points>, prefix: &str, out: &mut String) {
        for letter in 'a'..='z' {
            let path = format!("{prefix}{letter}");
            if !model.keys().any(|key| key.starts_with(&path)) {
                continue;
            }
            out.push(letter);
            if let Some(value) = model.get(&path) {
                out.push_str(&format!("[{value}]"));
            }
            if model.keys().any(|key| key.len() > path.len() && key.starts_with(&path)) {
                out.push('(');
                render(model, &path, out);
                out.push(')');
            }
        }
    }

    if model.is_empty() {
        return "+".to_string();
    }
    let mut out = String::new();
    render(model, "", &mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_trie_matches_map_model(operations in operations_strategy()) {
        let mut trie = PointsTrie::new();
        let mut model: BTreeMap<String, Points> = BTreeMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    let expected = !model.contains_key(&key);
                    if expected {
                        model.insert(key.clone(), value);
                    }
                    prop_assert_eq!(trie.insert(&key, value), expected);
                }
                Operation::Update(key, value) => {
                    let expected = match model.get_mut(&key) {
                        Some(slot) => {
                            *slot = value;
                            true
                        }
                        None => false,
                    };
                    prop_assert_eq!(trie.update(&key, value), expected);
                }
                Operation::Delete(key) => {
                    let expected = model.remove(&key).is_some();
                    prop_assert_eq!(trie.delete(&key), expected);
                    prop_assert_eq!(trie.lookup(&key), None);
                }
                Operation::Lookup(key) => {
                    prop_assert_eq!(trie.lookup(&key), model.get(&key).copied());
                }
            }

            prop_assert_eq!(trie.len(), model.len());
            prop_assert_eq!(trie.node_count(), prefix_count(&model));
        }

        for (key, value) in &model {
            prop_assert_eq!(trie.lookup(key), Some(*value));
        }
        prop_assert_eq!(trie.serialize(), render_model(&model));
    }

    #[test]
    fn prop_insert_then_lookup(key in key_strategy(), value in any::<Points>()) {
        let mut trie = PointsTrie::new();
        prop_assert!(trie.insert(&key, value));
        prop_assert_eq!(trie.lookup(&key), Some(value));
        prop_assert!(!trie.insert(&key, value.wrapping_add(1)));
        prop_assert_eq!(trie.lookup(&key), Some(value));
    }

    #[test]
    fn prop_prefix_keys_are_independent(
        key in key_strategy(),
        suffix in key_strategy(),
        short in any::<Points>(),
        long in any::<Points>(),
    ) {
        let longer = format!("{key}{suffix}");
        let mut trie = PointsTrie::new();
        prop_assert!(trie.insert(&key, short));
        prop_assert!(trie.insert(&longer, long));

        prop_assert!(trie.delete(&key));
        prop_assert_eq!(trie.lookup(&longer), Some(long));
        prop_assert_eq!(trie.node_count(), longer.len());

        prop_assert!(trie.insert(&key, short));
        prop_assert!(trie.delete(&longer));
        prop_assert_eq!(trie.lookup(&key), Some(short));
        prop_assert_eq!(trie.node_count(), key.len());
    }

    #[test]
    fn prop_delete_restores_previous_rendering(
        keys in proptest::collection::btree_set(key_strategy(), 0..10),
        extra in key_strategy(),
    ) {
        prop_assume!(!keys.contains(&extra));

        let mut trie = PointsTrie::new();
        for (value, key) in keys.iter().enumerate() {
            prop_assert!(trie.insert(key, value as Points));
        }

        let before = trie.serialize();
        let nodes_before = trie.node_count();
        prop_assert!(trie.insert(&extra, 42));
        prop_assert!(trie.delete(&extra));

        prop_assert_eq!(trie.serialize(), before);
        prop_assert_eq!(trie.node_count(), nodes_before);
    }
}
