//! Key uniqueness and shared-store placement.

use crate::{all_nodes, check_trees, for_all_trees};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use treegen::*;

fn mappings(tree: &Mapping) -> Vec<Mapping> {
    all_nodes(tree)
        .into_iter()
        .filter_map(|node| match node {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        })
        .collect()
}

/// Property: own keys within a mapping are pairwise distinct
pub fn test_own_keys_are_unique() {
    for_all_trees(300, |_config, tree| {
        mappings(tree).iter().all(|mapping| {
            let keys: HashSet<&str> = mapping.own().keys().map(String::as_str).collect();
            keys.len() == mapping.own_len() && keys.iter().all(|key| key.len() == KEY_LENGTH)
        })
    });
}

/// Property: shared-store keys are pairwise distinct among themselves
pub fn test_shared_keys_are_unique() {
    for_all_trees(300, |config, tree| {
        mappings(tree).iter().all(|mapping| match mapping.shared() {
            Some(store) => {
                let keys: HashSet<&String> = store.keys().collect();
                keys.len() == store.len() && mapping.own_len() + store.len() <= config.max_breadth
            }
            None => true,
        })
    });

    // Shared entries are reachable through inherited lookup.
    let config = GenerationConfig::default()
        .with_breadth(5)
        .with_height(3)
        .with_shared_store(true);
    let saw_shared = Cell::new(false);
    check_trees(Just(config), 100, |_, tree| {
        mappings(tree).iter().all(|mapping| match mapping.shared() {
            Some(store) => {
                if !store.is_empty() {
                    saw_shared.set(true);
                }
                store
                    .keys()
                    .all(|key| mapping.get(key).is_some() && mapping.contains_key(key))
            }
            None => true,
        })
    });
    assert!(saw_shared.get());
}

/// Property: without the toggle no mapping ever grows a shared store
pub fn test_shared_store_requires_toggle() {
    for_all_trees(300, |config, tree| {
        config.shared_store || mappings(tree).iter().all(|m| !m.has_shared_store())
    });
}
