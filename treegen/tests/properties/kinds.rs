//! Value kind selection.

use crate::{all_nodes, check_trees};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashSet;
use treegen::*;

/// Property: with every toggle off, leaves are strings, numbers, booleans or absent
pub fn test_plain_leaves_are_primitive() {
    let configs = (0..=6usize, 0..=5usize).prop_map(|(breadth, height)| {
        GenerationConfig::default()
            .with_breadth(breadth)
            .with_height(height)
    });
    check_trees(configs, 200, |_, tree| {
        all_nodes(tree)
            .iter()
            .all(|node| matches!(node, Node::Mapping(_) | Node::Primitive(_)))
    });
}

fn complex_leaf_is_well_formed(value: &ComplexValue) -> bool {
    match value {
        ComplexValue::Timestamp(at) => {
            (0..=i64::from(u32::MAX)).contains(&at.timestamp_millis())
        }
        ComplexValue::Pattern(pattern) => pattern.is_match("12 xyzABC42"),
        ComplexValue::Error(err) => err.to_string() == EXAMPLE_ERROR_MESSAGE,
    }
}

/// Property: timestamps, patterns and errors are all produced
pub fn test_complex_kinds_are_all_reachable() {
    let config = GenerationConfig::default()
        .with_breadth(5)
        .with_height(2)
        .with_complex_types(true);

    let seen = RefCell::new(HashSet::new());
    check_trees(Just(config), 300, |_, tree| {
        all_nodes(tree).iter().all(|node| match node {
            Node::Complex(value) => {
                seen.borrow_mut().insert(node.kind_name());
                complex_leaf_is_well_formed(value)
            }
            _ => true,
        })
    });

    assert_eq!(
        seen.into_inner(),
        HashSet::from(["timestamp", "pattern", "error"]),
        "not every complex kind was generated"
    );
}

/// Property: enabling sequences and callables makes them appear
pub fn test_toggled_kinds_appear() {
    let config = GenerationConfig::default()
        .with_breadth(5)
        .with_height(3)
        .with_arrays(true)
        .with_functions(true);

    let seen = RefCell::new(HashSet::new());
    check_trees(Just(config), 200, |_, tree| {
        all_nodes(tree).iter().all(|node| {
            if let Node::Callable(stub) = node {
                stub.call();
            }
            seen.borrow_mut().insert(node.kind_name());
            !matches!(node, Node::Complex(_))
        })
    });

    let seen = seen.into_inner();
    for kind in ["mapping", "sequence", "callable", "string", "number", "boolean", "absent"] {
        assert!(seen.contains(kind), "{kind} never generated");
    }
}
