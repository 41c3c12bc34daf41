//! Independence of calls and handling of caller options.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult, TestRunner};
use treegen::*;

fn arbitrary_options() -> impl Strategy<Value = GenerationOptions> {
    (
        proptest::option::of(0..=4i64),
        proptest::option::of(0..=3i64),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(max_breadth, max_height, arrays, on_prototype)| GenerationOptions {
            max_breadth,
            max_height,
            arrays,
            on_prototype,
            ..Default::default()
        })
}

fn run_property<S, F>(strategy: S, cases: u32, test: F)
where
    S: Strategy,
    F: Fn(S::Value) -> TestCaseResult,
{
    let mut runner = TestRunner::new(ProptestConfig::with_cases(cases));
    if let Err(err) = runner.run(&strategy, test) {
        panic!("{err}");
    }
}

fn tree_from(options: &GenerationOptions) -> std::result::Result<Mapping, TestCaseError> {
    generate(Some(options)).map_err(|err| TestCaseError::fail(err.to_string()))
}

/// Property: generating from shared options leaves them untouched
pub fn test_options_are_not_mutated() {
    run_property(arbitrary_options(), 50, |options| {
        let before = options.clone();
        let config = options.resolve().map_err(|err| TestCaseError::fail(err.to_string()))?;

        for _ in 0..2 {
            let tree = tree_from(&options)?;
            prop_assert!(tree.len() <= config.max_breadth);
            prop_assert!(tree.depth() <= config.max_height);
        }

        prop_assert_eq!(options, before);
        Ok(())
    });
}

/// Property: two trees from the same options share no state
pub fn test_trees_are_independent() {
    run_property(arbitrary_options(), 50, |options| {
        let mut first = tree_from(&options)?;
        let second = tree_from(&options)?;
        let second_before = second.render_compact();
        let second_shared = second.shared_len();

        first.insert(
            Placement::Shared,
            "marker".to_string(),
            Node::Primitive(Primitive::Boolean(true)),
        );
        first.insert(
            Placement::Own,
            "other".to_string(),
            Node::Primitive(Primitive::Absent),
        );

        prop_assert!(first.get("marker").is_some());
        prop_assert!(second.get("marker").is_none());
        prop_assert!(second.get("other").is_none());
        prop_assert_eq!(second.shared_len(), second_shared);
        prop_assert_eq!(second.render_compact(), second_before);

        // A fresh tree never sees entries added to an earlier one.
        let third = tree_from(&options)?;
        prop_assert!(third.get("marker").is_none());
        Ok(())
    });
}

/// Property: negative bounds are rejected instead of coerced
pub fn test_invalid_options_are_rejected() {
    let negative = (i64::MIN..0i64, any::<bool>()).prop_map(|(value, on_breadth)| {
        if on_breadth {
            GenerationOptions {
                max_breadth: Some(value),
                ..Default::default()
            }
        } else {
            GenerationOptions {
                max_height: Some(value),
                ..Default::default()
            }
        }
    });
    run_property(negative, 100, |options| match generate(Some(&options)) {
        Err(TreeGenError::InvalidConfig { message }) => {
            prop_assert!(message.contains("non-negative"));
            Ok(())
        }
        other => Err(TestCaseError::fail(format!("expected InvalidConfig, got {other:?}"))),
    });

    // Breadth supplied by the caller is honored, not replaced by the default.
    run_property(0..=3i64, 50, |breadth| {
        let options = GenerationOptions {
            max_breadth: Some(breadth),
            max_height: Some(4),
            ..Default::default()
        };
        let tree = tree_from(&options)?;
        prop_assert!(tree.len() as i64 <= breadth);
        Ok(())
    });
}
