//! Property-based tests for condition composition and rule ordering.

use proptest::prelude::*;
use rebind_property::{Properties, StaticPropertyOracle};
use rebind_rules::{
    Condition, Conditions, DeclaredType, GeneratorRegistry, RebindContext, Rule, Rules, TypeRegistry,
};

const REQUESTED: &str = "com.foo.Requested";

/// A leaf that evaluates to `value` for [`REQUESTED`].
fn leaf(value: bool) -> Condition {
    if value {
        Condition::when_type_is(REQUESTED)
    } else {
        Condition::when_type_is("com.foo.Elsewhere")
    }
}

fn eval(cond: &Condition) -> bool {
    let props = Properties::new();
    let oracle = StaticPropertyOracle::new(&props);
    let mut types = TypeRegistry::new();
    types.insert(DeclaredType::class(REQUESTED));
    let generators = GeneratorRegistry::new();
    let ctx = RebindContext::new(&oracle, &types, &generators);
    cond.is_true(&ctx, REQUESTED).unwrap()
}

// ============================================================================
// TRUTH TABLES: any == OR, none == NOR, all == AND
// ============================================================================

proptest! {
    #[test]
    fn any_is_logical_or(values in prop::collection::vec(any::<bool>(), 0..10)) {
        let cond = Condition::any(values.iter().copied().map(leaf));
        prop_assert_eq!(eval(&cond), values.iter().any(|v| *v));
    }

    #[test]
    fn none_is_logical_nor(values in prop::collection::vec(any::<bool>(), 0..10)) {
        let cond = Condition::none_of(values.iter().copied().map(leaf));
        prop_assert_eq!(eval(&cond), !values.iter().any(|v| *v));
    }

    #[test]
    fn all_is_logical_and(values in prop::collection::vec(any::<bool>(), 0..10)) {
        let cond = Condition::all(values.iter().copied().map(leaf));
        prop_assert_eq!(eval(&cond), values.iter().all(|v| *v));
    }
}

// ============================================================================
// REQUIRED PROPERTIES: union without duplicates, independent of order
// ============================================================================

proptest! {
    #[test]
    fn required_properties_is_deduplicated_union(
        names in prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 0..12)
    ) {
        let children: Vec<Condition> = names
            .iter()
            .map(|n| Condition::when_property_is(*n, "v"))
            .collect();

        let forward = Condition::any(children.clone()).required_properties();
        let backward = Condition::any(children.into_iter().rev()).required_properties();

        let mut expected: Vec<&str> = names.clone();
        expected.sort_unstable();
        expected.dedup();

        let mut got: Vec<String> = forward.iter().cloned().collect();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(forward.len(), backward.len());
        prop_assert!(forward.iter().all(|p| backward.contains(p)));
    }
}

// ============================================================================
// ORDERING: prepend yields reverse insertion order; conditions keep insertion order
// ============================================================================

proptest! {
    #[test]
    fn prepend_yields_reverse_order(targets in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut rules = Rules::new();
        for t in &targets {
            rules.prepend(Rule::replace_with(t.clone()));
        }
        let seen: Vec<String> = rules
            .iter()
            .map(|r| match r.action() {
                rebind_rules::RuleAction::ReplaceWith(name) => name.clone(),
                other => panic!("unexpected action {other:?}"),
            })
            .collect();
        let mut expected = targets.clone();
        expected.reverse();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn conditions_iterate_in_insertion_order(values in prop::collection::vec(any::<bool>(), 0..10)) {
        let mut conditions = Conditions::new();
        for v in &values {
            conditions.add(leaf(*v));
        }
        let before: Vec<String> = conditions.iter().map(ToString::to_string).collect();

        let root = Condition::All(conditions.clone());
        let _ = eval(&root);

        let after: Vec<String> = conditions.iter().map(ToString::to_string).collect();
        prop_assert_eq!(&before, &after);
        let expected: Vec<String> = values.iter().map(|v| leaf(*v).to_string()).collect();
        prop_assert_eq!(before, expected);
    }
}
