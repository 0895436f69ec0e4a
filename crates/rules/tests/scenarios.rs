//! End-to-end deferred-binding scenarios.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rebind_property::{Properties, StaticPropertyOracle};
use rebind_rules::{
    Condition, DeclaredType, Generator, GeneratorError, GeneratorRegistry, RebindContext,
    RebindError, RebindOracle, Rule, Rules, TypeRegistry,
};

struct World {
    props: Properties,
    types: TypeRegistry,
    generators: GeneratorRegistry,
}

struct ImplGenerator;

impl Generator for ImplGenerator {
    fn generate(&self, ctx: &RebindContext<'_>, type_name: &str) -> Result<String, GeneratorError> {
        let agent = ctx
            .properties()
            .selection_value("user.agent")
            .map_err(|e| GeneratorError::new(e.to_string()))?;
        Ok(format!("{type_name}Impl_{agent}"))
    }
}

impl World {
    fn new() -> Self {
        let mut props = Properties::new();
        let ua = props.create_binding("user.agent").unwrap();
        for v in ["safari", "gecko1_8", "ie9"] {
            ua.define_value(v).unwrap();
        }
        props.create_configuration("rpc.blacklist", true).unwrap();

        let mut types = TypeRegistry::new();
        types
            .insert(DeclaredType::interface("java.io.Serializable"))
            .insert(DeclaredType::class("com.foo.Base").implements("java.io.Serializable"))
            .insert(DeclaredType::class("com.foo.Other"))
            .insert(DeclaredType::interface("com.foo.Service"));

        let mut generators = GeneratorRegistry::new();
        generators
            .register("com.foo.rebind.ImplGenerator", || Arc::new(ImplGenerator))
            .unwrap();

        Self {
            props,
            types,
            generators,
        }
    }

    fn rebind(&self, rules: &Rules, agent: &str, type_name: &str) -> Result<String, RebindError> {
        let oracle = StaticPropertyOracle::new(&self.props).with_selection("user.agent", agent);
        let ctx = RebindContext::new(&oracle, &self.types, &self.generators);
        rules.rebind(&ctx, type_name).map(|r| r.type_name)
    }
}

#[test]
fn replace_with_when_type_is() {
    let world = World::new();
    let props = StaticPropertyOracle::new(&world.props);
    let ctx = RebindContext::new(&props, &world.types, &world.generators);

    let rule = Rule::replace_with("com.foo.Impl").when(Condition::when_type_is("com.foo.Base"));
    assert!(rule.is_applicable(&ctx, "com.foo.Base").unwrap());
    assert_eq!(rule.realize(&ctx, "com.foo.Base").unwrap(), "com.foo.Impl");
    assert!(!rule.is_applicable(&ctx, "com.foo.Other").unwrap());
}

#[test]
fn assignable_to_serializable() {
    let world = World::new();
    let props = StaticPropertyOracle::new(&world.props);
    let ctx = RebindContext::new(&props, &world.types, &world.generators);

    let cond = Condition::when_type_assignable_to("java.io.Serializable");
    assert_eq!(cond.is_true(&ctx, "com.foo.Base"), Ok(true));

    let stale = Condition::when_type_assignable_to("com.removed.Marker");
    assert_eq!(stale.is_true(&ctx, "com.foo.Base"), Ok(false));

    assert_eq!(
        cond.is_true(&ctx, "com.foo.DoesNotExist"),
        Err(RebindError::UnresolvedType("com.foo.DoesNotExist".into()))
    );
}

#[test]
fn later_prepended_rule_overrides() {
    let world = World::new();
    let mut rules = Rules::new();
    rules.prepend(Rule::replace_with("com.foo.A").when(Condition::when_type_is("com.foo.Base")));
    rules.prepend(Rule::replace_with("com.foo.B").when(Condition::when_type_is("com.foo.Base")));

    let order: Vec<String> = rules
        .iter()
        .map(|r| format!("{:?}", r.action()))
        .collect();
    assert_eq!(order, [r#"ReplaceWith("com.foo.B")"#, r#"ReplaceWith("com.foo.A")"#]);
    assert_eq!(world.rebind(&rules, "safari", "com.foo.Base").unwrap(), "com.foo.B");
}

#[test]
fn user_agent_specific_replacement() {
    let world = World::new();
    let mut rules = Rules::new();
    rules.prepend(Rule::replace_with("com.foo.ImplStandard").when(Condition::when_type_is("com.foo.Base")));
    rules.prepend(
        Rule::replace_with("com.foo.ImplIE")
            .when(Condition::when_type_is("com.foo.Base"))
            .when(Condition::when_property_is("user.agent", "ie9")),
    );
    rules.prepend(
        Rule::replace_with("com.foo.ImplWebkitless")
            .when(Condition::when_type_is("com.foo.Base"))
            .when(Condition::none_of([
                Condition::when_property_is("user.agent", "safari"),
                Condition::when_property_is("user.agent", "ie9"),
            ])),
    );

    assert_eq!(world.rebind(&rules, "ie9", "com.foo.Base").unwrap(), "com.foo.ImplIE");
    assert_eq!(world.rebind(&rules, "safari", "com.foo.Base").unwrap(), "com.foo.ImplStandard");
    assert_eq!(
        world.rebind(&rules, "gecko1_8", "com.foo.Base").unwrap(),
        "com.foo.ImplWebkitless"
    );
    assert_eq!(world.rebind(&rules, "safari", "com.foo.Other").unwrap(), "com.foo.Other");
}

#[test]
fn generate_with_reads_properties_through_context() {
    let world = World::new();
    let mut rules = Rules::new();
    rules.prepend(
        Rule::generate_with("com.foo.rebind.ImplGenerator")
            .when(Condition::when_type_assignable_to("com.foo.Service")),
    );

    assert_eq!(
        world.rebind(&rules, "gecko1_8", "com.foo.Service").unwrap(),
        "com.foo.ServiceImpl_gecko1_8"
    );
}

#[test]
fn generator_lookup_uses_the_resolver_of_each_pass() {
    let world = World::new();
    let mut rules = Rules::new();
    rules.prepend(Rule::generate_with("com.foo.rebind.ImplGenerator"));

    assert!(world.rebind(&rules, "safari", "com.foo.Base").is_ok());

    // A later pass with a fresh, empty resolver must not see the earlier generator.
    let props = StaticPropertyOracle::new(&world.props).with_selection("user.agent", "safari");
    let empty = GeneratorRegistry::new();
    let ctx = RebindContext::new(&props, &world.types, &empty);
    assert_eq!(
        rules.rebind(&ctx, "com.foo.Base"),
        Err(RebindError::GeneratorNotFound("com.foo.rebind.ImplGenerator".into()))
    );

    rules.dispose();
}

#[test]
fn stale_rule_does_not_block_later_rules() {
    let world = World::new();
    let mut rules = Rules::new();
    rules.push(Rule::replace_with("com.foo.Stale").when(Condition::when_type_assignable_to("com.gone.Api")));
    rules.push(Rule::replace_with("com.foo.Fresh").when(Condition::when_type_is("com.foo.Base")));

    assert_eq!(world.rebind(&rules, "safari", "com.foo.Base").unwrap(), "com.foo.Fresh");
}

#[test]
fn cached_oracle_returns_same_answer() {
    let world = World::new();
    let mut rules = Rules::new();
    rules.prepend(Rule::replace_with("com.foo.Impl").when(Condition::when_type_is("com.foo.Base")));

    let props = StaticPropertyOracle::new(&world.props);
    let ctx = RebindContext::new(&props, &world.types, &world.generators);
    let mut oracle = RebindOracle::new(&rules);

    let first = oracle.rebind(&ctx, "com.foo.Base").unwrap();
    let second = oracle.rebind(&ctx, "com.foo.Base").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rule_index, Some(0));
}
