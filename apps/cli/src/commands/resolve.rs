use std::sync::Arc;

use anyhow::{Context, Result};
use rebind_config::Module;
use rebind_rules::{Generator, GeneratorError, GeneratorRegistry, GeneratorResolver, Rebind, RebindContext};

use crate::cli::ResolveArgs;

/// Answers `<type>_Generated` for any request.
struct StubGenerator;

impl Generator for StubGenerator {
    fn generate(&self, _ctx: &RebindContext<'_>, type_name: &str) -> Result<String, GeneratorError> {
        Ok(format!("{type_name}_Generated"))
    }
}

pub fn run(args: &ResolveArgs) -> Result<()> {
    let module = Module::load(&args.module)
        .with_context(|| format!("failed to load module {}", args.module.display()))?;

    let mut generators = GeneratorRegistry::new();
    for name in &args.stub_generators {
        generators.register_or_replace(name.clone(), || Arc::new(StubGenerator));
    }

    let rebind = resolve_and_unload(module, &generators, args)?;

    match rebind.rule_index {
        Some(index) => tracing::debug!(rule = index, result = %rebind.type_name, "rule applied"),
        None => tracing::debug!(result = %rebind.type_name, "no rule applied"),
    }
    println!("{}", rebind.type_name);
    Ok(())
}

/// Resolve the requested type, then unload the module whether or not
/// resolution succeeded.
fn resolve_and_unload(
    module: Module,
    generators: &dyn GeneratorResolver,
    args: &ResolveArgs,
) -> Result<Rebind> {
    let outcome = resolve(&module, generators, args);
    module.unload();
    outcome
}

fn resolve(module: &Module, generators: &dyn GeneratorResolver, args: &ResolveArgs) -> Result<Rebind> {
    let mut oracle = module.property_oracle();
    for (name, value) in &args.selections {
        if !module.properties().contains(name) {
            anyhow::bail!("module {} declares no property '{name}'", module.name());
        }
        oracle.select(name.clone(), value.clone());
    }

    module
        .rebind(&oracle, generators, &args.type_name)
        .with_context(|| format!("deferred binding of '{}' failed", args.type_name))
}
