use std::fmt::Write as _;

use anyhow::{Context, Result};
use rebind_config::Module;
use rebind_property::Property;

use crate::cli::CheckArgs;

pub fn run(args: &CheckArgs) -> Result<()> {
    let module = Module::load(&args.module)
        .with_context(|| format!("failed to load module {}", args.module.display()))?;
    print!("{}", render(&module));
    module.unload();
    Ok(())
}

fn render(module: &Module) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "module {}", module.name());

    let _ = writeln!(out, "properties: {}", module.properties().len());
    for property in module.properties().iter() {
        match property {
            Property::Binding(binding) => {
                let defined: Vec<&str> = binding.defined_values().collect();
                let allowed: Vec<&str> = binding.allowed_values().collect();
                let _ = write!(
                    out,
                    "  binding {} defined=[{}] allowed=[{}]",
                    binding.name(),
                    defined.join(", "),
                    allowed.join(", ")
                );
                if let Some(fallback) = binding.fallback() {
                    let _ = write!(out, " fallback={fallback}");
                }
                out.push('\n');
            }
            Property::Configuration(config) => {
                let values: Vec<String> = config
                    .values()
                    .into_iter()
                    .map(|v| v.unwrap_or_else(|| "<unset>".to_string()))
                    .collect();
                let _ = writeln!(
                    out,
                    "  configuration {} [{}]{}",
                    config.name(),
                    values.join(", "),
                    if config.allows_multiple_values() { " multi-valued" } else { "" }
                );
            }
        }
    }

    let _ = writeln!(out, "types: {}", module.types().len());

    let _ = writeln!(out, "rules: {}", module.rules().len());
    for (index, rule) in module.rules().iter().enumerate() {
        let _ = writeln!(out, "  [{index}] {rule}");
    }

    let required: Vec<String> = module.rules().required_properties().into_iter().collect();
    let _ = writeln!(out, "required properties: [{}]", required.join(", "));
    out
}
