use anyhow::Context;
use lens_schema::SchemaRegistry;
use lens_schema::registry::SCAN_REPORT;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `cookielens schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    if args.list {
        return output(&registry.list(), flags.format);
    }

    let name = args.name.as_deref().unwrap_or(SCAN_REPORT);
    let schema = registry.get(name).with_context(|| {
        format!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
