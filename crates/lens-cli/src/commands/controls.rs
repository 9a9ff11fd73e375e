use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ControlsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cookielens controls`.
pub fn handle(args: &ControlsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(framework) = ctx.catalog.get(&args.framework) else {
        let known = ctx.catalog.iter().map(|f| f.id.as_str()).collect::<Vec<_>>();
        bail!(
            "unknown framework '{}' (known: {})",
            args.framework,
            known.join(", ")
        );
    };
    output(&framework.controls, flags.format)
}
