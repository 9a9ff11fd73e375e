use crate::cli::GlobalFlags;
use crate::cli::root_commands::FrameworksArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cookielens frameworks`.
pub fn handle(args: &FrameworksArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = (!args.frameworks.is_empty()).then_some(args.frameworks.as_slice());
    output(&ctx.catalog.frameworks(filter), flags.format)
}
