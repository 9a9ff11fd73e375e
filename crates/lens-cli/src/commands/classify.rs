use lens_core::entities::ThirdPartyRisk;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cookielens classify`.
pub fn handle(args: &ClassifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let risks: Vec<ThirdPartyRisk> = args
        .domains
        .iter()
        .map(|domain| ctx.classifier.assess(domain.trim()))
        .collect();
    output(&risks, flags.format)
}
