use std::io::Read;

use anyhow::Context;
use lens_core::entities::{Report, Snapshot};
use lens_engine::Aggregator;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EvaluateArgs;
use crate::context::AppContext;
use crate::output::output_report;

/// Handle `cookielens evaluate`.
pub fn handle(args: &EvaluateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = read_snapshot(&args.snapshot)?;
    let report = evaluate(ctx, &snapshot, &args.frameworks)?;
    output_report(&report, &report.compliance_analysis, flags.format)
}

fn evaluate(ctx: &AppContext, snapshot: &Snapshot, requested: &[String]) -> anyhow::Result<Report> {
    let frameworks = ctx.frameworks_or_default(requested);
    let aggregator = Aggregator::new(&ctx.catalog).with_classifier(ctx.classifier.clone());
    Ok(aggregator.aggregate(snapshot, Some(&frameworks))?)
}

/// Load a snapshot from `source`, a file path or `-` for stdin.
fn read_snapshot(source: &str) -> anyhow::Result<Snapshot> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read snapshot {source}"))?
    };
    Snapshot::from_json(&text).with_context(|| format!("failed to parse snapshot {source}"))
}
