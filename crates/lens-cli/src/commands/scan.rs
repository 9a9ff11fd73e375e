use anyhow::Context;
use lens_engine::Aggregator;
use lens_narrative::BedrockNarrator;
use lens_scanner::HttpScanner;
use lens_store::ReportStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::context::AppContext;
use crate::output::output_report;
use crate::pipeline::ScanPipeline;
use crate::progress::Spinner;

/// Handle `cookielens scan`.
pub async fn handle(args: &ScanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = &ctx.config;
    let frameworks = ctx.frameworks_or_default(&args.frameworks);

    let scanner = HttpScanner::new(&config.scanner).context("failed to build HTTP scanner")?;
    let aggregator = Aggregator::new(&ctx.catalog).with_classifier(ctx.classifier.clone());
    let mut pipeline = ScanPipeline::new(scanner, aggregator);

    if args.store {
        let store = ReportStore::from_config(&config.storage)
            .context("--store needs storage.bucket or storage.local_dir")?;
        pipeline = pipeline.with_store(store);
    }

    let narrate = !args.no_narrative && config.narrative.is_configured();
    if !args.no_narrative && !narrate {
        tracing::info!("narrative skipped: narrative.api_key is not set");
    }

    let spinner = Spinner::start(&format!("Scanning {}", args.url));
    let result = if narrate {
        let narrator =
            BedrockNarrator::new(&config.narrative).context("failed to build narrative client")?;
        pipeline
            .with_narrator(narrator)
            .run(&args.url, Some(&frameworks))
            .await
    } else {
        pipeline.run(&args.url, Some(&frameworks)).await
    };

    let report = match result {
        Ok(report) => {
            spinner.done(&format!(
                "Scanned {} (overall score {})",
                args.url, report.report.overall_summary.overall_score
            ));
            report
        }
        Err(err) => {
            spinner.fail("Scan failed");
            return Err(err).with_context(|| format!("failed to scan {}", args.url));
        }
    };

    output_report(&report, &report.report.compliance_analysis, flags.format)
}
