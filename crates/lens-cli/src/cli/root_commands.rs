use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan a live URL and evaluate it against compliance frameworks.
    Scan(ScanArgs),
    /// Evaluate a saved snapshot document without network access.
    Evaluate(EvaluateArgs),
    /// List known compliance frameworks.
    Frameworks(FrameworksArgs),
    /// List the controls of one framework.
    Controls(ControlsArgs),
    /// Classify third-party domains as trackers.
    Classify(ClassifyArgs),
    /// Print the JSON Schema of an output document.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Page to scan. A missing scheme defaults to https.
    pub url: String,

    /// Framework to evaluate (repeatable). Defaults to `general.default_frameworks`.
    #[arg(short = 'F', long = "framework")]
    pub frameworks: Vec<String>,

    /// Skip the generated risk narrative.
    #[arg(long)]
    pub no_narrative: bool,

    /// Persist the report to the configured storage.
    #[arg(long)]
    pub store: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EvaluateArgs {
    /// Snapshot JSON file, or `-` for stdin.
    pub snapshot: String,

    /// Framework to evaluate (repeatable). Defaults to `general.default_frameworks`.
    #[arg(short = 'F', long = "framework")]
    pub frameworks: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FrameworksArgs {
    /// Only list these framework ids (repeatable).
    #[arg(short = 'F', long = "framework")]
    pub frameworks: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ControlsArgs {
    /// Framework id, case-insensitive.
    pub framework: String,
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Domains to classify.
    #[arg(required = true)]
    pub domains: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document name. Defaults to the scan report.
    pub name: Option<String>,

    /// List available document names instead.
    #[arg(long, conflicts_with = "name")]
    pub list: bool,
}
