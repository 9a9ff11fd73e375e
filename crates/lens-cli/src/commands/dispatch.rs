use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => commands::scan::handle(&args, ctx, flags).await,
        Commands::Evaluate(args) => commands::evaluate::handle(&args, ctx, flags),
        Commands::Frameworks(args) => commands::frameworks::handle(&args, ctx, flags),
        Commands::Controls(args) => commands::controls::handle(&args, ctx, flags),
        Commands::Classify(args) => commands::classify::handle(&args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is handled before configuration loads"),
    }
}
