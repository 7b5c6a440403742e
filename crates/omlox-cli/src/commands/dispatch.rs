use std::io::Write;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Create { resource } => commands::create::handle(&resource, ctx, out).await,
        Commands::Update { resource } => commands::update::handle(&resource, ctx, out).await,
        Commands::Delete { resource } => commands::delete::handle(&resource, ctx, out).await,
        Commands::Get { resource } => commands::get::handle(&resource, ctx, flags, out).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags, out),
    }
}
