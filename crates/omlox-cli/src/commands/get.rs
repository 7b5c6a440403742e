use std::io::Write;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GetCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `omlox get`.
pub async fn handle(
    action: &GetCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let api = ctx.client.trackables();
    match action {
        GetCommands::Trackables { id: Some(id), .. } => {
            let trackable = api
                .get(&ctx.cancel, *id)
                .await
                .with_context(|| format!("failed to get trackable {id}"))?;
            output(out, &trackable, flags.format)
        }
        GetCommands::Trackables { ids: true, .. } => {
            let ids = api
                .ids(&ctx.cancel)
                .await
                .context("failed to list trackable ids")?;
            output(out, &ids, flags.format)
        }
        GetCommands::Trackables { .. } => {
            let trackables = api
                .list(&ctx.cancel)
                .await
                .context("failed to list trackables")?;
            output(out, &trackables, flags.format)
        }
        GetCommands::Location { id } => {
            let location = api
                .get_location(&ctx.cancel, *id)
                .await
                .with_context(|| format!("failed to get location of trackable {id}"))?;
            output(out, &location, flags.format)
        }
    }
}
