use std::io::Write;

use anyhow::Context;
use omlox_core::Trackable;

use crate::cli::subcommands::UpdateCommands;
use crate::commands::shared::input::load_inputs;
use crate::context::AppContext;

/// Handle `omlox update`.
pub async fn handle(
    action: &UpdateCommands,
    ctx: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        UpdateCommands::Trackables(input) => {
            let loader = load_inputs::<Trackable>(&input.files)?;
            update_trackables(loader.resources(), ctx, out).await
        }
    }
}

/// Replace each trackable under its own `id`, stopping at the first failure.
pub async fn update_trackables(
    trackables: &[Trackable],
    ctx: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let api = ctx.client.trackables();
    for trackable in trackables {
        api.update(&ctx.cancel, trackable, trackable.id)
            .await
            .with_context(|| {
                format!(
                    "failed to update trackable {} {}",
                    trackable.id, trackable.name
                )
            })?;
        writeln!(out, "updated: {} {}", trackable.id, trackable.name)?;
    }
    Ok(())
}
