use std::io::Write;

use anyhow::Context;
use omlox_core::Trackable;

use crate::cli::subcommands::CreateCommands;
use crate::commands::shared::input::load_inputs;
use crate::context::AppContext;

/// Handle `omlox create`.
pub async fn handle(
    action: &CreateCommands,
    ctx: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        CreateCommands::Trackables(input) => {
            let loader = load_inputs::<Trackable>(&input.files)?;
            create_trackables(loader.resources(), ctx, out).await
        }
    }
}

/// Create trackables one by one, stopping at the first failure.
pub async fn create_trackables(
    trackables: &[Trackable],
    ctx: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let api = ctx.client.trackables();
    for trackable in trackables {
        let created = api
            .create(&ctx.cancel, trackable)
            .await
            .with_context(|| {
                format!(
                    "failed to create trackable {} {}",
                    trackable.id, trackable.name
                )
            })?;
        writeln!(out, "created: {} {}", created.id, created.name)?;
    }
    Ok(())
}
