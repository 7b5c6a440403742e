use anyhow::Context;
use omlox_config::OmloxConfig;

use crate::cli::GlobalFlags;

/// Load layered config, apply command-line overrides and check the hub section.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<OmloxConfig> {
    let mut config = OmloxConfig::load_with_dotenv().context("failed to load omlox config")?;
    apply_overrides(&mut config, flags);

    config.hub.validate().context(
        "hub is not reachable with current settings; pass --hub-url or set OMLOX_HUB__URL",
    )?;
    Ok(config)
}

fn apply_overrides(config: &mut OmloxConfig, flags: &GlobalFlags) {
    if let Some(url) = &flags.hub_url {
        config.hub.url.clone_from(url);
    }
    if let Some(token) = &flags.token {
        config.hub.token.clone_from(token);
    }
}
