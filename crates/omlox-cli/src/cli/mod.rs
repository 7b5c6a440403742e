use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `omlox` binary.
#[derive(Debug, Parser)]
#[command(name = "omlox", version, about = "omlox - manage trackables in an omlox hub")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Hub base URL (overrides `hub.url` from config and `OMLOX_HUB__URL`)
    #[arg(long, global = true)]
    pub hub_url: Option<String>,

    /// Bearer token for the hub (overrides `hub.token`)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format: json, raw
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            hub_url: self.hub_url.clone(),
            token: self.token.clone(),
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
