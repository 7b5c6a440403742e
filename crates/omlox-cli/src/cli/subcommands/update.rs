use clap::Subcommand;

use super::InputArgs;

/// Resource kinds accepted by `omlox update`.
#[derive(Clone, Debug, Subcommand)]
pub enum UpdateCommands {
    /// Replace trackables with the JSON arrays given, matched by `id`.
    Trackables(InputArgs),
}
