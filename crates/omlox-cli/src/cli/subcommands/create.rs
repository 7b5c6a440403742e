use clap::Subcommand;

use super::InputArgs;

/// Resource kinds accepted by `omlox create`.
#[derive(Clone, Debug, Subcommand)]
pub enum CreateCommands {
    /// Create trackables from JSON arrays.
    Trackables(InputArgs),
}
