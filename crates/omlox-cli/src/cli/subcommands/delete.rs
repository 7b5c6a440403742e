use clap::Subcommand;
use uuid::Uuid;

/// Resource kinds accepted by `omlox delete`.
#[derive(Clone, Debug, Subcommand)]
pub enum DeleteCommands {
    /// Delete trackables by ID, or every trackable with `--all`.
    Trackables {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        ids: Vec<Uuid>,
        #[arg(long)]
        all: bool,
    },
}
