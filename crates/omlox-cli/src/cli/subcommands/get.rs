use clap::Subcommand;
use uuid::Uuid;

/// Resource kinds accepted by `omlox get`.
#[derive(Clone, Debug, Subcommand)]
pub enum GetCommands {
    /// List trackables, or fetch one by ID.
    Trackables {
        id: Option<Uuid>,
        /// Print only the IDs of all trackables.
        #[arg(long, conflicts_with = "id")]
        ids: bool,
    },
    /// Fetch the last location of a trackable.
    Location { id: Uuid },
}
