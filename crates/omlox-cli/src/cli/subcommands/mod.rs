mod create;
mod delete;
mod get;
mod update;

pub use create::CreateCommands;
pub use delete::DeleteCommands;
pub use get::GetCommands;
pub use update::UpdateCommands;

use std::path::PathBuf;

use clap::Args;

/// JSON inputs for batch mutations.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// File holding a JSON array of resources. Repeatable; stdin when omitted.
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,
}
