use clap::{Args, Subcommand};

use crate::cli::subcommands::{CreateCommands, DeleteCommands, GetCommands, UpdateCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create resources in the hub.
    Create {
        #[command(subcommand)]
        resource: CreateCommands,
    },
    /// Replace resources in the hub.
    Update {
        #[command(subcommand)]
        resource: UpdateCommands,
    },
    /// Delete resources from the hub.
    Delete {
        #[command(subcommand)]
        resource: DeleteCommands,
    },
    /// Fetch resources from the hub.
    Get {
        #[command(subcommand)]
        resource: GetCommands,
    },
    /// Dump the JSON schema of a hub envelope.
    Schema(SchemaArgs),
}

/// Arguments for `omlox schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (trackable, location, geometry).
    pub name: String,
}
