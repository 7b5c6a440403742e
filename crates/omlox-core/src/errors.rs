//! Error types raised by the core crate.
//!
//! Transport and HTTP-status errors live in `omlox-client`; these cover the
//! pieces that never touch the network.

use thiserror::Error;

/// Errors from decoding or constructing geometry values.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Coordinates do not describe a valid point or polygon.
    #[error("malformed geometry: {0}")]
    Malformed(String),

    /// A geometry of one kind was found where another was required.
    #[error("unexpected geometry kind: expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors from the batch resource loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input was not a JSON array of the declared resource type.
    #[error("failed to decode resources: {0}")]
    Decode(#[from] serde_json::Error),
}
