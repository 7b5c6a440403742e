//! # omlox-client
//!
//! Typed HTTP client for the omlox hub REST API.
//!
//! A single generic [`Client`] performs every request: it serializes the body,
//! races the exchange against a [`CancellationToken`], maps unexpected
//! statuses to [`ClientError`] variants and decodes the response. Resource
//! facades such as [`TrackablesApi`] only fix paths and expected statuses.
//!
//! ```no_run
//! use omlox_client::{CancellationToken, Client};
//!
//! # async fn demo() -> Result<(), omlox_client::ClientError> {
//! let client = Client::builder("https://hub.example.com/v2")
//!     .bearer_token("token")
//!     .build()?;
//! let cancel = CancellationToken::new();
//!
//! for trackable in client.trackables().list(&cancel).await? {
//!     println!("{} {}", trackable.id, trackable.name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http;
mod trackables;

pub use client::{Client, ClientBuilder, NO_BODY};
pub use error::{ClientError, StatusError};
pub use trackables::TrackablesApi;

pub use reqwest::{Method, StatusCode};
pub use tokio_util::sync::CancellationToken;
