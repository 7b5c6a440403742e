//! Trackables facade.
//!
//! Thin wrappers over [`Client`]: each operation fixes the method, the path
//! under `/trackables` and the expected status, and passes everything else
//! through untouched.

use omlox_core::entities::{Location, Trackable};
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::client::{Client, NO_BODY, decode_list};
use crate::error::ClientError;

const COLLECTION: &str = "/trackables";

fn item_path(id: Uuid) -> String {
    format!("{COLLECTION}/{id}")
}

/// Operations on the hub's trackables collection.
#[derive(Debug, Clone, Copy)]
pub struct TrackablesApi<'a> {
    client: &'a Client,
}

impl<'a> TrackablesApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All trackables with their full bodies (`GET /trackables/summary`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on cancellation, transport failure, a status
    /// other than 200, or an undecodable body.
    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<Trackable>, ClientError> {
        self.client
            .request_with(
                cancel,
                Method::GET,
                &format!("{COLLECTION}/summary"),
                NO_BODY,
                &[StatusCode::OK],
                decode_list,
            )
            .await
    }

    /// Identities of all trackables (`GET /trackables`).
    ///
    /// # Errors
    ///
    /// Same as [`list`](Self::list).
    pub async fn ids(&self, cancel: &CancellationToken) -> Result<Vec<Uuid>, ClientError> {
        self.client
            .request_with(
                cancel,
                Method::GET,
                COLLECTION,
                NO_BODY,
                &[StatusCode::OK],
                decode_list,
            )
            .await
    }

    /// Create a trackable (`POST /trackables`) and return the hub's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] when the hub rejects the body, and
    /// any other [`ClientError`] on cancellation, transport failure, a status
    /// other than 201, or an undecodable body.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        trackable: &Trackable,
    ) -> Result<Trackable, ClientError> {
        self.client
            .request_json(
                cancel,
                Method::POST,
                COLLECTION,
                Some(trackable),
                &[StatusCode::CREATED],
            )
            .await
    }

    /// Fetch one trackable (`GET /trackables/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id.
    pub async fn get(&self, cancel: &CancellationToken, id: Uuid) -> Result<Trackable, ClientError> {
        self.client
            .request_json(
                cancel,
                Method::GET,
                &item_path(id),
                NO_BODY,
                &[StatusCode::OK],
            )
            .await
    }

    /// Replace the trackable stored under `id` (`PUT /trackables/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id and
    /// [`ClientError::Invalid`] when the hub rejects the body.
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        trackable: &Trackable,
        id: Uuid,
    ) -> Result<(), ClientError> {
        self.client
            .request_empty(
                cancel,
                Method::PUT,
                &item_path(id),
                Some(trackable),
                &[StatusCode::OK],
            )
            .await
    }

    /// Delete one trackable (`DELETE /trackables/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id.
    pub async fn delete(&self, cancel: &CancellationToken, id: Uuid) -> Result<(), ClientError> {
        self.client
            .request_empty(
                cancel,
                Method::DELETE,
                &item_path(id),
                NO_BODY,
                &[StatusCode::OK],
            )
            .await
    }

    /// Delete every trackable (`DELETE /trackables`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on cancellation, transport failure or a status
    /// other than 200.
    pub async fn delete_all(&self, cancel: &CancellationToken) -> Result<(), ClientError> {
        self.client
            .request_empty(
                cancel,
                Method::DELETE,
                COLLECTION,
                NO_BODY,
                &[StatusCode::OK],
            )
            .await
    }

    /// Last known location of a trackable (`GET /trackables/{id}/location`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] both when the trackable is unknown
    /// and when it has no location yet; the hub answers 404 in both cases.
    /// Inspect [`StatusError::payload`](crate::StatusError::payload) if the
    /// hub sends a distinguishing body.
    pub async fn get_location(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> Result<Location, ClientError> {
        self.client
            .request_json(
                cancel,
                Method::GET,
                &format!("{}/location", item_path(id)),
                NO_BODY,
                &[StatusCode::OK],
            )
            .await
    }
}
