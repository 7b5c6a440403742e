use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Properties;
use crate::enums::{ElevationRef, LocationProviderType};
use crate::geometry::Point;

/// A position report from a location provider.
///
/// `position` is 2D unless the provider reported an elevation. Timestamps are
/// UTC and absent when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub position: Point,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    pub provider_type: LocationProviderType,
    pub provider_id: String,
    /// Trackables this location was reported for, in hub order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trackables: Vec<Uuid>,
    /// When the raw fix was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_generated: Option<DateTime<Utc>>,
    /// When the fix was transmitted to the hub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_sent: Option<DateTime<Utc>>,
    /// Coordinate reference system, e.g. `local` or `EPSG:4326`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated: Option<bool>,
    /// Horizontal accuracy in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnetic_heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_ref: Option<ElevationRef>,
    /// Meters per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Degrees clockwise from north.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Location {
    /// A location with the required fields set and everything else unset.
    #[must_use]
    pub fn new(
        position: Point,
        provider_type: LocationProviderType,
        provider_id: impl Into<String>,
    ) -> Self {
        Self {
            position,
            source: String::new(),
            provider_type,
            provider_id: provider_id.into(),
            trackables: Vec::new(),
            timestamp_generated: None,
            timestamp_sent: None,
            crs: None,
            associated: None,
            accuracy: None,
            floor: None,
            true_heading: None,
            magnetic_heading: None,
            heading_accuracy: None,
            elevation_ref: None,
            speed: None,
            course: None,
            properties: None,
        }
    }
}
