use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Properties;
use crate::enums::TrackableType;
use crate::geometry::Geometry;

/// A tracked entity (asset, person, vehicle) as stored by the hub.
///
/// Every optional field is omitted from the wire when unset, so an update
/// built from a partial document never overwrites hub-side values with
/// `null`. A nil `id` counts as unset and lets the hub assign one on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Trackable {
    #[serde(default, skip_serializing_if = "Uuid::is_nil")]
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TrackableType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Height of the geometry above its base, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrusion: Option<f64>,
    /// Identifiers of the location providers attached to this trackable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_providers: Vec<String>,
    /// Milliseconds before a fence event times out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fence_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Free-form application data; the hub stores it untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Trackable {
    /// A trackable with identity, kind and name set and everything else unset.
    #[must_use]
    pub fn new(id: Uuid, kind: TrackableType, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            geometry: None,
            extrusion: None,
            location_providers: Vec::new(),
            fence_timeout: None,
            exit_tolerance: None,
            tolerance_timeout: None,
            exit_delay: None,
            radius: None,
            properties: None,
        }
    }
}
