//! Enumerations shared by the hub resources.
//!
//! All enums serialize in lowercase, matching the hub's wire values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TrackableType
// ---------------------------------------------------------------------------

/// Kind of a trackable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrackableType {
    /// Position is derived from its location providers.
    Omlox,
    /// Position is set directly, without a location provider.
    Virtual,
}

impl TrackableType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Omlox => "omlox",
            Self::Virtual => "virtual",
        }
    }
}

impl fmt::Display for TrackableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LocationProviderType
// ---------------------------------------------------------------------------

/// Technology that produced a location fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationProviderType {
    Uwb,
    Gps,
    Wifi,
    Rfid,
    Ibeacon,
    Virtual,
    Unknown,
}

impl LocationProviderType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uwb => "uwb",
            Self::Gps => "gps",
            Self::Wifi => "wifi",
            Self::Rfid => "rfid",
            Self::Ibeacon => "ibeacon",
            Self::Virtual => "virtual",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LocationProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ElevationRef
// ---------------------------------------------------------------------------

/// Reference the elevation of a location is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElevationRef {
    Floor,
    Wgs84,
}

impl ElevationRef {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wgs84 => "wgs84",
        }
    }
}

impl fmt::Display for ElevationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_value() {
        for kind in [TrackableType::Omlox, TrackableType::Virtual] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{kind}\""));
        }
        for provider in [
            LocationProviderType::Uwb,
            LocationProviderType::Gps,
            LocationProviderType::Wifi,
            LocationProviderType::Rfid,
            LocationProviderType::Ibeacon,
            LocationProviderType::Virtual,
            LocationProviderType::Unknown,
        ] {
            let wire = serde_json::to_string(&provider).unwrap();
            assert_eq!(wire, format!("\"{provider}\""));
        }
        assert_eq!(
            serde_json::to_string(&ElevationRef::Wgs84).unwrap(),
            "\"wgs84\""
        );
    }

    #[test]
    fn unknown_trackable_type_is_rejected() {
        assert!(serde_json::from_str::<TrackableType>("\"drone\"").is_err());
    }
}
