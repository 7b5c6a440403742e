//! Spatial values and their GeoJSON interchange form.
//!
//! [`Point`], [`Polygon`] and [`Geometry`] are plain value types. On the wire
//! they all go through [`GeoJsonGeometry`], the `type` + `coordinates` shape
//! the hub speaks, so serde and the explicit [`encode`]/[`decode`] pair share
//! one validation path.
//!
//! ```text
//! Point (2D)  <->  {"type":"Point","coordinates":[x, y]}
//! Point (3D)  <->  {"type":"Point","coordinates":[x, y, z]}
//! Polygon     <->  {"type":"Polygon","coordinates":[exterior, hole, ...]}
//! ```

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Minimum number of positions in a closed linear ring (a triangle plus the
/// repeated first position).
pub const MIN_RING_POSITIONS: usize = 4;

// ---------------------------------------------------------------------------
// Coord / Point
// ---------------------------------------------------------------------------

/// A planar position. Ring vertices are always 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point with optional elevation.
///
/// `z == None` encodes as a two-element coordinate array, `Some(_)` as three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonGeometry", into = "GeoJsonGeometry")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Point {
    /// A 2D point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// A 3D point carrying an elevation.
    #[must_use]
    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// The planar part of this point.
    #[must_use]
    pub const fn xy(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    #[must_use]
    pub const fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    fn to_position(self) -> Vec<f64> {
        match self.z {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }

    fn from_position(position: &[f64]) -> Result<Self, GeometryError> {
        match *position {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::with_z(x, y, z)),
            _ => Err(GeometryError::Malformed(format!(
                "point position must have 2 or 3 coordinates, got {}",
                position.len()
            ))),
        }
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self::new(coord.x, coord.y)
    }
}

// ---------------------------------------------------------------------------
// Ring / Polygon
// ---------------------------------------------------------------------------

/// A closed linear ring: at least [`MIN_RING_POSITIONS`] positions, the last
/// equal to the first.
///
/// The positions are private so every `Ring` in existence is valid, which is
/// what lets [`encode`] stay infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(Vec<Coord>);

impl Ring {
    /// Build a ring from positions that are already explicitly closed.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Malformed`] if there are fewer than
    /// [`MIN_RING_POSITIONS`] positions or the ring is not closed.
    pub fn new(positions: Vec<Coord>) -> Result<Self, GeometryError> {
        if positions.len() < MIN_RING_POSITIONS {
            return Err(GeometryError::Malformed(format!(
                "ring must have at least {MIN_RING_POSITIONS} positions, got {}",
                positions.len()
            )));
        }
        if positions.first() != positions.last() {
            return Err(GeometryError::Malformed(
                "ring is not closed (first position differs from last)".to_string(),
            ));
        }
        Ok(Self(positions))
    }

    /// Build a ring, appending the first position when the input is open.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Malformed`] if the closed ring would still
    /// have fewer than [`MIN_RING_POSITIONS`] positions.
    pub fn closing(mut positions: Vec<Coord>) -> Result<Self, GeometryError> {
        if let Some(&first) = positions.first()
            && positions.last() != Some(&first)
        {
            positions.push(first);
        }
        Self::new(positions)
    }

    #[must_use]
    pub fn positions(&self) -> &[Coord] {
        &self.0
    }

    fn to_coordinates(&self) -> Vec<Vec<f64>> {
        self.0.iter().map(|c| vec![c.x, c.y]).collect()
    }

    fn from_coordinates(ring: &[Vec<f64>]) -> Result<Self, GeometryError> {
        let positions = ring
            .iter()
            .map(|position| match position.as_slice() {
                [x, y] => Ok(Coord::new(*x, *y)),
                other => Err(GeometryError::Malformed(format!(
                    "polygon position must have 2 coordinates, got {}",
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(positions)
    }
}

/// A polygon: one exterior ring plus zero or more holes, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonGeometry", into = "GeoJsonGeometry")]
pub struct Polygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    #[must_use]
    pub const fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    fn to_coordinates(&self) -> Vec<Vec<Vec<f64>>> {
        std::iter::once(&self.exterior)
            .chain(&self.holes)
            .map(Ring::to_coordinates)
            .collect()
    }

    fn from_coordinates(rings: &[Vec<Vec<f64>>]) -> Result<Self, GeometryError> {
        let (exterior, holes) = rings
            .split_first()
            .ok_or_else(|| GeometryError::Malformed("polygon has no exterior ring".to_string()))?;
        Ok(Self {
            exterior: Ring::from_coordinates(exterior)?,
            holes: holes
                .iter()
                .map(|hole| Ring::from_coordinates(hole))
                .collect::<Result<_, _>>()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Any geometry a trackable can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonGeometry", into = "GeoJsonGeometry")]
pub enum Geometry {
    Point(Point),
    Polygon(Polygon),
}

impl Geometry {
    /// GeoJSON type name of this geometry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::Polygon(_) => "Polygon",
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

// ---------------------------------------------------------------------------
// Interchange form
// ---------------------------------------------------------------------------

/// GeoJSON geometry object as it appears on the wire.
///
/// Members other than `type` and `coordinates` (e.g. `bbox`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point { coordinates: Vec<f64> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
}

/// Encode a geometry into its interchange form. Never fails: every
/// constructible [`Geometry`] is representable.
#[must_use]
pub fn encode(geometry: &Geometry) -> GeoJsonGeometry {
    match geometry {
        Geometry::Point(point) => GeoJsonGeometry::from(*point),
        Geometry::Polygon(polygon) => GeoJsonGeometry::from(polygon),
    }
}

/// Decode an interchange geometry, validating point arity and ring closure.
///
/// # Errors
///
/// Returns [`GeometryError::Malformed`] for a point with other than 2 or 3
/// coordinates, a polygon without an exterior ring, a ring with fewer than
/// [`MIN_RING_POSITIONS`] positions, or a ring that is not explicitly closed.
pub fn decode(value: &GeoJsonGeometry) -> Result<Geometry, GeometryError> {
    match value {
        GeoJsonGeometry::Point { coordinates } => {
            Point::from_position(coordinates).map(Geometry::Point)
        }
        GeoJsonGeometry::Polygon { coordinates } => {
            Polygon::from_coordinates(coordinates).map(Geometry::Polygon)
        }
    }
}

impl From<Point> for GeoJsonGeometry {
    fn from(point: Point) -> Self {
        Self::Point {
            coordinates: point.to_position(),
        }
    }
}

impl From<&Polygon> for GeoJsonGeometry {
    fn from(polygon: &Polygon) -> Self {
        Self::Polygon {
            coordinates: polygon.to_coordinates(),
        }
    }
}

impl From<Polygon> for GeoJsonGeometry {
    fn from(polygon: Polygon) -> Self {
        Self::from(&polygon)
    }
}

impl From<Geometry> for GeoJsonGeometry {
    fn from(geometry: Geometry) -> Self {
        encode(&geometry)
    }
}

impl TryFrom<GeoJsonGeometry> for Geometry {
    type Error = GeometryError;

    fn try_from(value: GeoJsonGeometry) -> Result<Self, Self::Error> {
        decode(&value)
    }
}

impl TryFrom<GeoJsonGeometry> for Point {
    type Error = GeometryError;

    fn try_from(value: GeoJsonGeometry) -> Result<Self, Self::Error> {
        match decode(&value)? {
            Geometry::Point(point) => Ok(point),
            other => Err(GeometryError::UnexpectedKind {
                expected: "Point",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<GeoJsonGeometry> for Polygon {
    type Error = GeometryError;

    fn try_from(value: GeoJsonGeometry) -> Result<Self, Self::Error> {
        match decode(&value)? {
            Geometry::Polygon(polygon) => Ok(polygon),
            other => Err(GeometryError::UnexpectedKind {
                expected: "Polygon",
                found: other.kind(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON Schema
// ---------------------------------------------------------------------------

impl JsonSchema for Point {
    fn schema_name() -> Cow<'static, str> {
        "Point".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "properties": {
                "type": { "const": "Point" },
                "coordinates": {
                    "type": "array",
                    "items": { "type": "number" },
                    "minItems": 2,
                    "maxItems": 3
                }
            },
            "required": ["type", "coordinates"]
        })
    }
}

impl JsonSchema for Polygon {
    fn schema_name() -> Cow<'static, str> {
        "Polygon".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "properties": {
                "type": { "const": "Polygon" },
                "coordinates": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "array",
                        "minItems": MIN_RING_POSITIONS,
                        "items": {
                            "type": "array",
                            "items": { "type": "number" },
                            "minItems": 2,
                            "maxItems": 2
                        }
                    }
                }
            },
            "required": ["type", "coordinates"]
        })
    }
}

impl JsonSchema for Geometry {
    fn schema_name() -> Cow<'static, str> {
        "Geometry".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let point = generator.subschema_for::<Point>();
        let polygon = generator.subschema_for::<Polygon>();
        json_schema!({
            "oneOf": [point, polygon]
        })
    }
}
