//! # omlox-core
//!
//! Domain types for the omlox hub client.
//!
//! - Resource envelopes for trackables and locations
//! - Enumerations with their lowercase wire values
//! - The GeoJSON geometry codec (points with optional elevation, polygons
//!   with holes)
//! - A batch loader that turns JSON documents into ordered resource lists
//! - Error types for the above

pub mod entities;
pub mod enums;
pub mod errors;
pub mod geometry;
pub mod loader;

pub use entities::{Location, Properties, Trackable};
pub use errors::{GeometryError, LoadError};
pub use geometry::{Coord, GeoJsonGeometry, Geometry, Point, Polygon, Ring};
pub use loader::Loader;
