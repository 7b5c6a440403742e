//! # omlox-schema
//!
//! JSON Schemas for the hub envelope types, generated from `omlox-core` with
//! `schemars` and checked with `jsonschema`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
