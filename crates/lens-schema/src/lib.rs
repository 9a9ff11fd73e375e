//! # lens-schema
//!
//! JSON Schemas for every document CookieLens reads or writes.
//!
//! Types are defined in `lens-core` with `#[derive(JsonSchema)]`; this crate
//! collects them into a [`SchemaRegistry`] for export (`cookielens schema`)
//! and for validating documents produced by other tools.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
