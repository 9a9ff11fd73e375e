//! # lens-catalog
//!
//! Compliance frameworks and their controls.
//!
//! [`Catalog::builtin`] ships GDPR, CCPA and SOC 2. Additional or replacement
//! frameworks can be loaded from TOML with [`Catalog::load`] and overlaid with
//! [`Catalog::merge`]. A [`Catalog`] is a [`ControlSource`](lens_core::ControlSource).

pub mod builtin;
pub mod catalog;
pub mod error;

pub use catalog::{Catalog, Framework};
pub use error::CatalogError;
