//! # lens-scanner
//!
//! Produces [`Snapshot`](lens_core::entities::Snapshot)s of websites.
//!
//! [`Scanner`] is the interface the scan workflow depends on; [`HttpScanner`]
//! implements it with a single `reqwest` fetch. Browser-driven scanners that
//! also observe script-set cookies and local storage can implement the same
//! trait.

pub mod cookie;
pub mod hosts;
pub mod scanner;

mod error;
mod http;

pub use error::ScanError;
pub use scanner::{HttpScanner, Scanner, normalize_url};
