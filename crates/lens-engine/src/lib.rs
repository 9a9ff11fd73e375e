//! # lens-engine
//!
//! Compliance evaluation for CookieLens.
//!
//! - [`classifier`]: third-party domain to tracker category and risk
//! - [`checks`]: the five control checkers
//! - [`family`]: control id to checker dispatch, with fixed priority
//! - [`evaluator`]: per-framework scoring and status
//! - [`aggregator`]: multi-framework report with tracker risks and summary
//!
//! Everything here is pure computation over a borrowed
//! [`Snapshot`](lens_core::entities::Snapshot). The only I/O happens inside
//! the injected [`ControlSource`](lens_core::ControlSource).

pub mod aggregator;
pub mod checks;
pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod family;

pub use aggregator::{Aggregator, DEFAULT_FRAMEWORKS};
pub use classifier::{TrackerClassifier, TrackerRule};
pub use error::EngineError;
pub use evaluator::evaluate;
pub use family::{ControlFamily, Severity};
