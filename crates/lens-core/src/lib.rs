//! # lens-core
//!
//! Core types, status enums, and error types for CookieLens.
//!
//! This crate provides the foundational types shared across all CookieLens crates:
//! - Snapshot types produced by a scanner (cookies, local storage, third parties)
//! - Controls and the [`ControlSource`] interface the engine reads them through
//! - Verdicts, per-framework results, third-party risks, and the report envelope
//! - Status and risk enums with their serialized spellings
//! - Lenient serde helpers for scanner output
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lenient;
pub mod source;

pub use source::{ControlSource, SourceError};

/// Round a score to one decimal place.
#[must_use]
pub fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round_score;

    #[test]
    fn rounds_to_one_decimal() {
        assert!((round_score(66.666_666) - 66.7).abs() < f64::EPSILON);
        assert!((round_score(33.333_333) - 33.3).abs() < f64::EPSILON);
        assert!((round_score(100.0) - 100.0).abs() < f64::EPSILON);
        assert!(round_score(0.0).abs() < f64::EPSILON);
    }
}
