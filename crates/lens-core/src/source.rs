//! The interface the engine reads framework controls through.

use thiserror::Error;

use crate::entities::Control;

/// Supplies the controls of a compliance framework.
///
/// Implementations may be static tables or external catalogs. The engine
/// calls [`ControlSource::controls`] once per requested framework.
pub trait ControlSource: Send + Sync {
    /// Controls of `framework_id`.
    ///
    /// `Ok(None)` means the framework is unknown to this source. `Ok(Some(vec![]))`
    /// means the framework is known but has nothing to evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source itself is unavailable.
    fn controls(&self, framework_id: &str) -> Result<Option<Vec<Control>>, SourceError>;
}

impl<T: ControlSource + ?Sized> ControlSource for &T {
    fn controls(&self, framework_id: &str) -> Result<Option<Vec<Control>>, SourceError> {
        (**self).controls(framework_id)
    }
}

/// Failure of a control source to answer.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing catalog could not be reached or read.
    #[error("control source unavailable for framework '{framework}': {reason}")]
    Unavailable { framework: String, reason: String },

    /// Catch-all for source-specific errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
