use lens_core::SourceError;

/// Errors from the evaluation engine.
///
/// The engine has no failure modes of its own; only its collaborators can fail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("control source error: {0}")]
    ControlSource(#[from] SourceError),
}
