use thiserror::Error;

/// Collaborator failures that abort an import before any element is
/// converted. Per-element conversion misses are not errors; they are
/// reported through boolean returns and the unknown-reference list.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("selection provider failed: {0}")]
    Selection(String),
    #[error("identifier generation failed: {0}")]
    IdGeneration(String),
    #[error("element target does not resolve to a submodel or collection")]
    InvalidTarget,
}
