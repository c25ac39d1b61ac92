//! Typed errors for the rendering stage.

use thiserror::Error;

/// Failures while substituting the documentation model into the page
/// skeleton. Substitution is strict in both directions: the skeleton must
/// define every named point, and may not reference points we have no value
/// for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("page skeleton does not define the `{0}` substitution point")]
    MissingPlaceholder(&'static str),
    #[error("page skeleton references an unknown substitution point `{0}`")]
    UnknownPlaceholder(String),
}
