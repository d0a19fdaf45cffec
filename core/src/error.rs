// pipewrap/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipeError {
  #[error("Configuration error: no placement specified")]
  NoPlacement,

  #[error("Configuration error: too many arguments ({count}); expected at most an index and a name")]
  TooManyArguments { count: usize },

  #[error("Configuration error: ambiguous placement (index {index} and keyword '{name}' both given)")]
  AmbiguousPlacement { index: usize, name: String },

  #[error("Configuration error: selector argument {position} must be {expected}")]
  InvalidSelector { position: usize, expected: &'static str },

  #[error("Configuration error: cannot parse placement from '{input}'")]
  InvalidPlacement { input: String },

  /// Raised by a wrapped function that uses `PipeError` as its own error type.
  #[error("Error in wrapped function. Source: {source}")]
  FunctionError {
    #[source]
    source: AnyhowError,
  },
}

impl PipeError {
  /// True for every variant produced while building a wrapper, as opposed to
  /// failures coming out of the wrapped function.
  pub fn is_configuration(&self) -> bool {
    !matches!(self, PipeError::FunctionError { .. })
  }
}

impl From<AnyhowError> for PipeError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap an already-wrapped PipeError instead of nesting FunctionError(PipeError(..)).
    match err.downcast::<PipeError>() {
      Ok(pipe_err) => pipe_err,
      Err(source) => PipeError::FunctionError { source },
    }
  }
}

pub type PipeResult<T, E = PipeError> = std::result::Result<T, E>;
