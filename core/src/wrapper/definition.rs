// pipewrap/src/wrapper/definition.rs

//! Contains the `PipeWrapper<V, R, E>` struct, its named constructors, and
//! the normal and piped call paths.

use crate::core::args::CallArgs;
use crate::core::function::PipeFn;
use crate::core::pipeable::Pipeable;
use crate::core::placement::{Injection, Placement};
use std::fmt;
use std::sync::Arc;
use tracing::{event, Level};

/// Wraps exactly one function together with its placement.
///
/// - `V` is the argument value type.
/// - `R` is what the function returns on success.
/// - `E` is what the function fails with. It passes through every call unchanged.
///
/// A wrapper is immutable once built. Cloning it is cheap and shares the
/// underlying function.
pub struct PipeWrapper<V, R, E> {
  pub(crate) function: PipeFn<V, R, E>,
  pub(crate) placement: Placement,
}

impl<V, R, E> PipeWrapper<V, R, E> {
  /// Wraps `f` with an explicit placement.
  pub fn with_placement(
    f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static,
    placement: Placement,
  ) -> Self {
    Self::from_pipe_fn(Arc::new(f), placement)
  }

  /// Wraps an already type-erased function.
  pub fn from_pipe_fn(function: PipeFn<V, R, E>, placement: Placement) -> Self {
    event!(Level::DEBUG, %placement, "Pipe wrapper created.");
    Self { function, placement }
  }

  /// Piped values are inserted before the positional argument at `index`.
  pub fn by_position(f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static, index: usize) -> Self {
    Self::with_placement(f, Placement::Positional(index))
  }

  /// Piped values are stored under the keyword `name`.
  pub fn by_keyword<S: Into<String>>(f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static, name: S) -> Self {
    Self::with_placement(f, Placement::Keyword(name.into()))
  }

  /// Bare wrapping: piped values become the first positional argument.
  pub fn bare(f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static) -> Self {
    Self::by_position(f, 0)
  }

  /// Piped values are discarded and a piped call behaves like a normal call.
  pub fn unplaced(f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static) -> Self {
    Self::with_placement(f, Placement::None)
  }

  pub fn placement(&self) -> &Placement {
    &self.placement
  }

  /// Returns the wrapped function, shared with this wrapper.
  pub fn function(&self) -> PipeFn<V, R, E> {
    Arc::clone(&self.function)
  }

  /// Invokes the wrapped function with exactly `args`. Placement is not consulted.
  pub fn call(&self, args: CallArgs<V>) -> Result<R, E> {
    event!(
      Level::TRACE,
      positional = args.positional.len(),
      keyword = args.keyword.len(),
      "Normal call."
    );
    (self.function)(args)
  }

  /// Injects `piped` according to the placement, then invokes the wrapped function.
  pub fn pipe_call(&self, piped: V, mut args: CallArgs<V>) -> Result<R, E> {
    match self.placement.inject(piped, &mut args) {
      Injection::Inserted { clamped } => {
        event!(Level::TRACE, placement = %self.placement, clamped, positional = args.positional.len(), "Piped value inserted.");
      }
      Injection::Keyword { replaced } => {
        event!(Level::TRACE, placement = %self.placement, replaced, keyword = args.keyword.len(), "Piped value set as keyword.");
      }
      Injection::Discarded => {
        event!(Level::DEBUG, "Wrapper has no placement, piped value discarded.");
      }
    }
    (self.function)(args)
  }
}

impl<V, R, E> Pipeable<V> for PipeWrapper<V, R, E> {
  type Output = R;
  type Error = E;

  fn pipe_call(&self, piped: V, args: CallArgs<V>) -> Result<R, E> {
    PipeWrapper::pipe_call(self, piped, args)
  }
}

impl<V, R, E> Clone for PipeWrapper<V, R, E> {
  fn clone(&self) -> Self {
    Self {
      function: Arc::clone(&self.function),
      placement: self.placement.clone(),
    }
  }
}

// The wrapped closure has no Debug; show the placement only.
impl<V, R, E> fmt::Debug for PipeWrapper<V, R, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PipeWrapper")
      .field("placement", &self.placement)
      .finish_non_exhaustive()
  }
}
