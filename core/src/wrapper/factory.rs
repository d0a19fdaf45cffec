// pipewrap/src/wrapper/factory.rs

//! Contains `WrapperFactory` and the `make_pipe_wrapper` selector dispatch.
//!
//! Typed callers should prefer the named constructors on `PipeWrapper` or
//! `WrapperFactory`. `make_pipe_wrapper` exists for selectors assembled at
//! runtime, where the number and kind of arguments is only known as data.

use crate::core::args::CallArgs;
use crate::core::function::PipeFn;
use crate::core::placement::Placement;
use crate::error::{PipeError, PipeResult};
use crate::wrapper::definition::PipeWrapper;
use std::fmt;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// A placement waiting for a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperFactory {
  placement: Placement,
}

impl WrapperFactory {
  pub fn new(placement: Placement) -> Self {
    Self { placement }
  }

  pub fn positional(index: usize) -> Self {
    Self::new(Placement::Positional(index))
  }

  pub fn keyword<S: Into<String>>(name: S) -> Self {
    Self::new(Placement::Keyword(name.into()))
  }

  /// Two-value form. Fails with `AmbiguousPlacement` if both are set.
  pub fn from_parts(index: Option<usize>, name: Option<String>) -> PipeResult<Self> {
    Placement::from_parts(index, name).map(Self::new)
  }

  pub fn placement(&self) -> &Placement {
    &self.placement
  }

  /// Wraps `f` with this factory's placement. A factory can wrap any number of functions.
  pub fn wrap<V, R, E>(&self, f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static) -> PipeWrapper<V, R, E> {
    PipeWrapper::with_placement(f, self.placement.clone())
  }

  pub fn wrap_pipe_fn<V, R, E>(&self, function: PipeFn<V, R, E>) -> PipeWrapper<V, R, E> {
    PipeWrapper::from_pipe_fn(function, self.placement.clone())
  }
}

impl From<Placement> for WrapperFactory {
  fn from(placement: Placement) -> Self {
    Self::new(placement)
  }
}

/// One argument of a runtime-assembled selector.
pub enum SelectorArg<V, R, E> {
  Index(usize),
  Name(String),
  /// An explicitly absent index or name.
  Null,
  /// A function to wrap directly (bare wrapping).
  Function(PipeFn<V, R, E>),
}

impl<V, R, E> SelectorArg<V, R, E> {
  pub fn name<S: Into<String>>(name: S) -> Self {
    SelectorArg::Name(name.into())
  }

  pub fn function(f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static) -> Self {
    SelectorArg::Function(Arc::new(f))
  }

  fn kind(&self) -> &'static str {
    match self {
      SelectorArg::Index(_) => "index",
      SelectorArg::Name(_) => "name",
      SelectorArg::Null => "null",
      SelectorArg::Function(_) => "function",
    }
  }
}

impl<V, R, E> fmt::Debug for SelectorArg<V, R, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SelectorArg::Index(index) => f.debug_tuple("Index").field(index).finish(),
      SelectorArg::Name(name) => f.debug_tuple("Name").field(name).finish(),
      SelectorArg::Null => f.write_str("Null"),
      SelectorArg::Function(_) => f.write_str("Function(..)"),
    }
  }
}

/// Result of `make_pipe_wrapper`: a finished wrapper for bare wrapping,
/// otherwise a factory still waiting for its function.
pub enum Wrapped<V, R, E> {
  Wrapper(PipeWrapper<V, R, E>),
  Factory(WrapperFactory),
}

// By hand so that V, R and E need no Debug bound.
impl<V, R, E> fmt::Debug for Wrapped<V, R, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Wrapped::Wrapper(wrapper) => f.debug_tuple("Wrapper").field(wrapper).finish(),
      Wrapped::Factory(factory) => f.debug_tuple("Factory").field(factory).finish(),
    }
  }
}

impl<V, R, E> Wrapped<V, R, E> {
  pub fn into_wrapper(self) -> Option<PipeWrapper<V, R, E>> {
    match self {
      Wrapped::Wrapper(wrapper) => Some(wrapper),
      Wrapped::Factory(_) => None,
    }
  }

  pub fn into_factory(self) -> Option<WrapperFactory> {
    match self {
      Wrapped::Factory(factory) => Some(factory),
      Wrapped::Wrapper(_) => None,
    }
  }
}

/// Dispatches on the number and kind of selector arguments.
///
/// - no arguments: `NoPlacement`
/// - one index / name / null: a factory with that placement
/// - one function: that function wrapped at position 0
/// - index-or-null, name-or-null: a factory; both set is `AmbiguousPlacement`
/// - more than two: `TooManyArguments`
#[instrument(name = "make_pipe_wrapper", skip_all, fields(arg_count = args.len()), err(Display))]
pub fn make_pipe_wrapper<V, R, E>(args: Vec<SelectorArg<V, R, E>>) -> PipeResult<Wrapped<V, R, E>> {
  let count = args.len();
  let mut args = args.into_iter();

  match (args.next(), args.next(), count) {
    (None, _, _) => Err(PipeError::NoPlacement),
    (Some(only), None, _) => Ok(match only {
      SelectorArg::Function(function) => Wrapped::Wrapper(PipeWrapper::from_pipe_fn(function, Placement::Positional(0))),
      SelectorArg::Index(index) => Wrapped::Factory(WrapperFactory::positional(index)),
      SelectorArg::Name(name) => Wrapped::Factory(WrapperFactory::keyword(name)),
      SelectorArg::Null => Wrapped::Factory(WrapperFactory::new(Placement::None)),
    }),
    (Some(first), Some(second), 2) => {
      let index = match first {
        SelectorArg::Index(index) => Some(index),
        SelectorArg::Null => None,
        other => {
          event!(Level::WARN, got = other.kind(), "First selector argument is not an index.");
          return Err(PipeError::InvalidSelector {
            position: 0,
            expected: "an index or null",
          });
        }
      };
      let name = match second {
        SelectorArg::Name(name) => Some(name),
        SelectorArg::Null => None,
        other => {
          event!(Level::WARN, got = other.kind(), "Second selector argument is not a name.");
          return Err(PipeError::InvalidSelector {
            position: 1,
            expected: "a name or null",
          });
        }
      };
      WrapperFactory::from_parts(index, name).map(Wrapped::Factory)
    }
    (Some(_), Some(_), count) => Err(PipeError::TooManyArguments { count }),
  }
}
