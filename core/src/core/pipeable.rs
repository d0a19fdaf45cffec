// pipewrap/src/core/pipeable.rs

//! Defines the `Pipeable<V>` capability: anything that accepts a piped value
//! alongside a normal argument list.

use crate::core::args::CallArgs;

/// A callable that supports a piped call.
///
/// A composition operator only needs this trait to thread the output of one
/// call into the next. It never has to know how the value is placed.
pub trait Pipeable<V> {
  type Output;
  type Error;

  /// Injects `piped` into `args` and invokes the underlying function.
  fn pipe_call(&self, piped: V, args: CallArgs<V>) -> Result<Self::Output, Self::Error>;
}

impl<V, P: Pipeable<V> + ?Sized> Pipeable<V> for &P {
  type Output = P::Output;
  type Error = P::Error;

  fn pipe_call(&self, piped: V, args: CallArgs<V>) -> Result<Self::Output, Self::Error> {
    (**self).pipe_call(piped, args)
  }
}
