// pipewrap/src/core/function.rs

//! Defines the `PipeFn<V, R, E>` type for wrapped functions.

use crate::core::args::CallArgs;
use std::sync::Arc;

/// Type alias for a wrapped function.
///
/// A wrapped function takes ownership of a `CallArgs<V>` and returns
/// `Result<R, E>`. `E` is whatever the function itself fails with; the
/// wrapper never converts it.
///
/// The function is held behind an `Arc`, so clones of a wrapper share it and
/// the wrapper can be called from several threads at once as long as the
/// function itself allows that.
pub type PipeFn<V, R, E> = Arc<dyn Fn(CallArgs<V>) -> Result<R, E> + Send + Sync>;

/// Erases a closure into a `PipeFn`.
pub fn pipe_fn<V, R, E>(f: impl Fn(CallArgs<V>) -> Result<R, E> + Send + Sync + 'static) -> PipeFn<V, R, E> {
  Arc::new(f)
}
