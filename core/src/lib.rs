// src/lib.rs

//! pipewrap: wrap plain functions so they can be piped.
//!
//! A `PipeWrapper` holds one function and a `Placement`. Calling it normally
//! passes the arguments straight through. A piped call injects one extra
//! value first:
//!  - `Placement::Positional(i)` inserts it before the positional argument at `i`
//!    (appending when `i` is past the end).
//!  - `Placement::Keyword(name)` stores it under `name`, overwriting any caller value.
//!  - `Placement::None` discards it.
//!
//! Composition operators are left to the caller; they only need the
//! `Pipeable` trait.

pub mod core;
pub mod error;
pub mod wrapper;

// --- Re-exports for the Public API ---

pub use crate::core::args::CallArgs;
pub use crate::core::function::{pipe_fn, PipeFn};
pub use crate::core::pipeable::Pipeable;
pub use crate::core::placement::{Injection, Placement};

pub use crate::wrapper::definition::PipeWrapper;
pub use crate::wrapper::factory::{make_pipe_wrapper, SelectorArg, Wrapped, WrapperFactory};

pub use crate::error::{PipeError, PipeResult};
