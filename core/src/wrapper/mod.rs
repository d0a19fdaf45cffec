// pipewrap/src/wrapper/mod.rs

//! Defines the `PipeWrapper<V, R, E>` struct, its construction, and the
//! selector dispatch that builds wrappers and factories.

pub mod definition;
pub mod factory;

// Re-export the main wrapper struct
pub use definition::PipeWrapper;
pub use factory::{make_pipe_wrapper, SelectorArg, Wrapped, WrapperFactory};
