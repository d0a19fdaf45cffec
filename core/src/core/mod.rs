pub mod args;
pub mod function;
pub mod pipeable;
pub mod placement;

// Re-export key types for easier access from other modules (and lib.rs)
pub use args::CallArgs;
pub use function::{pipe_fn, PipeFn};
pub use pipeable::Pipeable;
pub use placement::{Injection, Placement};
