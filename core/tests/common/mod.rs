// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use pipewrap::{CallArgs, PipeError};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Value Type ---
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestValue {
  Int(i64),
  Text(String),
}

impl From<i64> for TestValue {
  fn from(v: i64) -> Self {
    TestValue::Int(v)
  }
}

impl From<&str> for TestValue {
  fn from(v: &str) -> Self {
    TestValue::Text(v.to_string())
  }
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("pipewrap error: {0}")]
  Pipe(String),

  #[error("Test function failed: {0}")]
  Function(String),

  #[error("Missing argument: {0}")]
  MissingArgument(String),
}

impl From<PipeError> for TestError {
  fn from(pe: PipeError) -> Self {
    TestError::Pipe(format!("{:?}", pe))
  }
}

// --- Common Wrapped Functions ---

/// Returns the arguments it was called with, so tests can compare them directly.
pub fn echo(args: CallArgs<TestValue>) -> Result<CallArgs<TestValue>, TestError> {
  Ok(args)
}

/// f(a, b, c) = a * 100 + b * 10 + c, over integer positionals.
pub fn weighted3(args: CallArgs<i64>) -> Result<i64, TestError> {
  let arg = |i: usize| {
    args
      .get(i)
      .copied()
      .ok_or_else(|| TestError::MissingArgument(format!("#{}", i)))
  };
  Ok(arg(0)? * 100 + arg(1)? * 10 + arg(2)?)
}

/// Always fails with the given message.
pub fn failing(message: &'static str) -> impl Fn(CallArgs<i64>) -> Result<i64, TestError> + Send + Sync + 'static {
  move |_args| Err(TestError::Function(message.to_string()))
}

/// Counts invocations on `counter` and returns the positional sum.
pub fn counting_sum(counter: Arc<AtomicUsize>) -> impl Fn(CallArgs<i64>) -> Result<i64, TestError> + Send + Sync + 'static {
  move |args| {
    counter.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(target: "test_functions", positional = args.positional.len(), "counting_sum invoked");
    Ok(args.positional.iter().sum::<i64>() + args.keyword.values().sum::<i64>())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter for checking execution counts ---
pub static FUNCTION_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  FUNCTION_EXEC_COUNTER.store(0, Ordering::SeqCst);
}
