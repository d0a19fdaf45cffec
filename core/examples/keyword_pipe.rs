// pipewrap/examples/keyword_pipe.rs

use pipewrap::{make_pipe_wrapper, CallArgs, Placement, SelectorArg, WrapperFactory};
use std::fmt;
use tracing::{info, warn};

// Heterogeneous arguments use an enum for the value type.
#[derive(Clone, Debug, PartialEq)]
enum Value {
  Text(String),
  Number(f64),
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Text(s) => f.write_str(s),
      Value::Number(n) => write!(f, "{}", n),
    }
  }
}

#[derive(Debug, thiserror::Error)]
enum AppError {
  #[error("pipewrap: {0}")]
  Pipe(#[from] pipewrap::PipeError),
  #[error("missing keyword '{0}'")]
  Missing(&'static str),
  #[error("selector unexpectedly accepted: {0}")]
  UnexpectedSelector(String),
}

fn render(args: CallArgs<Value>) -> Result<String, AppError> {
  let template = args.get_keyword("template").ok_or(AppError::Missing("template"))?;
  let body = args.get_keyword("body").ok_or(AppError::Missing("body"))?;
  Ok(format!("{}: {}", template, body))
}

fn main() -> Result<(), AppError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Keyword Pipe Example ---");

  // Placement read from a configuration string.
  let placement: Placement = "=body".parse()?;
  let render_body = WrapperFactory::from(placement).wrap(render);

  let args = CallArgs::new()
    .kwarg("template", Value::Text("total".into()))
    .kwarg("body", Value::Text("overwritten".into()));
  let out = render_body.pipe_call(Value::Number(42.5), args)?;
  info!("{}", out);
  assert_eq!(out, "total: 42.5");

  // Runtime-assembled selector: an index and a name together are rejected.
  let selector: Vec<SelectorArg<Value, String, AppError>> = vec![SelectorArg::Index(0), SelectorArg::name("body")];
  match make_pipe_wrapper(selector) {
    Ok(wrapped) => return Err(AppError::UnexpectedSelector(format!("{:?}", wrapped))),
    Err(err) => warn!("Rejected selector: {}", err),
  }

  Ok(())
}
