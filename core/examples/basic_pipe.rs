// pipewrap/examples/basic_pipe.rs

use pipewrap::{CallArgs, PipeError, PipeResult, PipeWrapper};
use tracing::info;

// 1. Plain functions take a CallArgs<V> and return a Result.
//    This example pipes integers through positional slots.
fn subtract(args: CallArgs<i64>) -> PipeResult<i64> {
  match (args.get(0), args.get(1)) {
    (Some(a), Some(b)) => Ok(a - b),
    _ => Err(anyhow::anyhow!("subtract needs two arguments, got {}", args.positional.len()).into()),
  }
}

fn scale(args: CallArgs<i64>) -> PipeResult<i64> {
  let value = args.get(0).copied().unwrap_or_default();
  let factor = args.get(1).copied().unwrap_or(1);
  Ok(value * factor)
}

fn main() -> Result<(), PipeError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipe Example ---");

  // 2. Wrap them. `bare` pipes into the first slot, `by_position` into any slot.
  let minus_from = PipeWrapper::bare(subtract); // piped - b
  let minus = PipeWrapper::by_position(subtract, 1); // a - piped
  let times = PipeWrapper::bare(scale);

  // 3. Normal calls behave exactly like the function.
  let direct = minus.call(CallArgs::positional([10, 3]))?;
  info!("subtract(10, 3) = {}", direct);

  // 4. Piped calls thread one value into the next call.
  let step1 = minus_from.pipe_call(direct, CallArgs::positional([2]))?; // 7 - 2
  let step2 = minus.pipe_call(step1, CallArgs::positional([100]))?; // 100 - 5
  let step3 = times.pipe_call(step2, CallArgs::positional([2]))?; // 95 * 2
  info!("Threaded result: {} -> {} -> {}", step1, step2, step3);

  assert_eq!(step3, 190);
  Ok(())
}
