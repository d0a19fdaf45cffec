// tests/piped_call_tests.rs
mod common;

use common::*;
use pipewrap::{CallArgs, Pipeable, PipeWrapper, Placement};

fn ints(values: &[i64]) -> CallArgs<TestValue> {
  values.iter().map(|v| TestValue::Int(*v)).collect()
}

#[test]
fn test_positional_inserts_before_index() {
  setup_tracing();
  let wrapper = PipeWrapper::by_position(weighted3, 1);

  // f(1, 99, 2) with the trailing 3 passed through untouched.
  let seen = PipeWrapper::by_position(echo, 1).pipe_call(TestValue::Int(99), ints(&[1, 2, 3])).unwrap();
  assert_eq!(seen.positional, ints(&[1, 99, 2, 3]).positional);

  assert_eq!(wrapper.pipe_call(9, CallArgs::positional([1, 2])).unwrap(), 192);
}

#[test]
fn test_positional_for_every_index_up_to_len() {
  setup_tracing();
  let base = [10, 20, 30];
  for index in 0..=base.len() {
    let wrapper = PipeWrapper::by_position(echo, index);
    let seen = wrapper.pipe_call(TestValue::Int(0), ints(&base)).unwrap();

    let mut expected = base.to_vec();
    expected.insert(index, 0);
    assert_eq!(seen.positional, ints(&expected).positional, "index {}", index);
  }
}

#[test]
fn test_positional_index_past_end_appends() {
  setup_tracing();
  let wrapper = PipeWrapper::by_position(echo, 7);
  let seen = wrapper.pipe_call(TestValue::Int(4), ints(&[1, 2])).unwrap();
  assert_eq!(seen.positional, ints(&[1, 2, 4]).positional);

  let seen = wrapper.pipe_call(TestValue::Int(4), CallArgs::new()).unwrap();
  assert_eq!(seen.positional, ints(&[4]).positional);
}

#[test]
fn test_positional_keeps_keywords() {
  setup_tracing();
  let wrapper = PipeWrapper::by_position(echo, 0);
  let args = ints(&[2]).kwarg("mode", "fast".into());
  let seen = wrapper.pipe_call(TestValue::Int(1), args).unwrap();
  assert_eq!(seen.positional, ints(&[1, 2]).positional);
  assert_eq!(seen.get_keyword("mode"), Some(&TestValue::from("fast")));
  assert_eq!(seen.keyword.len(), 1);
}

#[test]
fn test_keyword_sets_name() {
  setup_tracing();
  let wrapper = PipeWrapper::by_keyword(echo, "x");
  let seen = wrapper
    .pipe_call(TestValue::Int(5), CallArgs::new().kwarg("y", TestValue::Int(1)))
    .unwrap();
  assert_eq!(seen, CallArgs::new().kwarg("y", TestValue::Int(1)).kwarg("x", TestValue::Int(5)));
}

#[test]
fn test_keyword_overwrites_caller_value() {
  setup_tracing();
  let wrapper = PipeWrapper::by_keyword(echo, "x");
  let args = ints(&[3]).kwarg("x", "caller".into());
  let seen = wrapper.pipe_call("piped".into(), args).unwrap();
  assert_eq!(seen.get_keyword("x"), Some(&TestValue::from("piped")));
  assert_eq!(seen.positional, ints(&[3]).positional);
}

#[test]
fn test_unplaced_discards_piped_value() {
  setup_tracing();
  let wrapper = PipeWrapper::unplaced(echo);
  assert_eq!(wrapper.placement(), &Placement::None);
  let args = ints(&[1, 2]).kwarg("k", TestValue::Int(3));
  assert_eq!(wrapper.pipe_call(TestValue::Int(99), args.clone()).unwrap(), args);
}

#[test]
fn test_normal_call_ignores_placement() {
  setup_tracing();
  let args = ints(&[1, 2, 3]).kwarg("x", TestValue::Int(4));
  for placement in [Placement::None, Placement::Positional(0), Placement::Positional(5), Placement::keyword("x")] {
    let wrapper = PipeWrapper::with_placement(echo, placement);
    assert_eq!(wrapper.call(args.clone()).unwrap(), echo(args.clone()).unwrap());
  }
}

#[test]
fn test_bare_equals_position_zero() {
  setup_tracing();
  let bare = PipeWrapper::bare(weighted3);
  let explicit = PipeWrapper::by_position(weighted3, 0);
  assert_eq!(bare.placement(), explicit.placement());
  assert_eq!(
    bare.pipe_call(7, CallArgs::positional([8, 9])).unwrap(),
    explicit.pipe_call(7, CallArgs::positional([8, 9])).unwrap()
  );
  assert_eq!(bare.pipe_call(7, CallArgs::positional([8, 9])).unwrap(), 789);
}

// A minimal composition helper: threads each output into the next wrapper.
fn thread_through<P: Pipeable<i64, Output = i64, Error = TestError>>(
  seed: i64,
  stages: &[(P, CallArgs<i64>)],
) -> Result<i64, TestError> {
  stages
    .iter()
    .try_fold(seed, |acc, (stage, args)| stage.pipe_call(acc, args.clone()))
}

#[test]
fn test_pipeable_chains_single_hops() {
  setup_tracing();
  let first = PipeWrapper::by_position(weighted3, 0);
  let second = PipeWrapper::by_position(weighted3, 2);

  // weighted3(1, 2, 3) = 123, then weighted3(0, 0, 123) = 123.
  let out = thread_through(
    1,
    &[(&first, CallArgs::positional([2, 3])), (&second, CallArgs::positional([0, 0]))],
  )
  .unwrap();
  assert_eq!(out, 123);
}
