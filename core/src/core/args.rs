// pipewrap/src/core/args.rs

//! Defines `CallArgs<V>`, the argument list handed to every wrapped function.

use std::collections::BTreeMap;

/// Positional and keyword arguments for one invocation of a wrapped function.
///
/// `V` is the caller's argument value type. Functions that take heterogeneous
/// arguments typically use an enum for `V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgs<V> {
  pub positional: Vec<V>,
  pub keyword: BTreeMap<String, V>,
}

impl<V> CallArgs<V> {
  pub fn new() -> Self {
    Self {
      positional: Vec::new(),
      keyword: BTreeMap::new(),
    }
  }

  /// Builds an argument list with only positional arguments.
  pub fn positional(values: impl IntoIterator<Item = V>) -> Self {
    Self {
      positional: values.into_iter().collect(),
      keyword: BTreeMap::new(),
    }
  }

  /// Appends a positional argument.
  pub fn arg(mut self, value: V) -> Self {
    self.positional.push(value);
    self
  }

  /// Sets a keyword argument, replacing any previous value under `name`.
  pub fn kwarg<S: Into<String>>(mut self, name: S, value: V) -> Self {
    self.keyword.insert(name.into(), value);
    self
  }

  pub fn get(&self, index: usize) -> Option<&V> {
    self.positional.get(index)
  }

  pub fn get_keyword(&self, name: &str) -> Option<&V> {
    self.keyword.get(name)
  }

  /// Counts positional and keyword arguments together.
  /// Use `positional.len()` for the positional count alone.
  pub fn len(&self) -> usize {
    self.positional.len() + self.keyword.len()
  }

  pub fn is_empty(&self) -> bool {
    self.positional.is_empty() && self.keyword.is_empty()
  }

  /// Inserts `value` before the positional argument currently at `index`.
  /// An index past the end appends. Returns whether the index was clamped.
  pub(crate) fn insert_clamped(&mut self, index: usize, value: V) -> bool {
    let len = self.positional.len();
    let clamped = index > len;
    self.positional.insert(index.min(len), value);
    clamped
  }

  /// Sets `name` unconditionally. Returns whether a caller-supplied value was replaced.
  pub(crate) fn overwrite_keyword(&mut self, name: &str, value: V) -> bool {
    self.keyword.insert(name.to_string(), value).is_some()
  }
}

impl<V> Default for CallArgs<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V> From<Vec<V>> for CallArgs<V> {
  fn from(positional: Vec<V>) -> Self {
    Self {
      positional,
      keyword: BTreeMap::new(),
    }
  }
}

impl<V> FromIterator<V> for CallArgs<V> {
  fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
    Self::positional(iter)
  }
}
