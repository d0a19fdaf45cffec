// pipewrap/src/core/placement.rs

//! Defines `Placement`, the slot a piped value is injected into, and the
//! injection routine applied on every piped call.

use std::fmt;
use std::str::FromStr;

use crate::core::args::CallArgs;
use crate::error::{PipeError, PipeResult};

/// Where a piped value goes in the argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Placement {
  /// No injection. The piped value is discarded.
  #[default]
  None,
  /// Inserted before the positional argument currently at this index (appended if past the end).
  Positional(usize),
  /// Stored under this keyword, replacing any caller-supplied value.
  Keyword(String),
}

/// What `Placement::inject` did with the piped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
  Inserted { clamped: bool },
  Keyword { replaced: bool },
  Discarded,
}

impl Placement {
  /// Resolves the two-value selector form. At most one of `index` and `name` may be set.
  pub fn from_parts(index: Option<usize>, name: Option<String>) -> PipeResult<Self> {
    match (index, name) {
      (Some(index), Some(name)) => Err(PipeError::AmbiguousPlacement { index, name }),
      (Some(index), None) => Ok(Placement::Positional(index)),
      (None, Some(name)) => Ok(Placement::Keyword(name)),
      (None, None) => Ok(Placement::None),
    }
  }

  pub fn keyword<S: Into<String>>(name: S) -> Self {
    Placement::Keyword(name.into())
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Placement::None)
  }

  /// Injects `piped` into `args`. Never fails: positional indices clamp and
  /// keywords overwrite.
  pub fn inject<V>(&self, piped: V, args: &mut CallArgs<V>) -> Injection {
    match self {
      Placement::Positional(index) => Injection::Inserted {
        clamped: args.insert_clamped(*index, piped),
      },
      Placement::Keyword(name) => Injection::Keyword {
        replaced: args.overwrite_keyword(name, piped),
      },
      Placement::None => Injection::Discarded,
    }
  }
}

impl fmt::Display for Placement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Placement::None => f.write_str("none"),
      Placement::Positional(index) => write!(f, "#{}", index),
      Placement::Keyword(name) => write!(f, "={}", name),
    }
  }
}

/// Textual form used in configuration: `""`/`"none"`, `"3"`/`"#3"`, `"name"`/`"=name"`.
///
/// Everything after a leading `=` is the keyword name verbatim, whitespace and
/// empty names included. The other forms are trimmed.
impl FromStr for Placement {
  type Err = PipeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || PipeError::InvalidPlacement { input: s.to_string() };
    if let Some(name) = s.strip_prefix('=') {
      return Ok(Placement::Keyword(name.to_string()));
    }

    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
      return Ok(Placement::None);
    }
    if let Some(digits) = trimmed.strip_prefix('#') {
      return digits.parse::<usize>().map(Placement::Positional).map_err(|_| invalid());
    }
    if let Ok(index) = trimmed.parse::<usize>() {
      return Ok(Placement::Positional(index));
    }
    // Negative or otherwise numeric-looking input is never a keyword.
    if trimmed.parse::<i128>().is_ok() {
      return Err(invalid());
    }
    Ok(Placement::Keyword(trimmed.to_string()))
  }
}
