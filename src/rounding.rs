
//! Fixed-precision rounding, half away from zero.
//!
//! The value is scaled by `10^digits`, nudged by `0.5` away from zero,
//! truncated, and scaled back. Since the nudge happens in binary
//! floating point, values that sit just below a decimal half (such as
//! `1.005`, which is stored as `1.00499999...`) round down.

use crate::error::Error;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The largest number of fractional digits accepted.
pub const MAX_DIGITS: u32 = 100;

/// A rounded result, either as a number or as fixed-decimal text with
/// exactly the requested number of fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fixed {
  Number(f64),
  Text(String),
}

impl Fixed {
  pub fn as_number(&self) -> Option<f64> {
    match self {
      Fixed::Number(n) => Some(*n),
      Fixed::Text(_) => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Fixed::Number(_) => None,
      Fixed::Text(s) => Some(s),
    }
  }
}

impl Display for Fixed {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Fixed::Number(n) => write!(f, "{n}"),
      Fixed::Text(s) => f.write_str(s),
    }
  }
}

/// Rounds `value` to `digits` fractional digits, half away from zero.
pub fn round(value: f64, digits: u32) -> Result<f64, Error> {
  check_precision(digits)?;
  if !value.is_finite() {
    return Err(Error::NonFiniteNumber(value));
  }
  let times = 10f64.powi(digits as i32);
  let scaled = value * times;
  if !scaled.is_finite() {
    // Too large to carry any fractional digits at this precision.
    return Ok(value);
  }
  let precision = if value < 0.0 { -0.5 } else { 0.5 };
  let rounded = (scaled + precision).trunc() / times;
  // Collapse -0.0 so that it formats as "0.00".
  Ok(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Rounds `value` and formats it with exactly `digits` fractional
/// digits, keeping trailing zeros.
pub fn to_fixed(value: f64, digits: u32) -> Result<String, Error> {
  let rounded = round(value, digits)?;
  Ok(format!("{:.*}", digits as usize, rounded))
}

/// Parses `text` as a number and formats it as in [`to_fixed`].
/// Surrounding whitespace is ignored and blank text reads as zero.
pub fn to_fixed_str(text: &str, digits: u32) -> Result<String, Error> {
  let trimmed = text.trim();
  let value = if trimmed.is_empty() {
    0.0
  } else {
    f64::from_str(trimmed).map_err(|_| Error::UnparseableNumber(text.to_owned()))?
  };
  to_fixed(value, digits)
}

/// Rounds `value`, producing a number if `as_number` is set and
/// fixed-decimal text otherwise.
pub fn round_to(value: f64, digits: u32, as_number: bool) -> Result<Fixed, Error> {
  if as_number {
    round(value, digits).map(Fixed::Number)
  } else {
    to_fixed(value, digits).map(Fixed::Text)
  }
}

fn check_precision(digits: u32) -> Result<(), Error> {
  if digits > MAX_DIGITS {
    Err(Error::PrecisionOutOfRange { digits, max: MAX_DIGITS })
  } else {
    Ok(())
  }
}
