
use crate::error::Error;
use crate::parsing::operator::Operator;

use std::str::FromStr;

/// Applies a binary operator. Division follows IEEE semantics, so
/// dividing by zero yields an infinity (or NaN for `0 / 0`) rather
/// than an error.
pub fn apply(left: f64, right: f64, op: Operator) -> f64 {
  match op {
    Operator::Plus => left + right,
    Operator::Minus => left - right,
    Operator::Times => left * right,
    Operator::Divide => left / right,
  }
}

/// As [`apply`], but with the operator given by its symbol.
pub fn apply_symbol(left: f64, right: f64, symbol: &str) -> Result<f64, Error> {
  let op = Operator::from_str(symbol)?;
  Ok(apply(left, right, op))
}
