
//! The four binary arithmetic operators and their priority table.

mod precedence;

pub use precedence::Precedence;

use crate::error::Error;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A binary arithmetic operator. All operators are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
  #[serde(rename = "+")]
  Plus,
  #[serde(rename = "-")]
  Minus,
  #[serde(rename = "*")]
  Times,
  #[serde(rename = "/")]
  Divide,
}

impl Operator {
  pub const ALL: [Operator; 4] = [Operator::Plus, Operator::Minus, Operator::Times, Operator::Divide];

  /// The symbol of the operator, as written in an infix expression.
  pub fn symbol(self) -> &'static str {
    match self {
      Operator::Plus => "+",
      Operator::Minus => "-",
      Operator::Times => "*",
      Operator::Divide => "/",
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Plus | Operator::Minus => Precedence::ADDITIVE,
      Operator::Times | Operator::Divide => Precedence::MULTIPLICATIVE,
    }
  }

  /// True if `self` binds strictly more tightly than `other`. Equal
  /// tiers compare false, which is what makes the operators
  /// left-associative during postfix conversion.
  pub fn higher_priority(self, other: Operator) -> bool {
    self.precedence() > other.precedence()
  }
}

/// Looks up the precedence of an operator given by its symbol.
pub fn priority(symbol: &str) -> Result<Precedence, Error> {
  Operator::from_str(symbol).map(Operator::precedence)
}

/// Symbol-level form of [`Operator::higher_priority`].
pub fn higher_priority(a: &str, b: &str) -> Result<bool, Error> {
  Ok(priority(a)? > priority(b)?)
}

impl FromStr for Operator {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "+" => Ok(Operator::Plus),
      "-" => Ok(Operator::Minus),
      "*" => Ok(Operator::Times),
      "/" => Ok(Operator::Divide),
      _ => Err(Error::UnsupportedOperator(s.to_owned())),
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}
