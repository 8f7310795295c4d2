
use crate::parsing::operator::Operator;
use crate::parsing::source::Span;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// Every way an evaluation can fail. All errors are terminal for the
/// call that produced them.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("Unrecognized token '{text}' at {span}")]
  UnrecognizedToken {
    text: String,
    span: Span,
  },
  #[error("Expression contains no numbers")]
  EmptyExpression,
  #[error("No matching left parenthesis for ')' at {0}")]
  UnmatchedRightParen(Span),
  #[error("Left parenthesis at {0} is never closed")]
  UnclosedLeftParen(Span),
  #[error("Malformed postfix expression: {0}")]
  MalformedExpression(MalformedReason),
  #[error("Unsupported operator '{0}'")]
  UnsupportedOperator(String),
  #[error("Expected a finite number, got {0}")]
  NonFiniteNumber(f64),
  #[error("Could not parse '{0}' as a number")]
  UnparseableNumber(String),
  #[error("Precision of {digits} digits is out of range, at most {max} allowed")]
  PrecisionOutOfRange {
    digits: u32,
    max: u32,
  },
}

/// The coarse category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  InvalidExpression,
  UnbalancedParentheses,
  MalformedExpression,
  UnsupportedOperator,
  InvalidNumber,
}

/// Why a postfix stream failed to reduce to a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
  /// Operand stack underflow.
  NotEnoughOperands {
    operator: Operator,
    expected: usize,
    actual: usize,
  },
  /// More than one value was left on the operand stack.
  LeftoverOperands {
    count: usize,
  },
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::UnrecognizedToken { .. } | Error::EmptyExpression =>
        ErrorKind::InvalidExpression,
      Error::UnmatchedRightParen(_) | Error::UnclosedLeftParen(_) =>
        ErrorKind::UnbalancedParentheses,
      Error::MalformedExpression(_) =>
        ErrorKind::MalformedExpression,
      Error::UnsupportedOperator(_) =>
        ErrorKind::UnsupportedOperator,
      Error::NonFiniteNumber(_) | Error::UnparseableNumber(_) | Error::PrecisionOutOfRange { .. } =>
        ErrorKind::InvalidNumber,
    }
  }
}

impl From<MalformedReason> for Error {
  fn from(reason: MalformedReason) -> Self {
    Error::MalformedExpression(reason)
  }
}

impl Display for MalformedReason {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      MalformedReason::NotEnoughOperands { operator, expected, actual } =>
        write!(f, "operator '{operator}' expected {expected} operands but found {actual}"),
      MalformedReason::LeftoverOperands { count } =>
        write!(f, "{count} values left on the operand stack, expected 1"),
    }
  }
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      ErrorKind::InvalidExpression => "invalid expression",
      ErrorKind::UnbalancedParentheses => "unbalanced parentheses",
      ErrorKind::MalformedExpression => "malformed expression",
      ErrorKind::UnsupportedOperator => "unsupported operator",
      ErrorKind::InvalidNumber => "invalid number",
    };
    f.write_str(name)
  }
}
