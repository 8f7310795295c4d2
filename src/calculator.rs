
//! Entry points which run the whole pipeline on an infix string.

use crate::error::Error;
use crate::eval::evaluate_postfix;
use crate::parsing::shunting_yard::{to_postfix, Postfix};
use crate::parsing::tokenizer::tokenize;
use crate::rounding::{self, Fixed};

use serde::{Serialize, Deserialize};

/// Options for [`evaluate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedOptions {
  /// Number of fractional digits to round to.
  pub digits: u32,
  /// Produce [`Fixed::Number`] rather than [`Fixed::Text`].
  pub as_number: bool,
}

impl FixedOptions {
  pub fn with_digits(mut self, digits: u32) -> Self {
    self.digits = digits;
    self
  }

  pub fn as_number(mut self, as_number: bool) -> Self {
    self.as_number = as_number;
    self
  }
}

impl Default for FixedOptions {
  fn default() -> Self {
    Self { digits: 2, as_number: false }
  }
}

/// Parses an infix expression into postfix order.
pub fn parse(expression: &str) -> Result<Postfix, Error> {
  to_postfix(tokenize(expression)?)
}

/// Renders an infix expression in postfix notation, e.g. `"3 + 4 * 2"`
/// becomes `"3 4 2 * +"`.
pub fn postfix_notation(expression: &str) -> Result<String, Error> {
  parse(expression).map(|postfix| postfix.to_string())
}

/// Evaluates an infix expression.
pub fn evaluate(expression: &str) -> Result<f64, Error> {
  let result = parse(expression).and_then(evaluate_postfix);
  if let Err(err) = &result {
    tracing::debug!(expression, kind = %err.kind(), "evaluation failed: {err}");
  }
  result
}

/// Evaluates an infix expression and rounds the result to `digits`
/// fractional digits, half away from zero.
pub fn evaluate_fixed(expression: &str, digits: u32, as_number: bool) -> Result<Fixed, Error> {
  let value = evaluate(expression)?;
  let fixed = rounding::round_to(value, digits, as_number);
  if let Err(err) = &fixed {
    tracing::debug!(expression, digits, kind = %err.kind(), "rounding failed: {err}");
  }
  fixed
}

/// As [`evaluate_fixed`], with the rounding parameters taken from
/// `options`.
pub fn evaluate_with(expression: &str, options: &FixedOptions) -> Result<Fixed, Error> {
  evaluate_fixed(expression, options.digits, options.as_number)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;

  use approx::assert_abs_diff_eq;
  use proptest::prelude::*;

  #[test]
  fn test_evaluate_examples() {
    assert_eq!(evaluate("3 + 4 * (2 - 1)").unwrap(), 7.0);
    assert_eq!(evaluate("-3 + 4").unwrap(), 1.0);
    assert_eq!(evaluate("+3 + 4").unwrap(), 7.0);
    assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
    assert_eq!(evaluate("100 / 10 / 5").unwrap(), 2.0);
    assert_eq!(evaluate("2 * (3 + 4) * 5").unwrap(), 70.0);
    assert_eq!(evaluate("  42  ").unwrap(), 42.0);
    assert_abs_diff_eq!(evaluate("0.1 + 0.2").unwrap(), 0.3, epsilon = 1e-12);
  }

  #[test]
  fn test_leading_sign_inside_parens() {
    assert_eq!(evaluate("(-3) * 2").unwrap(), -6.0);
    assert_eq!(evaluate("-(1 + 2)").unwrap(), -3.0);
  }

  #[test]
  fn test_leading_sign_after_empty_parens() {
    assert_eq!(evaluate("()-3").unwrap(), -3.0);
    assert_eq!(evaluate("() + 5").unwrap(), 5.0);
    assert_eq!(evaluate("(()) - 2 * 3").unwrap(), -6.0);
  }

  #[test]
  fn test_infinity_literal() {
    assert_eq!(evaluate("Infinity - 1").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("inf + 1").unwrap_err().kind(), ErrorKind::InvalidExpression);
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(evaluate("3 / 0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("-3 / 0").unwrap(), f64::NEG_INFINITY);
  }

  #[test]
  fn test_unbalanced_parentheses() {
    assert_eq!(evaluate("3 + (4 * 2").unwrap_err().kind(), ErrorKind::UnbalancedParentheses);
    assert_eq!(evaluate("3 + 4) * 2").unwrap_err().kind(), ErrorKind::UnbalancedParentheses);
  }

  #[test]
  fn test_double_operator() {
    assert_eq!(evaluate("3 + + 4").unwrap_err().kind(), ErrorKind::MalformedExpression);
    assert_eq!(evaluate("3 * / 4").unwrap_err().kind(), ErrorKind::MalformedExpression);
  }

  #[test]
  fn test_invalid_expressions() {
    assert_eq!(evaluate("").unwrap_err(), Error::EmptyExpression);
    assert_eq!(evaluate("( )").unwrap_err(), Error::EmptyExpression);
    assert_eq!(evaluate("*").unwrap_err().kind(), ErrorKind::InvalidExpression);
    assert_eq!(evaluate("3 + x").unwrap_err().kind(), ErrorKind::InvalidExpression);
    assert_eq!(evaluate("-").unwrap_err().kind(), ErrorKind::MalformedExpression);
    assert_eq!(evaluate("3 (4)").unwrap_err().kind(), ErrorKind::MalformedExpression);
  }

  #[test]
  fn test_evaluate_fixed() {
    assert_eq!(evaluate_fixed("1/3", 4, true).unwrap(), Fixed::Number(0.3333));
    assert_eq!(evaluate_fixed("1/3", 4, false).unwrap(), Fixed::Text(String::from("0.3333")));
    assert_eq!(evaluate_fixed("2 * 3.5", 2, false).unwrap().to_string(), "7.00");
    assert_eq!(evaluate_fixed("-9.4691 / 2", 2, false).unwrap().to_string(), "-4.73");
  }

  #[test]
  fn test_evaluate_fixed_errors() {
    assert_eq!(evaluate_fixed("3 / 0", 2, false).unwrap_err().kind(), ErrorKind::InvalidNumber);
    assert_eq!(evaluate_fixed("3 + (", 2, false).unwrap_err().kind(), ErrorKind::UnbalancedParentheses);
    assert_eq!(evaluate_fixed("1", 500, false).unwrap_err().kind(), ErrorKind::InvalidNumber);
  }

  #[test]
  fn test_evaluate_with_options() {
    let options = FixedOptions::default();
    assert_eq!(evaluate_with("10 / 4", &options).unwrap(), Fixed::Text(String::from("2.50")));
    let options = FixedOptions::default().with_digits(0).as_number(true);
    assert_eq!(evaluate_with("10 / 4", &options).unwrap(), Fixed::Number(3.0));
  }

  #[test]
  fn test_options_deserialize_with_defaults() {
    let options: FixedOptions = serde_json::from_str(r#"{"digits": 5}"#).unwrap();
    assert_eq!(options, FixedOptions { digits: 5, as_number: false });
    let options: FixedOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FixedOptions::default());
    let options: FixedOptions = serde_json::from_str(r#"{"as_number": true}"#).unwrap();
    assert_eq!(options, FixedOptions { digits: 2, as_number: true });
  }

  #[test]
  fn test_postfix_notation() {
    assert_eq!(postfix_notation("3 + 4 * (2 - 1)").unwrap(), "3 4 2 1 - * +");
    assert_eq!(postfix_notation("-1.5 * 2").unwrap(), "0 1.5 2 * -");
    assert_eq!(postfix_notation("(1").unwrap_err().kind(), ErrorKind::UnbalancedParentheses);
  }

  /// Well-formed expression tree used to cross-check the pipeline
  /// against direct recursive evaluation.
  #[derive(Debug, Clone)]
  enum RefExpr {
    Number(u32),
    Binary(Box<RefExpr>, char, Box<RefExpr>),
    Paren(Box<RefExpr>),
  }

  impl RefExpr {
    fn render(&self) -> String {
      match self {
        RefExpr::Number(n) => n.to_string(),
        RefExpr::Binary(left, op, right) => format!("{} {} {}", left.render(), op, right.render()),
        RefExpr::Paren(inner) => format!("({})", inner.render()),
      }
    }
  }

  fn ref_expr() -> impl Strategy<Value = RefExpr> {
    let leaf = (0u32..100).prop_map(RefExpr::Number);
    leaf.prop_recursive(4, 32, 2, |inner| {
      prop_oneof![
        (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone())
          .prop_map(|(l, op, r)| RefExpr::Binary(Box::new(l), op, Box::new(r))),
        inner.prop_map(|e| RefExpr::Paren(Box::new(e))),
      ]
    })
  }

  /// Reference recursive-descent evaluator over the rendered string,
  /// with the usual two precedence tiers and left associativity.
  struct RefParser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
  }

  impl<'a> RefParser<'a> {
    fn new(s: &'a str) -> Self {
      Self { chars: s.chars().peekable() }
    }

    fn skip_spaces(&mut self) {
      while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn expr(&mut self) -> f64 {
      let mut value = self.term();
      loop {
        self.skip_spaces();
        match self.chars.next_if(|&c| c == '+' || c == '-') {
          Some('+') => value += self.term(),
          Some(_) => value -= self.term(),
          None => return value,
        }
      }
    }

    fn term(&mut self) -> f64 {
      let mut value = self.atom();
      loop {
        self.skip_spaces();
        match self.chars.next_if(|&c| c == '*' || c == '/') {
          Some('*') => value *= self.atom(),
          Some(_) => value /= self.atom(),
          None => return value,
        }
      }
    }

    fn atom(&mut self) -> f64 {
      self.skip_spaces();
      if self.chars.next_if_eq(&'(').is_some() {
        let value = self.expr();
        self.skip_spaces();
        self.chars.next_if_eq(&')');
        return value;
      }
      let mut digits = String::new();
      while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
      }
      digits.parse().unwrap()
    }
  }

  fn same_float(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
  }

  proptest! {
    #[test]
    fn prop_matches_reference_evaluator(expr in ref_expr()) {
      let source = expr.render();
      let expected = RefParser::new(&source).expr();
      let actual = evaluate(&source).unwrap();
      prop_assert!(same_float(actual, expected), "{} gave {} but expected {}", source, actual, expected);
    }
  }
}
