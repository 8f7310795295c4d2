
//! Conversion of infix token streams to postfix (Reverse Polish)
//! order.

use super::operator::Operator;
use super::source::Span;
use super::tokenizer::{Token, TokenData};
use crate::error::Error;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A token in a postfix stream. Postfix streams never contain
/// parentheses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken {
  Number(f64),
  Operator(Operator),
}

/// A sequence of tokens in postfix order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
  tokens: Vec<PostfixToken>,
}

/// Entries of the operator stack. Never holds a right parenthesis.
#[derive(Debug, Clone, Copy)]
enum OpStackValue {
  Operator(Operator),
  LeftParen(Span),
}

impl Postfix {
  pub fn new(tokens: Vec<PostfixToken>) -> Self {
    Self { tokens }
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &PostfixToken> {
    self.tokens.iter()
  }

  pub fn as_slice(&self) -> &[PostfixToken] {
    &self.tokens
  }

  fn push(&mut self, token: PostfixToken) {
    self.tokens.push(token);
  }
}

impl IntoIterator for Postfix {
  type Item = PostfixToken;
  type IntoIter = std::vec::IntoIter<PostfixToken>;

  fn into_iter(self) -> Self::IntoIter {
    self.tokens.into_iter()
  }
}

impl Display for PostfixToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      PostfixToken::Number(n) => write!(f, "{n}"),
      PostfixToken::Operator(op) => write!(f, "{op}"),
    }
  }
}

impl Display for Postfix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens.iter().join(" "))
  }
}

/// Converts an infix token stream to postfix order using the shunting
/// yard algorithm.
///
/// An operator pops every operator of equal or lower priority off the
/// stack before being pushed, which gives left-to-right evaluation
/// among operators of the same tier. The converter does not check
/// that the stream contains any numbers; that is left to evaluation.
pub fn to_postfix<I>(tokens: I) -> Result<Postfix, Error>
where I: IntoIterator<Item = Token> {
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  let mut output = Postfix::default();
  for token in tokens {
    match token.data {
      TokenData::Number(n) => {
        output.push(PostfixToken::Number(n));
      }
      TokenData::LeftParen => {
        operator_stack.push(OpStackValue::LeftParen(token.span));
      }
      TokenData::RightParen => {
        // Pop operators until we hit the matching left paren, which is
        // discarded.
        loop {
          match operator_stack.pop() {
            Some(OpStackValue::LeftParen(_)) => break,
            Some(OpStackValue::Operator(op)) => output.push(PostfixToken::Operator(op)),
            None => return Err(Error::UnmatchedRightParen(token.span)),
          }
        }
      }
      TokenData::Operator(op) => {
        while let Some(&OpStackValue::Operator(top)) = operator_stack.last() {
          if op.higher_priority(top) {
            break;
          }
          operator_stack.pop();
          output.push(PostfixToken::Operator(top));
        }
        operator_stack.push(OpStackValue::Operator(op));
      }
    }
  }

  // Pop remaining operators.
  while let Some(stack_value) = operator_stack.pop() {
    match stack_value {
      OpStackValue::Operator(op) => output.push(PostfixToken::Operator(op)),
      OpStackValue::LeftParen(span) => return Err(Error::UnclosedLeftParen(span)),
    }
  }

  tracing::trace!(postfix = %output, "converted to postfix");
  Ok(output)
}
