
//! Splits an infix expression into number, operator, and parenthesis
//! tokens.
//!
//! The input is cut around every occurrence of the six symbols `+ - *
//! / ( )`. Whatever text lies between two symbols is trimmed of
//! surrounding whitespace and, if anything remains, parsed as a
//! floating-point literal.

use super::operator::Operator;
use super::source::{SourceOffset, Span};
use crate::error::Error;

use regex::Regex;
use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+*/()]").unwrap());
static PIECE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^-+*/()]+").unwrap());

/// Cursor over the expression being tokenized.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  whole_input: &'a str,
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

/// An infix token together with the source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenData {
  Number(f64),
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      whole_input: input,
      input,
      position: SourceOffset(0),
    }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// The portion of the input that has been consumed so far.
  pub fn consumed(&self) -> &'a str {
    &self.whole_input[..self.position.0]
  }

  /// Advances the position of `self` by `amount` bytes, never past
  /// the end of the input, and returns the skipped substring.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position.0 += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }

  pub fn consume_spaces(&mut self) {
    let trimmed = self.input.trim_start();
    self.advance(self.input.len() - trimmed.len());
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }

  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }

  /// The match with trailing whitespace removed.
  pub fn trim_end(&self) -> TokenizerMatch<'a> {
    let trimmed = self.matched_str.trim_end();
    TokenizerMatch {
      matched_str: trimmed,
      start: self.start,
      end: self.start + trimmed.len(),
    }
  }
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }

  pub fn number(value: f64, span: Span) -> Self {
    Self::new(TokenData::Number(value), span)
  }

  pub fn operator(op: Operator, span: Span) -> Self {
    Self::new(TokenData::Operator(op), span)
  }

  fn from_symbol(m: &TokenizerMatch<'_>) -> Result<Self, Error> {
    let data = match m.as_str() {
      "(" => TokenData::LeftParen,
      ")" => TokenData::RightParen,
      symbol => TokenData::Operator(Operator::from_str(symbol)?),
    };
    Ok(Self::new(data, m.span()))
  }

  /// Parses a number literal. The only non-finite literal accepted is
  /// the exact spelling `Infinity`.
  fn from_literal(m: &TokenizerMatch<'_>) -> Result<Self, Error> {
    let m = m.trim_end();
    match f64::from_str(m.as_str()) {
      Ok(value) if value.is_finite() || m.as_str() == "Infinity" => Ok(Self::number(value, m.span())),
      _ => Err(Error::UnrecognizedToken { text: m.as_str().to_owned(), span: m.span() }),
    }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::Operator(op) => write!(f, "{op}"),
      TokenData::LeftParen => f.write_str("("),
      TokenData::RightParen => f.write_str(")"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}

/// Tokenizes an infix expression.
///
/// A leading `+` or `-` (possibly behind any number of parentheses)
/// is treated as a sign: an implicit `0` operand is inserted at the
/// front of the stream, so `-3+4` reads as `0-3+4`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
  let mut state = TokenizerState::new(source);
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    if state.is_eof() {
      break;
    }
    if let Some(m) = state.read_regex(&SYMBOL_RE) {
      tokens.push(Token::from_symbol(&m)?);
    } else if let Some(m) = state.read_regex(&PIECE_RE) {
      tokens.push(Token::from_literal(&m)?);
    } else {
      // Both regexes together cover every character, so this is only
      // reachable if they fall out of sync.
      let text = state.peek().map(String::from).unwrap_or_default();
      let start = state.current_pos();
      return Err(Error::UnrecognizedToken { text, span: Span::new(start, start + 1) });
    }
  }
  normalize_leading_sign(&mut tokens);
  tracing::trace!(source, tokens = tokens.len(), "tokenized expression");
  Ok(tokens)
}

fn normalize_leading_sign(tokens: &mut Vec<Token>) {
  let first = tokens.iter()
    .find(|token| !matches!(token.data, TokenData::LeftParen | TokenData::RightParen));
  if let Some(Token { data: TokenData::Operator(Operator::Plus | Operator::Minus), .. }) = first {
    tokens.insert(0, Token::number(0.0, Span::empty(SourceOffset(0))));
  }
}
