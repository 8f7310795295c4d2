
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Byte position in an infix expression string. Carried by tokens so
/// that errors can point back at the offending text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceOffset(pub usize);

/// A half-open span `[start, end)` of source offsets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }

  /// A zero-width span at the given position. Used for tokens which
  /// were synthesized rather than read from the input.
  pub fn empty(at: SourceOffset) -> Self {
    Self { start: at, end: at }
  }

  pub fn len(&self) -> usize {
    self.end.0.saturating_sub(self.start.0)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_span_len() {
    assert_eq!(Span::new(SourceOffset(2), SourceOffset(5)).len(), 3);
    assert_eq!(Span::empty(SourceOffset(4)).len(), 0);
    assert!(Span::empty(SourceOffset(4)).is_empty());
    assert!(!Span::new(SourceOffset(0), SourceOffset(1)).is_empty());
  }

  #[test]
  fn test_offset_arithmetic() {
    assert_eq!(SourceOffset(3) + 4, SourceOffset(7));
    assert_eq!(SourceOffset(0) + 0, SourceOffset(0));
  }

  #[test]
  fn test_span_display() {
    assert_eq!(Span::new(SourceOffset(1), SourceOffset(4)).to_string(), "1-4");
    assert_eq!(Span::default().to_string(), "0-0");
  }
}
