
use std::fmt::{self, Display, Formatter};

/// The precedence tier of an operator. Higher values bind more
/// tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u64);

impl Precedence {
  /// Tier shared by `+` and `-`.
  pub const ADDITIVE: Precedence = Precedence(1);
  /// Tier shared by `*` and `/`.
  pub const MULTIPLICATIVE: Precedence = Precedence(2);

  pub const fn new(n: u64) -> Precedence {
    Precedence(n)
  }

  pub const fn value(self) -> u64 {
    self.0
  }
}

impl From<u64> for Precedence {
  fn from(n: u64) -> Precedence {
    Precedence::new(n)
  }
}

impl From<Precedence> for u64 {
  fn from(prec: Precedence) -> u64 {
    prec.0
  }
}

impl Display for Precedence {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
