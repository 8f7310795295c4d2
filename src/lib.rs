
//! Evaluation of infix arithmetic expressions.
//!
//! An expression such as `"3 + 4 * (2 - 1)"` is tokenized, converted
//! to postfix order with the shunting yard algorithm, and evaluated on
//! an operand stack. Results can optionally be rounded to a fixed
//! number of decimal digits, half away from zero.
//!
//! Supported syntax is deliberately small: floating-point literals,
//! the four binary operators `+ - * /`, parentheses, and a single
//! leading sign.

pub mod calculator;
pub mod error;
pub mod eval;
pub mod parsing;
pub mod rounding;

pub use calculator::{evaluate, evaluate_fixed, evaluate_with, postfix_notation, FixedOptions};
pub use error::{Error, ErrorKind, MalformedReason};
pub use rounding::{round, to_fixed, Fixed};
