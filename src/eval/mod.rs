
//! Evaluation of postfix token streams.

pub mod arithmetic;
pub mod postfix;

pub use arithmetic::{apply, apply_symbol};
pub use postfix::evaluate_postfix;
