
//! Front end: from infix source text to a postfix token stream.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;

pub use shunting_yard::{to_postfix, Postfix, PostfixToken};
pub use tokenizer::{tokenize, Token, TokenData};
