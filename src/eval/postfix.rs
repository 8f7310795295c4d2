
use super::arithmetic::apply;
use crate::error::{Error, MalformedReason};
use crate::parsing::shunting_yard::{Postfix, PostfixToken};

/// Evaluates a postfix stream with a single operand stack.
///
/// Each operator consumes the two most recently pushed values, the
/// earlier one as its left operand, and pushes one result. The stream
/// must reduce to exactly one value. A stream with no numbers at all
/// is rejected as [`Error::EmptyExpression`].
pub fn evaluate_postfix(postfix: Postfix) -> Result<f64, Error> {
  if !postfix.iter().any(|t| matches!(t, PostfixToken::Number(_))) {
    return Err(Error::EmptyExpression);
  }

  let mut operand_stack: Vec<f64> = Vec::with_capacity(postfix.len());
  for token in postfix {
    match token {
      PostfixToken::Number(n) => {
        operand_stack.push(n);
      }
      PostfixToken::Operator(op) => {
        let actual = operand_stack.len();
        let (Some(second), Some(first)) = (operand_stack.pop(), operand_stack.pop()) else {
          return Err(MalformedReason::NotEnoughOperands { operator: op, expected: 2, actual }.into());
        };
        operand_stack.push(apply(first, second, op));
      }
    }
  }

  match operand_stack.as_slice() {
    [result] => {
      tracing::trace!(result, "evaluated postfix");
      Ok(*result)
    }
    values => Err(MalformedReason::LeftoverOperands { count: values.len() }.into()),
  }
}
