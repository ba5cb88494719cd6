//! Negation, sum and product evaluation

use crate::node::Kind;
use crate::{Environment, EvalContext, EvalError, Node, Value};

use super::Evaluate;

/// Evaluate `Neg(operand)`.
///
/// An unbound operand propagates as `Unbound`.
pub fn eval_neg(
    operand: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    match operand.eval(env, ctx)? {
        Value::Unbound => Ok(Value::Unbound),
        Value::Number(n) => Ok(Value::Number(-n)),
        Value::Node(node) => Err(EvalError::non_numeric_operand(Kind::Neg, &node)),
    }
}

/// Evaluate `Sum(left, right)`.
pub fn eval_sum(
    left: &Node,
    right: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    eval_binary(Kind::Sum, left, right, env, ctx, |a, b| a + b)
}

/// Evaluate `Mul(left, right)`.
pub fn eval_mul(
    left: &Node,
    right: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    eval_binary(Kind::Mul, left, right, env, ctx, |a, b| a * b)
}

/// Both operands are evaluated, left first, exactly once each, before
/// checking for `Unbound`. There is no short-circuit: an error in the right
/// operand surfaces even when the left one is unbound.
fn eval_binary(
    kind: Kind,
    left: &Node,
    right: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
    op: impl FnOnce(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let lhs = left.eval(env, ctx)?;
    let rhs = right.eval(env, ctx)?;

    match (lhs, rhs) {
        (Value::Unbound, _) | (_, Value::Unbound) => Ok(Value::Unbound),
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(op(a, b))),
        (Value::Node(node), _) | (_, Value::Node(node)) => {
            Err(EvalError::non_numeric_operand(kind, &node))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EvalContext {
        EvalContext::default()
    }

    #[test]
    fn test_neg_number() {
        let mut env = Environment::new();
        let result = eval_neg(&Node::constant(1.0), &mut env, &ctx()).unwrap();
        assert_eq!(result, Value::Number(-1.0));
    }

    #[test]
    fn test_neg_unbound() {
        let mut env = Environment::new();
        let result = eval_neg(&Node::symbol("x"), &mut env, &ctx()).unwrap();
        assert_eq!(result, Value::Unbound);
    }

    #[test]
    fn test_neg_of_derivative_fails() {
        let mut env = Environment::new();
        let der = Node::der(Node::symbol("x"), Node::symbol("x"));
        let result = eval_neg(&der, &mut env, &ctx());
        assert!(matches!(
            result,
            Err(EvalError::TypeError { kind: Kind::Neg, .. })
        ));
    }

    #[test]
    fn test_sum_and_mul_numbers() {
        let mut env = Environment::new();
        let two = Node::constant(2.0);
        let three = Node::constant(3.0);

        assert_eq!(
            eval_sum(&two, &three, &mut env, &ctx()).unwrap(),
            Value::Number(5.0)
        );
        assert_eq!(
            eval_mul(&two, &three, &mut env, &ctx()).unwrap(),
            Value::Number(6.0)
        );
    }

    #[test]
    fn test_unbound_on_either_side() {
        let mut env = Environment::new();
        let x = Node::symbol("x");
        let one = Node::constant(1.0);

        assert_eq!(eval_sum(&x, &one, &mut env, &ctx()).unwrap(), Value::Unbound);
        assert_eq!(eval_sum(&one, &x, &mut env, &ctx()).unwrap(), Value::Unbound);
        assert_eq!(eval_mul(&x, &one, &mut env, &ctx()).unwrap(), Value::Unbound);
        assert_eq!(eval_mul(&one, &x, &mut env, &ctx()).unwrap(), Value::Unbound);
    }

    #[test]
    fn test_no_short_circuit_on_unbound() {
        let mut env = Environment::new();
        let result = eval_sum(&Node::symbol("x"), &Node::none(), &mut env, &ctx());
        assert!(matches!(
            result,
            Err(EvalError::MalformedInvocation { .. })
        ));
    }

    #[test]
    fn test_node_operand_fails() {
        let mut env = Environment::new();
        let bind = Node::bind(Node::symbol("x"), Node::constant(1.0));
        let result = eval_mul(&bind, &Node::constant(2.0), &mut env, &ctx());
        assert!(matches!(
            result,
            Err(EvalError::TypeError { kind: Kind::Mul, .. })
        ));
    }
}
