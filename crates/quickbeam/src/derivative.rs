//! Structural differentiation
//!
//! Rewrites an expression tree into the tree of its derivative with respect
//! to a symbol. The rewrite is purely structural: symbols are compared by
//! name and never looked up, and the output is not simplified. Evaluate the
//! returned node to get the derivative's value at the current bindings.
//!
//! | Input       | Derivative                          |
//! |-------------|-------------------------------------|
//! | `Const(c)`  | `Const(0)`                          |
//! | `Symbol(n)` | `Const(1)` if `n` is the variable, else `Const(0)` |
//! | `Sum(a, b)` | `Sum(a', b')`                       |
//! | `Mul(a, b)` | `Sum(Mul(a', b), Mul(a, b'))`       |
//!
//! Sub-derivatives are computed eagerly, so the result never contains `Der`
//! nodes.

use crate::error::{EvalError, Result};
use crate::node::{Kind, Node, Shape};
use crate::{Environment, EvalContext};

/// Differentiate `expr` with respect to the symbol node `var`.
///
/// Each rewritten subtree counts one level against `ctx.max_depth`, on top of
/// whatever depth `env` is already at, so a tree too deep to evaluate is also
/// too deep to differentiate.
///
/// # Errors
///
/// - `TypeError` if `var` is not a symbol node
/// - `ArityError` / `TypeError` if `expr`, or any subtree the rules descend
///   into, is malformed
/// - `UnsupportedOperation` if a subtree has no differentiation rule
///   (`None`, `Bind`, `Neg`, `Der`)
/// - `RecursionLimit` if the rules nest deeper than `ctx.max_depth`
///
/// # Example
///
/// ```
/// use quickbeam::{differentiate, Environment, EvalContext, Node};
///
/// let mut env = Environment::new();
/// let x = Node::symbol("x");
/// let square = Node::mul(x.clone(), x.clone());
///
/// let derivative = differentiate(&square, &x, &mut env, &EvalContext::default()).unwrap();
/// assert_eq!(
///     derivative.to_string(),
///     "Sum(Mul(Const(1), Symbol(x)), Mul(Symbol(x), Const(1)))"
/// );
/// ```
pub fn differentiate(
    expr: &Node,
    var: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Node> {
    let name = var.symbol_name().ok_or_else(|| {
        EvalError::type_error(
            Kind::Der,
            format!("differentiation variable `{}` should be a Symbol node", var),
        )
    })?;
    derive(expr, name, env, ctx)
}

fn derive(expr: &Node, var: &str, env: &mut Environment, ctx: &EvalContext) -> Result<Node> {
    env.enter_eval(ctx.max_depth)?;
    let result = apply_rule(expr, var, env, ctx);
    env.exit_eval();
    result
}

fn apply_rule(expr: &Node, var: &str, env: &mut Environment, ctx: &EvalContext) -> Result<Node> {
    match expr.shape()? {
        Shape::Const(_) => Ok(Node::constant(0.0)),

        Shape::Symbol(name) => {
            if name == var {
                Ok(Node::constant(1.0))
            } else {
                Ok(Node::constant(0.0))
            }
        }

        Shape::Sum(a, b) => {
            let da = derive(a, var, env, ctx)?;
            let db = derive(b, var, env, ctx)?;
            Ok(Node::sum(da, db))
        }

        // Product rule
        Shape::Mul(a, b) => {
            let da = derive(a, var, env, ctx)?;
            let db = derive(b, var, env, ctx)?;
            Ok(Node::sum(
                Node::mul(da, b.clone()),
                Node::mul(a.clone(), db),
            ))
        }

        Shape::None | Shape::Bind { .. } | Shape::Neg(_) | Shape::Der { .. } => {
            Err(EvalError::UnsupportedOperation { kind: expr.kind() })
        }
    }
}
