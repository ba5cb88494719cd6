//! Node evaluation

pub mod arith;
pub mod binding;

use crate::node::{DisplayArgs, Shape};
use crate::{differentiate, Environment, EvalContext, EvalError, Node, Value};

/// Trait for evaluating expression nodes.
///
/// This is the core abstraction of the evaluator: the dispatcher validates
/// a node's shape, then recurses into its children, consulting the
/// environment for symbols and mutating it for binds.
pub trait Evaluate {
    /// Evaluate this node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Node {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        env.enter_eval(ctx.max_depth)?;

        if ctx.trace {
            trace_call(self, env.depth());
        }

        let result = dispatch(self, env, ctx);
        env.exit_eval();
        result
    }
}

// Out of line to keep the recursive eval frame small.
#[inline(never)]
fn trace_call(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth.saturating_sub(1));
    tracing::debug!(
        depth,
        "{}calling {} with args {}",
        indent,
        node.kind(),
        DisplayArgs(node.args())
    );
}

fn dispatch(node: &Node, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
    match node.shape()? {
        Shape::None => Err(EvalError::MalformedInvocation {
            message: "a None node cannot be evaluated".to_string(),
        }),
        Shape::Const(value) => Ok(Value::Number(value)),
        Shape::Symbol(name) => env.lookup(name, ctx),
        Shape::Bind {
            target,
            name,
            value,
        } => Ok(binding::eval_bind(target, name, value, env)),
        Shape::Neg(operand) => arith::eval_neg(operand, env, ctx),
        Shape::Sum(left, right) => arith::eval_sum(left, right, env, ctx),
        Shape::Mul(left, right) => arith::eval_mul(left, right, env, ctx),
        Shape::Der { expr, var } => differentiate(expr, var, env, ctx).map(Value::Node),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a node (convenience wrapper).
pub fn eval_node(
    node: &Node,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    node.eval(env, ctx)
}
