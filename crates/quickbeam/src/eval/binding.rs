//! Bind evaluation

use crate::{Environment, Node, Value};

/// Evaluate `Bind(target, value)`.
///
/// Stores `value`, unevaluated, under the target symbol's name and returns
/// the target symbol node (not the bind node). Binding never evaluates the
/// value, so mutually dependent bindings can be set up freely; a cycle only
/// surfaces when one of the symbols is looked up.
pub fn eval_bind(target: &Node, name: &str, value: &Node, env: &mut Environment) -> Value {
    env.bind(name, value.clone());
    Value::Node(target.clone())
}
