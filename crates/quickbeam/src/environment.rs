//! Runtime environment mapping symbol names to bound nodes

mod guard;

use indexmap::{IndexMap, IndexSet};

use crate::error::{EvalError, Result};
use crate::eval::Evaluate;
use crate::{EvalContext, Node, Value};

/// The environment symbols are resolved against.
///
/// Bindings are lazy: a name maps to the node it was bound to, unevaluated,
/// and that node is evaluated afresh on every lookup. Rebinding a name
/// overwrites the previous node. Bindings are never removed individually;
/// [`Environment::reset`] clears everything between sessions.
///
/// Cycle detection uses a resolution stack: each lookup pushes its name
/// while the bound node is evaluated and pops it afterwards, so a lookup
/// only ever sees the chain of symbols it is nested inside.
///
/// # Example
///
/// ```
/// use quickbeam::{Environment, EvalContext, Node, Value};
///
/// let mut env = Environment::new();
/// let ctx = EvalContext::default();
///
/// assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Unbound);
///
/// env.bind("y", Node::constant(2.0));
/// env.bind("x", Node::symbol("y"));
/// assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Number(2.0));
///
/// env.reset();
/// assert!(env.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Bound nodes, in first-binding order
    bindings: IndexMap<String, Node>,

    /// Names currently being resolved, outermost first
    resolving: IndexSet<String>,

    /// Current evaluation depth (for recursion limiting)
    depth: usize,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `node`, replacing any previous binding.
    ///
    /// The node is stored as is; it is not evaluated or checked.
    pub fn bind(&mut self, name: impl Into<String>, node: Node) {
        self.bindings.insert(name.into(), node);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Resolve `name` by evaluating the node bound to it.
    ///
    /// Returns `Value::Unbound` if nothing is bound to `name`.
    ///
    /// # Errors
    ///
    /// - `CircularDependency` if `name` is already being resolved further up
    ///   the current lookup chain
    /// - any error raised while evaluating the bound node
    pub fn lookup(&mut self, name: &str, ctx: &EvalContext) -> Result<Value> {
        let Some(node) = self.bindings.get(name).cloned() else {
            if ctx.trace {
                tracing::trace!(symbol = name, "no binding");
            }
            return Ok(Value::Unbound);
        };

        if self.resolving.contains(name) {
            let mut trail: Vec<String> = self.resolving.iter().cloned().collect();
            trail.push(name.to_string());
            return Err(EvalError::CircularDependency {
                name: name.to_string(),
                trail,
            });
        }

        if ctx.trace {
            tracing::trace!(symbol = name, bound = %node, "resolving");
        }
        let mut guard = self.resolution_guard(name);
        node.eval(&mut guard, ctx)
    }

    /// The node bound to `name`, without evaluating it.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.bindings.get(name)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Names on the current resolution chain, outermost first.
    pub fn resolving(&self) -> Vec<&str> {
        self.resolving.iter().map(String::as_str).collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a nested evaluation. Returns error if `max` would be exceeded.
    pub fn enter_eval(&mut self, max: usize) -> Result<()> {
        if self.depth >= max {
            return Err(EvalError::RecursionLimit {
                depth: self.depth,
                max,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a nested evaluation.
    pub fn exit_eval(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get current evaluation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings in first-binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.bindings.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Get all bound names.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Clear all bindings and transient lookup state.
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.resolving.clear();
        self.depth = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_missing_is_unbound() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();
        assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Unbound);
    }

    #[test]
    fn test_bind_is_lazy() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        env.bind("x", Node::symbol("y"));
        assert_eq!(env.get("x"), Some(&Node::symbol("y")));
        assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Unbound);

        env.bind("y", Node::constant(4.0));
        assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Number(4.0));
    }

    #[test]
    fn test_rebind_overwrites() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        env.bind("x", Node::constant(1.0));
        env.bind("x", Node::constant(2.0));

        assert_eq!(env.len(), 1);
        assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn test_circular_dependency_trail() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        env.bind("x", Node::symbol("y"));
        env.bind("y", Node::symbol("z"));
        env.bind("z", Node::symbol("x"));

        match env.lookup("y", &ctx).unwrap_err() {
            EvalError::CircularDependency { name, trail } => {
                assert_eq!(name, "y");
                assert_eq!(trail, vec!["y", "z", "x", "y"]);
            }
            other => panic!("Expected CircularDependency, got {:?}", other),
        }
        assert!(env.resolving().is_empty());
        assert_eq!(env.depth(), 0);
    }

    #[test]
    fn test_self_reference() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        env.bind("x", Node::sum(Node::symbol("x"), Node::constant(1.0)));

        assert!(matches!(
            env.lookup("x", &ctx),
            Err(EvalError::CircularDependency { .. })
        ));
    }

    #[test]
    fn test_sibling_lookups_do_not_interfere() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        env.bind("y", Node::constant(3.0));
        env.bind("x", Node::mul(Node::symbol("y"), Node::symbol("y")));

        assert_eq!(env.lookup("x", &ctx).unwrap(), Value::Number(9.0));
        assert!(env.resolving().is_empty());
    }

    #[test]
    fn test_enter_eval_limit() {
        let mut env = Environment::new();
        env.enter_eval(2).unwrap();
        env.enter_eval(2).unwrap();
        assert_eq!(
            env.enter_eval(2).unwrap_err(),
            EvalError::RecursionLimit { depth: 2, max: 2 }
        );
        env.exit_eval();
        env.exit_eval();
        env.exit_eval();
        assert_eq!(env.depth(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut env = Environment::new();
        env.bind("a", Node::constant(1.0));
        env.bind("b", Node::constant(2.0));
        env.enter_eval(10).unwrap();

        env.reset();

        assert!(env.is_empty());
        assert_eq!(env.depth(), 0);
        assert!(!env.contains("a"));
    }

    #[test]
    fn test_names_in_binding_order() {
        let mut env = Environment::new();
        env.bind("b", Node::constant(1.0));
        env.bind("a", Node::constant(2.0));
        env.bind("b", Node::constant(3.0));

        assert_eq!(env.names(), vec!["b", "a"]);
        let pairs: Vec<(&str, String)> = env.iter().map(|(n, v)| (n, v.to_string())).collect();
        assert_eq!(
            pairs,
            vec![("b", "Const(3)".to_string()), ("a", "Const(2)".to_string())]
        );
    }
}
