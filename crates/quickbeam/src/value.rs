//! Evaluation results

use std::fmt;

use crate::node::Node;

/// What evaluating a node produces.
///
/// `Unbound` is its own variant rather than a reserved number or string, so
/// it can never collide with a legitimate result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real number
    Number(f64),

    /// A symbol lookup found no binding (directly or somewhere below)
    Unbound,

    /// A node: the rewritten tree produced by `Der`, or the symbol returned
    /// by `Bind`
    Node(Node),
}

impl Value {
    /// Check whether this is the `Unbound` result.
    pub fn is_unbound(&self) -> bool {
        matches!(self, Value::Unbound)
    }

    /// The number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The node, if this is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Take the node out, if this is one.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Unbound => write!(f, "UNBOUND"),
            Value::Node(node) => write!(f, "{}", node),
        }
    }
}
