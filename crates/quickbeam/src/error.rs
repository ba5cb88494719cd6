//! Error types for Quickbeam evaluation

use thiserror::Error;

use crate::node::{Arg, Kind, Node};

/// Errors raised while evaluating or differentiating a node.
///
/// Every failure is immediate: the engine never retries or recovers, and
/// leaves classification to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Attempt to evaluate the placeholder node
    #[error("Malformed invocation: {message}")]
    MalformedInvocation {
        /// What was attempted
        message: String,
    },

    /// Wrong number of children for a node kind
    #[error("{kind} requires {expected} argument(s), got {got}")]
    ArityError {
        /// Kind of the offending node
        kind: Kind,
        /// Arity of that kind
        expected: usize,
        /// Number of children actually present
        got: usize,
    },

    /// A child, or an evaluated operand, of the wrong type
    #[error("Type error in {kind}: {message}")]
    TypeError {
        /// Kind of the node being evaluated
        kind: Kind,
        /// Description of the mismatch
        message: String,
    },

    /// A symbol lookup chain came back to a symbol still being resolved
    #[error(
        "Circular dependency: `{name}` depends on symbols that ultimately depend on itself ({})",
        .trail.join(" -> ")
    )]
    CircularDependency {
        /// The symbol that was revisited
        name: String,
        /// Names resolved along the chain, ending with the revisited one
        trail: Vec<String>,
    },

    /// Differentiation of a kind with no rule
    #[error("Unsupported operation: no derivative rule for {kind}")]
    UnsupportedOperation {
        /// Kind of the node that was differentiated
        kind: Kind,
    },

    /// Evaluation nested deeper than the configured limit
    #[error("Recursion limit exceeded: depth {depth} (max {max})")]
    RecursionLimit {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max: usize,
    },
}

impl EvalError {
    /// Create a type error for a node of the given kind.
    pub fn type_error(kind: Kind, message: impl Into<String>) -> Self {
        EvalError::TypeError {
            kind,
            message: message.into(),
        }
    }

    /// Type error for a child that should have been a node.
    pub(crate) fn expected_node(kind: Kind, role: &str, got: &Arg) -> Self {
        Self::type_error(
            kind,
            format!(
                "{} `{}` is a {}, but all arguments must be nodes",
                role,
                got,
                got.type_name()
            ),
        )
    }

    /// Type error for an operand that evaluated to a node instead of a number.
    pub(crate) fn non_numeric_operand(kind: Kind, got: &Node) -> Self {
        Self::type_error(
            kind,
            format!("operand evaluated to the node `{}`, expected a number", got),
        )
    }
}

/// Result type alias for Quickbeam operations
pub type Result<T, E = EvalError> = std::result::Result<T, E>;
