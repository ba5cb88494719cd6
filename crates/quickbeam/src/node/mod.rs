//! Expression nodes
//!
//! A [`Node`] is a kind tag plus an ordered list of children. Building a
//! node never validates anything: arity and child types are checked when the
//! node is evaluated or differentiated, through [`Node::shape`].
//!
//! Nodes are immutable. Children live behind an `Arc`, so cloning a node is
//! cheap and a subtree can be shared between several parents (the
//! differentiation rules rely on this). To re-parameterize a node, use
//! [`Node::with_args`], which returns a new node.

mod display;
mod shape;

pub use display::DisplayArgs;
pub use shape::Shape;

use std::fmt;
use std::sync::Arc;

/// The operation a node performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Placeholder; evaluating it always fails
    None,
    /// Numeric literal
    Const,
    /// Named reference resolved through the environment
    Symbol,
    /// Assignment of a node to a symbol
    Bind,
    /// Negation
    Neg,
    /// Addition
    Sum,
    /// Multiplication
    Mul,
    /// Structural derivative with respect to a symbol
    Der,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 8] = [
        Kind::None,
        Kind::Const,
        Kind::Symbol,
        Kind::Bind,
        Kind::Neg,
        Kind::Sum,
        Kind::Mul,
        Kind::Der,
    ];

    /// Number of children a well-formed node of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            Kind::None => 0,
            Kind::Const | Kind::Symbol | Kind::Neg => 1,
            Kind::Bind | Kind::Sum | Kind::Mul | Kind::Der => 2,
        }
    }

    /// The name used when rendering a node of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::None => "None",
            Kind::Const => "Const",
            Kind::Symbol => "Symbol",
            Kind::Bind => "Bind",
            Kind::Neg => "Neg",
            Kind::Sum => "Sum",
            Kind::Mul => "Mul",
            Kind::Der => "Der",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single child of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Raw number (the payload of a `Const`)
    Number(f64),
    /// Raw name (the payload of a `Symbol`)
    Name(String),
    /// Nested node
    Node(Node),
}

impl Arg {
    /// Human-readable name of this child's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Number(_) => "number",
            Arg::Name(_) => "name",
            Arg::Node(_) => "node",
        }
    }

    /// The nested node, if this child is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Arg::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Number(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Number(f64::from(value))
    }
}

impl From<&str> for Arg {
    fn from(name: &str) -> Self {
        Arg::Name(name.to_string())
    }
}

impl From<String> for Arg {
    fn from(name: String) -> Self {
        Arg::Name(name)
    }
}

impl From<Node> for Arg {
    fn from(node: Node) -> Self {
        Arg::Node(node)
    }
}

impl From<&Node> for Arg {
    fn from(node: &Node) -> Self {
        Arg::Node(node.clone())
    }
}

/// An expression tree node.
///
/// # Example
///
/// ```
/// use quickbeam::{Environment, EvalContext, Evaluate, Node, Value};
///
/// let mut env = Environment::new();
/// let ctx = EvalContext::default();
///
/// let product = Node::mul(Node::constant(2.0), Node::constant(3.0));
/// assert_eq!(product.to_string(), "Mul(Const(2), Const(3))");
/// assert_eq!(product.eval(&mut env, &ctx).unwrap(), Value::Number(6.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: Kind,
    args: Arc<[Arg]>,
}

impl Node {
    /// Build a node from a kind and any list of children.
    ///
    /// No validation happens here; a malformed node only fails once it is
    /// evaluated.
    pub fn new(kind: Kind, args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            kind,
            args: args.into_iter().collect(),
        }
    }

    /// The placeholder node.
    pub fn none() -> Self {
        Self::new(Kind::None, Vec::new())
    }

    /// `Const(value)`
    pub fn constant(value: f64) -> Self {
        Self::new(Kind::Const, [Arg::Number(value)])
    }

    /// `Symbol(name)`
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(Kind::Symbol, [Arg::Name(name.into())])
    }

    /// `Bind(target, value)`; `target` should be a symbol node.
    pub fn bind(target: Node, value: Node) -> Self {
        Self::new(Kind::Bind, [Arg::Node(target), Arg::Node(value)])
    }

    /// `Neg(operand)`
    pub fn neg(operand: Node) -> Self {
        Self::new(Kind::Neg, [Arg::Node(operand)])
    }

    /// `Sum(left, right)`
    pub fn sum(left: Node, right: Node) -> Self {
        Self::new(Kind::Sum, [Arg::Node(left), Arg::Node(right)])
    }

    /// `Mul(left, right)`
    pub fn mul(left: Node, right: Node) -> Self {
        Self::new(Kind::Mul, [Arg::Node(left), Arg::Node(right)])
    }

    /// `Der(expr, var)`: the derivative of `expr` with respect to the
    /// symbol node `var`.
    pub fn der(expr: Node, var: Node) -> Self {
        Self::new(Kind::Der, [Arg::Node(expr), Arg::Node(var)])
    }

    /// A new node of the same kind carrying `args` instead.
    ///
    /// The receiver and any clones of it keep their original children.
    pub fn with_args(&self, args: impl IntoIterator<Item = Arg>) -> Self {
        Self::new(self.kind, args)
    }

    /// This node's kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// This node's children.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// The name carried by a well-formed symbol node.
    ///
    /// Returns `None` for any other kind, and for symbol nodes whose single
    /// child is not a name.
    pub fn symbol_name(&self) -> Option<&str> {
        match (self.kind, &*self.args) {
            (Kind::Symbol, [Arg::Name(name)]) => Some(name.as_str()),
            _ => None,
        }
    }
}
