//! # Quickbeam
//!
//! A small symbolic-expression evaluator.
//!
//! Arithmetic expressions are trees of typed nodes: constants, symbol
//! references, binds, negation, sums, products and derivatives. Evaluating a
//! node walks the tree depth-first against an [`Environment`] that maps
//! symbol names to bound, unevaluated nodes. Differentiation is a structural
//! rewrite that turns a tree into the tree of its derivative.
//!
//! ## Architecture
//!
//! - **Nodes** ([`Node`], [`Kind`], [`Arg`]): built without validation;
//!   [`Node::shape`] checks arity and child types at evaluation time
//! - **Evaluator** ([`Evaluate`]): exhaustive dispatch over [`Shape`]
//! - **Environment**: lazy bindings plus a per-lookup resolution stack for
//!   cycle detection
//! - **Differentiation** ([`differentiate`]): constant, symbol, sum and
//!   product rules
//!
//! ## Example
//!
//! ```
//! use quickbeam::{Environment, EvalContext, Evaluate, Node, Value};
//!
//! let mut env = Environment::new();
//! let ctx = EvalContext::default();
//!
//! // d/dx (1 + x + x*x)
//! let x = Node::symbol("x");
//! let f = Node::sum(
//!     Node::sum(Node::constant(1.0), x.clone()),
//!     Node::mul(x.clone(), x.clone()),
//! );
//! let df = Node::der(f, x.clone())
//!     .eval(&mut env, &ctx)
//!     .unwrap()
//!     .into_node()
//!     .unwrap();
//!
//! assert_eq!(df.eval(&mut env, &ctx).unwrap(), Value::Unbound);
//!
//! Node::bind(x, Node::constant(3.0)).eval(&mut env, &ctx).unwrap();
//! assert_eq!(df.eval(&mut env, &ctx).unwrap(), Value::Number(7.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod derivative;
pub mod environment;
pub mod error;
pub mod eval;
pub mod node;
pub mod value;

// Re-export main types
pub use context::{EvalContext, DEFAULT_MAX_DEPTH};
pub use derivative::differentiate;
pub use environment::Environment;
pub use error::{EvalError, Result};
pub use eval::{eval_node, Evaluate};
pub use node::{Arg, DisplayArgs, Kind, Node, Shape};
pub use value::Value;

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
