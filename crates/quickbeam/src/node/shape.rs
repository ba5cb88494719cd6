//! Validated view of a node

use crate::error::{EvalError, Result};

use super::{Arg, Kind, Node};

/// A node's children, checked for arity and type and borrowed by role.
///
/// Obtained from [`Node::shape`]. The evaluator and the differentiation
/// rules match on this exhaustively, so adding a kind forces every consumer
/// to handle it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// `None()`
    None,
    /// `Const(value)`
    Const(f64),
    /// `Symbol(name)`
    Symbol(&'a str),
    /// `Bind(target, value)`
    Bind {
        /// The symbol node being bound
        target: &'a Node,
        /// The symbol's name
        name: &'a str,
        /// The node stored under `name`, unevaluated
        value: &'a Node,
    },
    /// `Neg(operand)`
    Neg(&'a Node),
    /// `Sum(left, right)`
    Sum(&'a Node, &'a Node),
    /// `Mul(left, right)`
    Mul(&'a Node, &'a Node),
    /// `Der(expr, var)`
    Der {
        /// Expression to differentiate
        expr: &'a Node,
        /// Differentiation variable
        var: &'a Node,
    },
}

impl Node {
    /// Validate this node's children and view them by role.
    ///
    /// # Errors
    ///
    /// - `ArityError` if the child count does not match [`Kind::arity`]
    /// - `TypeError` if a child has the wrong type: a non-number `Const`
    ///   payload, a non-name `Symbol` payload, a raw value where a node is
    ///   required, or a `Bind` target that is not a symbol node
    pub fn shape(&self) -> Result<Shape<'_>> {
        let kind = self.kind;
        let args = self.args();

        if args.len() != kind.arity() {
            return Err(EvalError::ArityError {
                kind,
                expected: kind.arity(),
                got: args.len(),
            });
        }

        match kind {
            Kind::None => Ok(Shape::None),
            Kind::Const => match &args[0] {
                Arg::Number(value) => Ok(Shape::Const(*value)),
                other => Err(EvalError::type_error(
                    kind,
                    format!(
                        "payload `{}` is a {}, expected a numeric primitive",
                        other,
                        other.type_name()
                    ),
                )),
            },
            Kind::Symbol => match &args[0] {
                Arg::Name(name) => Ok(Shape::Symbol(name.as_str())),
                other => Err(EvalError::type_error(
                    kind,
                    format!(
                        "symbol name `{}` is a {}, expected a string",
                        other,
                        other.type_name()
                    ),
                )),
            },
            Kind::Bind => {
                let target = node_arg(kind, &args[0], "bind target")?;
                let value = node_arg(kind, &args[1], "bound value")?;
                let name = target.symbol_name().ok_or_else(|| {
                    EvalError::type_error(
                        kind,
                        format!("bind target `{}` should be a Symbol node", target),
                    )
                })?;
                Ok(Shape::Bind {
                    target,
                    name,
                    value,
                })
            }
            Kind::Neg => Ok(Shape::Neg(node_arg(kind, &args[0], "operand")?)),
            Kind::Sum => Ok(Shape::Sum(
                node_arg(kind, &args[0], "left operand")?,
                node_arg(kind, &args[1], "right operand")?,
            )),
            Kind::Mul => Ok(Shape::Mul(
                node_arg(kind, &args[0], "left operand")?,
                node_arg(kind, &args[1], "right operand")?,
            )),
            Kind::Der => Ok(Shape::Der {
                expr: node_arg(kind, &args[0], "differentiated expression")?,
                var: node_arg(kind, &args[1], "differentiation variable")?,
            }),
        }
    }
}

fn node_arg<'a>(kind: Kind, arg: &'a Arg, role: &str) -> Result<&'a Node> {
    arg.as_node()
        .ok_or_else(|| EvalError::expected_node(kind, role, arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_well_formed() {
        let x = Node::symbol("x");
        let one = Node::constant(1.0);

        assert_eq!(Node::none().shape().unwrap(), Shape::None);
        assert_eq!(one.shape().unwrap(), Shape::Const(1.0));
        assert_eq!(x.shape().unwrap(), Shape::Symbol("x"));

        let bind = Node::bind(x.clone(), one.clone());
        match bind.shape().unwrap() {
            Shape::Bind {
                target,
                name,
                value,
            } => {
                assert_eq!(target, &x);
                assert_eq!(name, "x");
                assert_eq!(value, &one);
            }
            other => panic!("Expected Bind shape, got {:?}", other),
        }

        let sum = Node::sum(x.clone(), one.clone());
        assert_eq!(sum.shape().unwrap(), Shape::Sum(&x, &one));
    }

    #[test]
    fn test_shape_arity_checked_first() {
        let node = Node::new(Kind::Const, [Arg::from("x"), Arg::from("y")]);
        assert_eq!(
            node.shape().unwrap_err(),
            EvalError::ArityError {
                kind: Kind::Const,
                expected: 1,
                got: 2,
            }
        );
    }

    #[test]
    fn test_shape_none_with_children() {
        let node = Node::new(Kind::None, [Arg::from(1)]);
        assert!(matches!(
            node.shape(),
            Err(EvalError::ArityError { kind: Kind::None, .. })
        ));
    }

    #[test]
    fn test_shape_const_from_node() {
        let node = Node::new(Kind::Const, [Arg::from(Node::constant(3.0))]);
        assert!(matches!(
            node.shape(),
            Err(EvalError::TypeError {
                kind: Kind::Const,
                ..
            })
        ));
    }

    #[test]
    fn test_shape_symbol_from_number() {
        let node = Node::new(Kind::Symbol, [Arg::from(7)]);
        assert!(matches!(
            node.shape(),
            Err(EvalError::TypeError {
                kind: Kind::Symbol,
                ..
            })
        ));
    }

    #[test]
    fn test_shape_raw_operands() {
        let node = Node::new(Kind::Sum, [Arg::from(1), Arg::from(2)]);
        assert!(matches!(
            node.shape(),
            Err(EvalError::TypeError { kind: Kind::Sum, .. })
        ));
    }

    #[test]
    fn test_shape_bind_target_not_symbol() {
        let literal_name = Node::new(
            Kind::Bind,
            [Arg::from("x"), Arg::from(Node::constant(2.0))],
        );
        assert!(matches!(
            literal_name.shape(),
            Err(EvalError::TypeError { kind: Kind::Bind, .. })
        ));

        let const_target = Node::bind(Node::constant(1.0), Node::constant(2.0));
        match const_target.shape().unwrap_err() {
            EvalError::TypeError { message, .. } => {
                assert!(message.contains("should be a Symbol node"));
            }
            other => panic!("Expected TypeError, got {:?}", other),
        }
    }
}
