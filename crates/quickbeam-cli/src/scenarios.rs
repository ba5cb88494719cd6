//! The built-in scenario suite
//!
//! Each scenario exercises one behavior of the evaluator end to end. The ones
//! registered with [`Scenario::fails`] construct malformed trees or cycles and
//! must surface an error; the rest must complete and check what they compute.

use anyhow::ensure;
use quickbeam::{Arg, Kind, Node, Value};

use crate::runner::{Scenario, Session};

/// Every scenario, in run order.
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario::fails("null_function", null_function),
        Scenario::completes("constant_from_value", constant_from_value),
        Scenario::fails("constant_from_constant", constant_from_constant),
        Scenario::completes("sum_of_constants", sum_of_constants),
        Scenario::fails("sum_from_raw_constants", sum_from_raw_constants),
        Scenario::completes("sum_sums", sum_sums),
        Scenario::completes("multiply_constants", multiply_constants),
        Scenario::completes("change_args", change_args),
        Scenario::completes("unbound_variable", unbound_variable),
        Scenario::completes("bind_to_constant", bind_to_constant),
        Scenario::fails("bind_to_raw_value", bind_to_raw_value),
        Scenario::fails("bind_with_literal_name", bind_with_literal_name),
        Scenario::completes(
            "bind_variable_to_variable_to_constant",
            bind_variable_to_variable_to_constant,
        ),
        Scenario::completes("bind_to_unbound_then_bound", bind_to_unbound_then_bound),
        Scenario::fails("circular_binding", circular_binding),
        Scenario::completes("sum_of_variables", sum_of_variables),
        Scenario::completes("mul_of_variables", mul_of_variables),
        Scenario::completes("negative_constant", negative_constant),
        Scenario::fails("derivate_raw_primitive", derivate_raw_primitive),
        Scenario::completes("derivate_constant", derivate_constant),
        Scenario::completes("derivate_symbol", derivate_symbol),
        Scenario::completes("derivative_polynomial", derivative_polynomial),
    ]
}

/// Scenarios whose name contains `pattern`.
pub fn matching(pattern: &str) -> Vec<Scenario> {
    all()
        .into_iter()
        .filter(|s| s.name.contains(pattern))
        .collect()
}

fn c(value: f64) -> Node {
    Node::constant(value)
}

fn sym(name: &str) -> Node {
    Node::symbol(name)
}

fn expect_number(value: &Value, expected: f64) -> anyhow::Result<()> {
    ensure!(
        *value == Value::Number(expected),
        "expected {}, got {}",
        expected,
        value
    );
    Ok(())
}

fn expect_unbound(value: &Value) -> anyhow::Result<()> {
    ensure!(value.is_unbound(), "expected UNBOUND, got {}", value);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Constants and arithmetic
// ═══════════════════════════════════════════════════════════════════════

fn null_function(s: &mut Session<'_>) -> anyhow::Result<()> {
    s.eval(&Node::none())?;
    Ok(())
}

fn constant_from_value(s: &mut Session<'_>) -> anyhow::Result<()> {
    let node = c(3.0);
    let value = s.eval(&node)?;
    s.say(format!("{} is: {}", node, value));
    expect_number(&value, 3.0)
}

fn constant_from_constant(s: &mut Session<'_>) -> anyhow::Result<()> {
    let node = Node::new(Kind::Const, [Arg::from(c(3.0))]);
    let value = s.eval(&node)?;
    s.say(format!("{} is: {}", node, value));
    Ok(())
}

fn sum_of_constants(s: &mut Session<'_>) -> anyhow::Result<()> {
    let value = s.eval(&Node::sum(c(3.0), c(4.0)))?;
    s.say(format!("3 + 4 is: {}", value));
    expect_number(&value, 7.0)
}

fn sum_from_raw_constants(s: &mut Session<'_>) -> anyhow::Result<()> {
    let value = s.eval(&Node::new(Kind::Sum, [Arg::from(1), Arg::from(2)]))?;
    s.say(format!("1 + 2 is: {}", value));
    Ok(())
}

fn sum_sums(s: &mut Session<'_>) -> anyhow::Result<()> {
    let node = Node::sum(Node::sum(c(1.0), c(2.0)), Node::sum(c(1.0), c(3.0)));
    let value = s.eval(&node)?;
    s.say(format!("(1 + 2) + (1 + 3) is: {}", value));
    expect_number(&value, 7.0)
}

fn multiply_constants(s: &mut Session<'_>) -> anyhow::Result<()> {
    let value = s.eval(&Node::mul(c(2.0), c(3.0)))?;
    s.say(format!("2 * 3 is: {}", value));
    expect_number(&value, 6.0)
}

fn change_args(s: &mut Session<'_>) -> anyhow::Result<()> {
    let one = c(1.0);
    let two = c(2.0);

    let sum_1_2 = Node::sum(one, two.clone());
    let value = s.eval(&sum_1_2)?;
    s.say(format!("1 + 2 is: {}", value));
    expect_number(&value, 3.0)?;

    let sum_2_2 = sum_1_2.with_args([Arg::from(&two), Arg::from(&two)]);
    let value = s.eval(&sum_2_2)?;
    s.say(format!("2 + 2 is: {}", value));
    expect_number(&value, 4.0)
}

fn negative_constant(s: &mut Session<'_>) -> anyhow::Result<()> {
    let value = s.eval(&Node::neg(c(1.0)))?;
    s.say(format!("-(1) is: {}", value));
    expect_number(&value, -1.0)
}

// ═══════════════════════════════════════════════════════════════════════
// Symbols and binding
// ═══════════════════════════════════════════════════════════════════════

fn unbound_variable(s: &mut Session<'_>) -> anyhow::Result<()> {
    let value = s.eval(&sym("x"))?;
    s.say(format!("x is: {}", value));
    expect_unbound(&value)
}

fn bind_to_constant(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x = sym("x");
    s.bind(&x, c(1.0))?;
    let value = s.eval(&x)?;
    s.say(format!("x is: {}", value));
    expect_number(&value, 1.0)
}

fn bind_to_raw_value(s: &mut Session<'_>) -> anyhow::Result<()> {
    s.eval(&Node::new(Kind::Bind, [Arg::from(sym("x")), Arg::from(2)]))?;
    Ok(())
}

fn bind_with_literal_name(s: &mut Session<'_>) -> anyhow::Result<()> {
    s.eval(&Node::new(Kind::Bind, [Arg::from("x"), Arg::from(c(2.0))]))?;
    Ok(())
}

fn bind_variable_to_variable_to_constant(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x = sym("x");
    let y = sym("y");
    s.bind(&y, c(2.0))?;
    s.bind(&x, y.clone())?;

    let y_value = s.eval(&y)?;
    let x_value = s.eval(&x)?;
    s.say(format!("y is {}, x is {}", y_value, x_value));
    expect_number(&y_value, 2.0)?;
    expect_number(&x_value, 2.0)
}

fn bind_to_unbound_then_bound(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x = sym("x");
    let y = sym("y");

    s.bind(&x, y.clone())?;
    let y_value = s.eval(&y)?;
    let x_value = s.eval(&x)?;
    s.say(format!("y is {}, x is {}", y_value, x_value));
    expect_unbound(&y_value)?;
    expect_unbound(&x_value)?;

    s.bind(&y, c(2.0))?;
    let y_value = s.eval(&y)?;
    let x_value = s.eval(&x)?;
    s.say(format!("y is {}, x is {}", y_value, x_value));
    expect_number(&y_value, 2.0)?;
    expect_number(&x_value, 2.0)
}

fn circular_binding(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x = sym("x");
    let y = sym("y");
    s.bind(&x, y.clone())?;
    s.bind(&y, x.clone())?;

    let value = s.eval(&x)?;
    s.say(format!("x is: {}", value));
    Ok(())
}

fn sum_of_variables(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x_plus_y = Node::sum(sym("x"), sym("y"));

    s.bind(&sym("x"), c(1.0))?;
    let value = s.eval(&x_plus_y)?;
    s.say(format!("x = 1; x + y is: {}", value));
    expect_unbound(&value)?;

    s.bind(&sym("y"), c(1.0))?;
    let value = s.eval(&x_plus_y)?;
    s.say(format!("y = 1; x + y is now: {}", value));
    expect_number(&value, 2.0)
}

fn mul_of_variables(s: &mut Session<'_>) -> anyhow::Result<()> {
    s.bind(&sym("x"), c(1.0))?;
    s.bind(&sym("y"), c(2.0))?;

    let value = s.eval(&Node::mul(Node::mul(sym("x"), sym("y")), sym("y")))?;
    s.say(format!("x = 1; y = 2; x * y * y is: {}", value));
    expect_number(&value, 4.0)
}

// ═══════════════════════════════════════════════════════════════════════
// Derivatives
// ═══════════════════════════════════════════════════════════════════════

fn derivate_raw_primitive(s: &mut Session<'_>) -> anyhow::Result<()> {
    s.eval(&Node::new(Kind::Der, [Arg::from(2), Arg::from(sym("x"))]))?;
    Ok(())
}

fn derivate_constant(s: &mut Session<'_>) -> anyhow::Result<()> {
    let derivative = s.derive(c(5.0), &sym("x"))?;
    let value = s.eval(&derivative)?;
    s.say(format!("d5/dx is: {}", value));
    expect_number(&value, 0.0)
}

fn derivate_symbol(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x = sym("x");
    let derivative = s.derive(x.clone(), &x)?;
    let value = s.eval(&derivative)?;
    s.say(format!("dx/dx is: {}", value));
    expect_number(&value, 1.0)
}

fn derivative_polynomial(s: &mut Session<'_>) -> anyhow::Result<()> {
    let x = sym("x");
    let f = Node::sum(Node::sum(c(1.0), x.clone()), Node::mul(x.clone(), x.clone()));

    let df = s.derive(f, &x)?;
    s.say(format!("d(1 + x + x*x)/dx is: {}", df));

    let value = s.eval(&df)?;
    s.say(format!("with x unbound: {}", value));
    expect_unbound(&value)?;

    s.bind(&x, c(3.0))?;
    let value = s.eval(&df)?;
    s.say(format!("with x = 3: {}", value));
    expect_number(&value, 7.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let scenarios = all();
        let names: HashSet<_> = scenarios.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn test_matching() {
        let derivatives = matching("deriv");
        assert_eq!(derivatives.len(), 4);
        assert!(matching("no_such_scenario").is_empty());
        assert_eq!(matching("").len(), all().len());
    }
}
