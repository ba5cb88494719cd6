//! Scenario runner
//!
//! Every scenario runs against a freshly reset environment and declares
//! whether it is expected to complete or to fail. The runner only classifies
//! outcomes; it never interprets the engine's errors.

use std::io::{self, Write};

use anyhow::{anyhow, Context};
use colored::Colorize;
use quickbeam::{Environment, EvalContext, Evaluate, Node, Value};

/// Signature of a scenario body.
pub type ScenarioFn = fn(&mut Session<'_>) -> anyhow::Result<()>;

/// A named scenario with its expected outcome.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Identifier, `snake_case`
    pub name: &'static str,
    /// Whether the body is expected to return `Ok`
    pub expect_success: bool,
    /// The body
    pub run: ScenarioFn,
}

impl Scenario {
    /// A scenario expected to complete.
    pub const fn completes(name: &'static str, run: ScenarioFn) -> Self {
        Self {
            name,
            expect_success: true,
            run,
        }
    }

    /// A scenario expected to fail.
    pub const fn fails(name: &'static str, run: ScenarioFn) -> Self {
        Self {
            name,
            expect_success: false,
            run,
        }
    }

    /// The name with underscores turned into spaces.
    pub fn title(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// What a scenario body sees: the environment, the context, and an output
/// buffer for the lines it wants reported.
pub struct Session<'a> {
    env: &'a mut Environment,
    ctx: &'a EvalContext,
    output: Vec<String>,
}

impl<'a> Session<'a> {
    /// Wrap an environment and context.
    pub fn new(env: &'a mut Environment, ctx: &'a EvalContext) -> Self {
        Self {
            env,
            ctx,
            output: Vec::new(),
        }
    }

    /// Evaluate a node.
    pub fn eval(&mut self, node: &Node) -> anyhow::Result<Value> {
        node.eval(self.env, self.ctx)
            .with_context(|| format!("evaluating {}", node))
    }

    /// Evaluate `Bind(target, value)`.
    pub fn bind(&mut self, target: &Node, value: Node) -> anyhow::Result<()> {
        self.eval(&Node::bind(target.clone(), value))?;
        Ok(())
    }

    /// Evaluate `Der(expr, var)` and return the derivative node.
    pub fn derive(&mut self, expr: Node, var: &Node) -> anyhow::Result<Node> {
        match self.eval(&Node::der(expr, var.clone()))? {
            Value::Node(node) => Ok(node),
            other => Err(anyhow!("derivative produced {} instead of a node", other)),
        }
    }

    /// Record a line of output.
    pub fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// The environment, for inspection.
    pub fn env(&self) -> &Environment {
        &*self.env
    }

    fn into_output(self) -> Vec<String> {
        self.output
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Scenario name
    pub name: &'static str,
    /// Whether the scenario was expected to complete
    pub expected: bool,
    /// Lines the scenario recorded
    pub output: Vec<String>,
    /// The failure, rendered with its context chain, if the body failed
    pub error: Option<String>,
}

impl Outcome {
    /// Whether the body returned `Ok`.
    pub fn completed(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the observed outcome matches the expected one.
    pub fn passed(&self) -> bool {
        self.completed() == self.expected
    }

    /// Write the outcome in the runner's report format.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "> Test {}", self.name.replace('_', " "))?;
        for line in &self.output {
            writeln!(out, "{}", line)?;
        }
        if let Some(error) = &self.error {
            writeln!(out, "{}: {}", "EXCEPTION".yellow(), error)?;
        }
        if self.passed() {
            writeln!(out, "{}", "OK".green())
        } else {
            writeln!(out, "{}", "FAIL".red())
        }
    }
}

/// Runs scenarios one after another, resetting the environment in between.
#[derive(Debug, Default)]
pub struct Runner {
    env: Environment,
    ctx: EvalContext,
}

impl Runner {
    /// Create a runner evaluating with `ctx`.
    pub fn new(ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            ctx,
        }
    }

    /// Run a single scenario against a clean environment.
    pub fn run(&mut self, scenario: &Scenario) -> Outcome {
        self.env.reset();
        tracing::debug!(scenario = scenario.name, "running");

        let mut session = Session::new(&mut self.env, &self.ctx);
        let result = (scenario.run)(&mut session);
        let output = session.into_output();

        Outcome {
            name: scenario.name,
            expected: scenario.expect_success,
            output,
            error: result.err().map(|e| format!("{:#}", e)),
        }
    }

    /// Run every scenario in order.
    pub fn run_all<'s>(
        &mut self,
        scenarios: impl IntoIterator<Item = &'s Scenario>,
    ) -> Vec<Outcome> {
        scenarios.into_iter().map(|s| self.run(s)).collect()
    }
}

/// Counts of passed and failed outcomes.
pub fn summarize(outcomes: &[Outcome]) -> (usize, usize) {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    (passed, outcomes.len() - passed)
}
