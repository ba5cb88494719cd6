//! Quickbeam CLI
//!
//! Usage:
//!   quickbeam                  - Run every scenario
//!   quickbeam --list           - List scenarios and their expected outcome
//!   quickbeam -f <substr>      - Run scenarios whose name contains <substr>
//!   quickbeam --trace          - Log every node evaluation to stderr

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use quickbeam::{EvalContext, DEFAULT_MAX_DEPTH};
use quickbeam_cli::{init_logging, scenarios, summarize, Runner};

#[derive(Parser, Debug)]
#[command(name = "quickbeam")]
#[command(version)]
#[command(about = "Run the Quickbeam evaluator scenarios", long_about = None)]
struct Args {
    /// Only run scenarios whose name contains this string
    #[arg(short, long)]
    filter: Option<String>,

    /// List scenarios without running them
    #[arg(short, long)]
    list: bool,

    /// Enable trace output
    #[arg(short, long)]
    trace: bool,

    /// Maximum evaluation depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.trace);

    let selected = match &args.filter {
        Some(pattern) => scenarios::matching(pattern),
        None => scenarios::all(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for scenario in &selected {
            let expectation = if scenario.expect_success {
                "completes".green()
            } else {
                "fails".yellow()
            };
            writeln!(out, "{:<40} {}", scenario.name, expectation)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    if selected.is_empty() {
        eprintln!("{}: no scenario matches the filter", "Error".red().bold());
        return Ok(ExitCode::FAILURE);
    }

    let ctx = EvalContext::with_max_depth(args.max_depth).with_trace(args.trace);
    let mut runner = Runner::new(ctx);

    let mut outcomes = Vec::with_capacity(selected.len());
    for scenario in &selected {
        let outcome = runner.run(scenario);
        outcome.report(&mut out)?;
        outcomes.push(outcome);
    }

    let (passed, failed) = summarize(&outcomes);
    writeln!(out)?;
    if failed == 0 {
        writeln!(out, "{} {} passed", "Summary:".cyan().bold(), passed)?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(
            out,
            "{} {} passed, {} failed",
            "Summary:".cyan().bold(),
            passed,
            failed.to_string().red()
        )?;
        Ok(ExitCode::FAILURE)
    }
}
