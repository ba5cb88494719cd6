//! Quickbeam scenario runner
//!
//! Runs the built-in evaluator scenarios and reports, for each one, whether
//! its outcome (complete or fail) matched what it declared.

pub mod runner;
pub mod scenarios;

pub use runner::{summarize, Outcome, Runner, Scenario, ScenarioFn, Session};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log filter, widened to per-node events when tracing is requested.
pub fn default_filter(trace: bool) -> &'static str {
    if trace {
        "warn,quickbeam=trace,quickbeam_cli=debug"
    } else {
        "warn"
    }
}

/// Initialize logging. `RUST_LOG` overrides the default filter.
pub fn init_logging(trace: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(trace).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
