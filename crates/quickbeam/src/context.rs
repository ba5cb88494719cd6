//! Evaluation context configuration

/// Depth limit used by [`EvalContext::default`].
///
/// Each node evaluation, each hop of a symbol chain and each differentiated
/// subtree counts as one level. At this limit the deepest path still fits in
/// a 2 MiB thread stack, the default for spawned threads; raise it only on
/// threads with larger stacks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Read-only options threaded through every `eval` call.
///
/// Unlike [`crate::Environment`], a context is never mutated by evaluation,
/// so one value can be shared by any number of sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum nesting of node evaluations (stack overflow protection)
    pub max_depth: usize,

    /// Whether to emit a debug event for every node evaluated
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
