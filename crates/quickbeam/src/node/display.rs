//! Rendering nodes as `Kind(children)`

use std::fmt;

use super::{Arg, Node};

/// Renders a child list the way it appears between a node's parentheses:
/// nothing, a single child, or children separated by `", "`.
pub struct DisplayArgs<'a>(pub &'a [Arg]);

impl fmt::Display for DisplayArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Number(n) => write!(f, "{}", n),
            Arg::Name(name) => f.write_str(name),
            Arg::Node(node) => write!(f, "{}", node),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, DisplayArgs(self.args()))
    }
}
