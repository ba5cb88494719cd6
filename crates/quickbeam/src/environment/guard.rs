//! RAII guard for the symbol resolution stack

use super::Environment;

/// RAII guard that marks a symbol as being resolved and unmarks it on drop.
///
/// The guard derefs to the environment, so the bound node can be evaluated
/// through it. Because it pops in `Drop`, the name leaves the resolution
/// stack on success and on every error path alike.
///
/// A guard only pops what it pushed: if the name was already on the stack,
/// dropping the guard leaves the stack untouched.
pub(crate) struct ResolutionGuard<'a> {
    env: &'a mut Environment,
    pushed: bool,
}

impl Environment {
    /// Push `name` onto the resolution stack now and pop it on drop.
    pub(crate) fn resolution_guard(&mut self, name: &str) -> ResolutionGuard<'_> {
        let pushed = self.resolving.insert(name.to_string());
        ResolutionGuard { env: self, pushed }
    }
}

impl<'a> Drop for ResolutionGuard<'a> {
    fn drop(&mut self) {
        if self.pushed {
            self.env.resolving.pop();
        }
    }
}

impl<'a> std::ops::Deref for ResolutionGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for ResolutionGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}
