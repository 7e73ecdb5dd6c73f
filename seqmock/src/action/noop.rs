use crate::Args;

use super::Action;

pub fn noop() -> Noop {
    Noop
}

/// Action that does nothing. This is the default side effect of a call.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Noop;

impl Action for Noop {
    fn exec(&self, _args: &Args) {}
}
