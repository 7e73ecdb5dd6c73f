use std::cell::RefCell;
use std::rc::Rc;

use crate::Args;

use super::Action;

/// Creates a new [`Capture`] action.
pub fn capture() -> Capture {
    Capture::default()
}

/// Action that stores the arguments of every invocation it is executed for.
///
/// Clones share the captured arguments, so one clone can be attached to the
/// expectation while the other one is inspected by the test.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct Capture(Rc<RefCell<Vec<Args>>>);

impl Capture {
    /// Get the arguments of all captured invocations.
    #[must_use]
    pub fn calls(&self) -> Vec<Args> {
        self.0.borrow().clone()
    }

    /// Get the arguments of the last captured invocation.
    #[must_use]
    pub fn last(&self) -> Option<Args> {
        self.0.borrow().last().cloned()
    }

    /// Get the number of captured invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl Action for Capture {
    fn exec(&self, args: &Args) {
        self.0.borrow_mut().push(args.clone());
    }
}
