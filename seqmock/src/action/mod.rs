//! The [`action`](self) module contains the side effects that may be attached
//! to an expected call using [`Call::and_execute`](crate::Call::and_execute).

mod capture;
mod noop;

pub use capture::{capture, Capture};
pub use noop::{noop, Noop};

use crate::Args;

/// Trait that defines a side effect of a matched call.
///
/// The action is executed once for every invocation that matches the
/// expectation it is attached to, with the actual arguments of that
/// invocation, before the configured return value is produced.
pub trait Action {
    /// Execute the action with the passed arguments.
    fn exec(&self, args: &Args);
}

impl<X> Action for X
where
    X: Fn(&Args),
{
    fn exec(&self, args: &Args) {
        self(args);
    }
}
