//! The [`matcher`](self) module contains the argument matchers that may be
//! used instead of literal values in the arguments of an expected
//! [`Call`](crate::Call).

mod any;
mod closure;
mod compare;
mod of_type;
mod range;
mod string;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Value;

pub use any::{any, Any};
pub use closure::{closure, Closure};
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use of_type::{of_type, OfType};
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, is_empty, starts_with as str_starts_with,
    Contains as StrContains, EndsWith as StrEndsWith, IsEmpty, StartsWith as StrStartsWith,
};

/// A matcher is used to check if a recorded argument matches a pre-defined
/// expectation. A matcher may be placed in any argument slot of an expected
/// call and decides the comparison of that slot.
pub trait Matcher {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &Value) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl Display for dyn Matcher + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self, f)
    }
}
