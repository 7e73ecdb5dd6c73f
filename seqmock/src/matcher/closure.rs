use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::{Arg, IntoArg, Matcher, Value};

/// Create a [`Closure`] matcher that downcasts the argument to `T` and passes
/// it to `f`.
pub fn closure<T, F>(f: F) -> Closure<T, F>
where
    F: Fn(&T) -> bool,
{
    Closure {
        f,
        _marker: PhantomData,
    }
}

/// Matcher that is implemented by a closure. Arguments that are not of type
/// `T` never match.
#[must_use]
pub struct Closure<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> Matcher for Closure<T, F>
where
    T: 'static,
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &Value) -> bool {
        value.downcast_ref::<T>().is_some_and(&self.f)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Closure")
    }
}

impl<T, F> IntoArg for Closure<T, F>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    fn into_arg(self) -> Arg {
        Arg::matcher(self)
    }
}
