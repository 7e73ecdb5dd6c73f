use std::any::{type_name, Any};
use std::rc::Rc;

use crate::{Args, Value};

use super::MockObject;

/// Single entry point for dynamically dispatched method calls.
///
/// Every method of a mocked trait is forwarded to [`invoke`](Self::invoke)
/// using the method name and the arguments of the call. The
/// [`dispatch!`](crate::dispatch) macro generates these forwarding
/// implementations.
pub trait Dispatch {
    /// Record and execute the call of the method `name` with the passed `args`.
    ///
    /// Returns the configured return value of the matching expectation, `None`
    /// if there is none.
    fn invoke(&self, name: &str, args: Args) -> Option<Value>;
}

impl Dispatch for MockObject {
    fn invoke(&self, name: &str, args: Args) -> Option<Value> {
        self.begin_call(name).complete(args)
    }
}

impl<T> Dispatch for &T
where
    T: Dispatch + ?Sized,
{
    fn invoke(&self, name: &str, args: Args) -> Option<Value> {
        (**self).invoke(name, args)
    }
}

impl<T> Dispatch for Box<T>
where
    T: Dispatch + ?Sized,
{
    fn invoke(&self, name: &str, args: Args) -> Option<Value> {
        (**self).invoke(name, args)
    }
}

impl<T> Dispatch for Rc<T>
where
    T: Dispatch + ?Sized,
{
    fn invoke(&self, name: &str, args: Args) -> Option<Value> {
        (**self).invoke(name, args)
    }
}

/// Convert the result of [`Dispatch::invoke`] into the return type `R` of the
/// mocked method.
///
/// Returns the configured value if it is of type `R`, `R::default()` otherwise.
pub fn returned<R>(value: Option<Value>) -> R
where
    R: Any + Clone + Default,
{
    match value {
        Some(value) => value.get::<R>().unwrap_or_else(|| {
            tracing::debug!(
                expected = type_name::<R>(),
                actual = value.type_name(),
                "return value has unexpected type"
            );

            R::default()
        }),
        None => R::default(),
    }
}
