//! The [`call`](self) module implements the [`Call`] type that describes an
//! expected or a recorded invocation of a mocked method.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::action::{noop, Action};
use crate::{AnyValue, Args, Value};

/// Name of the call that is recorded when a mock is instantiated.
pub const CONSTRUCTOR: &str = "init";

/// Name of the call that is recorded when a mock is iterated.
pub const ITERATE: &str = "iterate";

/// Describes a single invocation of a method: its name, its arguments, the
/// value it should return and the side effect it should execute.
///
/// Expected calls are configured by the test using the builder methods.
/// Recorded calls are created by the mock whenever a method is accessed.
///
/// Two calls are equal if they have the same name and equal arguments (see
/// [`Args`]). No ordering is defined between calls.
#[derive(Clone)]
pub struct Call {
    name: String,
    args: Args,
    return_value: Option<Value>,
    side_effect: Rc<dyn Action>,
}

/// Alias of [`Call::new`] that reads well inside an expectation list.
pub fn should_be_called<S: Into<String>>(name: S) -> Call {
    Call::new(name)
}

impl Call {
    /// Create a new call named `name` without any arguments, return value or
    /// side effect.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            args: Args::new(),
            return_value: None,
            side_effect: Rc::new(noop()),
        }
    }

    /// Create the call that is recorded when a mock is instantiated.
    #[must_use]
    pub fn constructor() -> Self {
        Self::new(CONSTRUCTOR)
    }

    /// Set the arguments of the call.
    #[must_use]
    pub fn with_args<A: Into<Args>>(mut self, args: A) -> Self {
        self.args = args.into();

        self
    }

    /// Set the value that is returned if the call matches.
    #[must_use]
    pub fn and_return<T: AnyValue>(mut self, value: T) -> Self {
        self.return_value = Some(Value::new(value));

        self
    }

    /// Set the side effect that is executed if the call matches.
    #[must_use]
    pub fn and_execute<A: Action + 'static>(mut self, action: A) -> Self {
        self.side_effect = Rc::new(action);

        self
    }

    /// Set the items that are produced if the mock is iterated.
    ///
    /// This is a shortcut for returning a `Vec<Value>`, which is what
    /// [`MockObject`](crate::MockObject)'s iterator yields.
    #[must_use]
    pub fn and_yield<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AnyValue,
    {
        let items = items.into_iter().map(Value::new).collect::<Vec<_>>();

        self.and_return(items)
    }

    /// Get the name of the call.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the arguments of the call.
    #[must_use]
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Get the configured return value, `None` if no value was configured.
    #[must_use]
    pub fn return_value(&self) -> Option<&Value> {
        self.return_value.as_ref()
    }

    /// Get the configured side effect.
    #[must_use]
    pub fn side_effect(&self) -> &dyn Action {
        &*self.side_effect
    }

    /// Returns `true` if both calls have the same name.
    #[must_use]
    pub fn compare_function(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns `true` if both calls have equal arguments.
    #[must_use]
    pub fn compare_arguments(&self, other: &Self) -> bool {
        self.args == other.args
    }

    pub(crate) fn set_args(&mut self, args: Args) {
        self.args = args;
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.compare_function(other) && self.compare_arguments(other)
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

impl Debug for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Call")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("return_value", &self.return_value)
            .finish_non_exhaustive()
    }
}
