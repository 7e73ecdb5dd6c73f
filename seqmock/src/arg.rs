//! The [`arg`](self) module implements the argument slots of a [`Call`](crate::Call).

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::rc::Rc;

use crate::{AnyValue, Matcher, Value};

/// A single argument of a call.
///
/// Recorded calls always hold literal values. Expected calls may hold a
/// [`Matcher`] in any slot, which then decides the comparison of that slot.
#[derive(Clone)]
pub enum Arg {
    /// A literal value that is compared using [`PartialEq`].
    Value(Value),

    /// A matcher that accepts a class of values.
    Matcher(Rc<dyn Matcher>),
}

impl Arg {
    /// Create a literal argument from the passed `value`.
    pub fn value<T: AnyValue>(value: T) -> Self {
        Self::Value(Value::new(value))
    }

    /// Create an argument that is compared using the passed `matcher`.
    pub fn matcher<M: Matcher + 'static>(matcher: M) -> Self {
        Self::Matcher(Rc::new(matcher))
    }

    /// Get the literal value of this argument, `None` if this argument is a
    /// matcher.
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Matcher(_) => None,
        }
    }

    /// Returns `true` if this argument is a matcher.
    #[must_use]
    pub fn is_matcher(&self) -> bool {
        matches!(self, Self::Matcher(_))
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Matcher(m), Self::Value(v)) | (Self::Value(v), Self::Matcher(m)) => m.matches(v),
            (Self::Matcher(a), Self::Matcher(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
        }
    }
}

impl Debug for Arg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Value(value) => Debug::fmt(value, f),
            Self::Matcher(matcher) => Matcher::fmt(&**matcher, f),
        }
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(self, f)
    }
}

/// Ordered argument tuple of a call.
///
/// Two tuples are equal if they have the same length and each positional pair
/// of arguments is equal.
#[derive(Default, Clone, PartialEq)]
pub struct Args(Vec<Arg>);

impl Args {
    /// Create a new empty argument tuple.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the literal value at `index` downcasted to `T`.
    #[must_use]
    pub fn value<T: 'static>(&self, index: usize) -> Option<&T> {
        self.0.get(index)?.as_value()?.downcast_ref()
    }

    /// Append the passed argument.
    pub fn push<A: IntoArg>(&mut self, arg: A) {
        self.0.push(arg.into_arg());
    }
}

impl Deref for Args {
    type Target = [Arg];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Arg>> for Args {
    fn from(value: Vec<Arg>) -> Self {
        Self(value)
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;

        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{arg}")?;
        }

        write!(f, ")")
    }
}

impl Debug for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

/// Conversion into a call argument.
///
/// Implemented for the common literal types, for [`Value`] and [`Arg`] and for
/// every matcher of the [`matcher`](crate::matcher) module. Any other type is
/// passed using [`Arg::value`].
pub trait IntoArg {
    /// Convert `self` into an [`Arg`].
    fn into_arg(self) -> Arg;
}

impl IntoArg for Arg {
    fn into_arg(self) -> Arg {
        self
    }
}

impl IntoArg for Value {
    fn into_arg(self) -> Arg {
        Arg::Value(self)
    }
}

impl IntoArg for &str {
    fn into_arg(self) -> Arg {
        Arg::value(self.to_owned())
    }
}

impl<T: AnyValue + PartialEq> IntoArg for Vec<T> {
    fn into_arg(self) -> Arg {
        Arg::value(self)
    }
}

impl<T: AnyValue + PartialEq> IntoArg for Option<T> {
    fn into_arg(self) -> Arg {
        Arg::value(self)
    }
}

macro_rules! impl_into_arg {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl IntoArg for $type {
                fn into_arg(self) -> Arg {
                    Arg::value(self)
                }
            }
        )+
    };
}

impl_into_arg!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);
