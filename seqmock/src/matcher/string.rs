use std::fmt::{Formatter, Result as FmtResult};

use crate::{Arg, IntoArg, Matcher, Value};

/// Get the string slice of a value that holds a [`String`] or a `&'static str`.
fn as_str(value: &Value) -> Option<&str> {
    value
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| value.downcast_ref::<&'static str>().copied())
}

/* IsEmpty */

pub fn is_empty() -> IsEmpty {
    IsEmpty
}

#[must_use]
#[derive(Debug)]
pub struct IsEmpty;

impl Matcher for IsEmpty {
    fn matches(&self, value: &Value) -> bool {
        as_str(value).is_some_and(str::is_empty)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsEmpty")
    }
}

impl IntoArg for IsEmpty {
    fn into_arg(self) -> Arg {
        Arg::matcher(self)
    }
}

macro_rules! impl_str_matcher {
    ($type:ident, str::$method:ident, $fmt:tt) => {
        pub fn $method<P: Into<String>>(pattern: P) -> $type {
            $type(pattern.into())
        }

        #[must_use]
        #[derive(Debug)]
        pub struct $type(String);

        impl Matcher for $type {
            fn matches(&self, value: &Value) -> bool {
                as_str(value).is_some_and(|value| value.$method(self.0.as_str()))
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }

        impl IntoArg for $type {
            fn into_arg(self) -> Arg {
                Arg::matcher(self)
            }
        }
    };
}

impl_str_matcher!(StartsWith, str::starts_with, "StartsWith({})");
impl_str_matcher!(EndsWith, str::ends_with, "EndsWith({})");
impl_str_matcher!(Contains, str::contains, "Contains({})");
