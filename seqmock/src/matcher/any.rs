use std::fmt::{Formatter, Result as FmtResult};

use crate::{Arg, IntoArg, Matcher, Value};

pub fn any() -> Any {
    Any
}

#[must_use]
#[derive(Debug)]
pub struct Any;

impl Matcher for Any {
    fn matches(&self, _value: &Value) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any")
    }
}

impl IntoArg for Any {
    fn into_arg(self) -> Arg {
        Arg::matcher(self)
    }
}
