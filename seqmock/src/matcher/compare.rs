use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Arg, IntoArg, Matcher, Value};

macro_rules! impl_matcher {
    ($type:ident, $trait:ident::$method:ident, $fmt:tt) => {
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        #[must_use]
        #[derive(Debug)]
        pub struct $type<T>(pub T);

        impl<T> Matcher for $type<T>
        where
            T: $trait + Debug + 'static,
        {
            fn matches(&self, value: &Value) -> bool {
                value
                    .downcast_ref::<T>()
                    .is_some_and(|value| value.$method(&self.0))
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }

        impl<T> IntoArg for $type<T>
        where
            T: $trait + Debug + 'static,
        {
            fn into_arg(self) -> Arg {
                Arg::matcher(self)
            }
        }
    };
}

impl_matcher!(Eq, PartialEq::eq, "Eq({:?})");
impl_matcher!(Ne, PartialEq::ne, "Ne({:?})");

impl_matcher!(Lt, PartialOrd::lt, "Lt({:?})");
impl_matcher!(Le, PartialOrd::le, "Le({:?})");
impl_matcher!(Gt, PartialOrd::gt, "Gt({:?})");
impl_matcher!(Ge, PartialOrd::ge, "Ge({:?})");
