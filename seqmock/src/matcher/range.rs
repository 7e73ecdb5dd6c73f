use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};

use crate::{Arg, IntoArg, Matcher, Value};

pub fn range<R, T>(range: R) -> Range<R, T>
where
    R: RangeBounds<T>,
{
    Range::new(range)
}

#[must_use]
#[derive(Debug)]
pub struct Range<R, T> {
    range: R,
    _marker: PhantomData<T>,
}

impl<R, T> Range<R, T> {
    pub fn new(range: R) -> Self {
        Self {
            range,
            _marker: PhantomData,
        }
    }
}

impl<R, T> Matcher for Range<R, T>
where
    R: RangeBounds<T>,
    T: PartialOrd + Debug + 'static,
{
    fn matches(&self, value: &Value) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| self.range.contains(value))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.range.start_bound() {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x:?}, "),
            Bound::Excluded(x) => write!(f, "({x:?}, "),
        }?;

        match self.range.end_bound() {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x:?}]"),
            Bound::Excluded(x) => write!(f, "{x:?})"),
        }?;

        Ok(())
    }
}

impl<R, T> IntoArg for Range<R, T>
where
    R: RangeBounds<T> + 'static,
    T: PartialOrd + Debug + 'static,
{
    fn into_arg(self) -> Arg {
        Arg::matcher(self)
    }
}
