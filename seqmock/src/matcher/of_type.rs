use std::any::{type_name, TypeId};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::types::is_subtype_of;
use crate::{Arg, IntoArg, Matcher, Value};

/// Create a new [`OfType`] matcher for the type `T`.
pub fn of_type<T>() -> OfType<T>
where
    T: ?Sized + 'static,
{
    OfType(PhantomData)
}

/// Matcher that checks the type of an argument instead of its value.
///
/// A value matches if its type is `T` or if its type was declared as subtype
/// of `T` using [`declare_subtype`](crate::declare_subtype).
#[must_use]
pub struct OfType<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T> OfType<T>
where
    T: ?Sized + 'static,
{
    /// Get the [`TypeId`] of the expected type.
    #[must_use]
    pub fn expected_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    /// Get the name of the expected type.
    #[must_use]
    pub fn expected_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn matches_type_id(&self, type_id: TypeId) -> bool {
        is_subtype_of(type_id, TypeId::of::<T>())
    }
}

impl<T> Matcher for OfType<T>
where
    T: ?Sized + 'static,
{
    fn matches(&self, value: &Value) -> bool {
        self.matches_type_id(value.value_type_id())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", type_name::<T>())
    }
}

impl<T> IntoArg for OfType<T>
where
    T: ?Sized + 'static,
{
    fn into_arg(self) -> Arg {
        Arg::matcher(self)
    }
}

impl<T: ?Sized> Clone for OfType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OfType<T> {}

impl<T> Debug for OfType<T>
where
    T: ?Sized + 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "OfType({})", type_name::<T>())
    }
}

impl<T> Display for OfType<T>
where
    T: ?Sized + 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self, f)
    }
}

impl<T> PartialEq<Value> for OfType<T>
where
    T: ?Sized + 'static,
{
    fn eq(&self, other: &Value) -> bool {
        self.matches(other)
    }
}

impl<T> PartialEq<OfType<T>> for Value
where
    T: ?Sized + 'static,
{
    fn eq(&self, other: &OfType<T>) -> bool {
        other.matches(self)
    }
}

macro_rules! impl_eq_for_primitive {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl<T> PartialEq<$type> for OfType<T>
            where
                T: ?Sized + 'static,
            {
                fn eq(&self, _other: &$type) -> bool {
                    self.matches_type_id(TypeId::of::<$type>())
                }
            }

            impl<T> PartialEq<OfType<T>> for $type
            where
                T: ?Sized + 'static,
            {
                fn eq(&self, other: &OfType<T>) -> bool {
                    other.matches_type_id(TypeId::of::<$type>())
                }
            }
        )+
    };
}

impl_eq_for_primitive!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
