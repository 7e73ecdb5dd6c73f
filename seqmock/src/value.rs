//! The [`value`](self) module implements the type erased [`Value`] that is used
//! for argument literals and configured return values.

use std::any::{type_name, Any, TypeId};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

/// Object safe view of any `'static` type that can be compared and printed.
///
/// This trait is implemented automatically for every type that implements
/// [`Any`], [`Debug`] and [`PartialEq`].
pub trait AnyValue: Any + Debug {
    /// Get the value as [`Any`] to be able to downcast it.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if `other` has the same concrete type as `self` and both
    /// values are equal, `false` otherwise.
    fn eq_value(&self, other: &dyn AnyValue) -> bool;

    /// Get the [`TypeId`] of the concrete type.
    fn value_type_id(&self) -> TypeId;

    /// Get the name of the concrete type.
    fn value_type_name(&self) -> &'static str;
}

impl<T> AnyValue for T
where
    T: Any + Debug + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn AnyValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn value_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Reference counted, type erased value.
///
/// Cloning a [`Value`] is cheap, the clone shares the payload with the
/// original.
#[derive(Clone)]
pub struct Value(Rc<dyn AnyValue>);

impl Value {
    /// Create a new [`Value`] from the passed `value`.
    ///
    /// If `value` is a [`Value`] itself it is returned as is instead of being
    /// wrapped a second time.
    pub fn new<T: AnyValue>(value: T) -> Self {
        if let Some(value) = (&value as &dyn Any).downcast_ref::<Value>() {
            return value.clone();
        }

        Self(Rc::new(value))
    }

    /// Returns a reference to the payload if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Returns a clone of the payload if it is of type `T`.
    #[must_use]
    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Returns `true` if the payload is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value_type_id() == TypeId::of::<T>()
    }

    /// Get the [`TypeId`] of the payload.
    #[must_use]
    pub fn value_type_id(&self) -> TypeId {
        self.0.value_type_id()
    }

    /// Get the type name of the payload.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.value_type_name()
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_value(&*other.0)
    }
}
