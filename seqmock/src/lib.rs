pub mod action;
pub mod arg;
pub mod call;
pub mod error;
pub mod matcher;
pub mod mock;
pub mod types;
pub mod value;
pub mod verify;

pub use seqmock_macros::dispatch;

pub use action::Action;
pub use arg::{Arg, Args, IntoArg};
pub use call::{should_be_called, Call, CONSTRUCTOR, ITERATE};
pub use error::{Result, VerificationFailure};
pub use matcher::{of_type, Matcher, OfType};
pub use mock::{Dispatch, Factory, MockObject, MockType, PendingCall};
pub use types::declare_subtype;
pub use value::{AnyValue, Value};

/// Build an [`Args`] tuple from a list of literals and matchers.
///
/// Every element is converted using [`IntoArg`].
///
/// ```
/// use seqmock::{args, of_type};
///
/// let args = args![1, "abc", of_type::<bool>()];
/// assert_eq!(args, args![1, String::from("abc"), true]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($( $arg:expr ),+ $(,)?) => {
        $crate::Args::from(vec![ $( $crate::IntoArg::into_arg($arg) ),+ ])
    };
}
