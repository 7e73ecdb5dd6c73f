#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

use proc_macro::TokenStream;

mod dispatch;
mod misc;

/// Implements traits by forwarding every declared method to
/// `seqmock::Dispatch::invoke`.
///
/// ```ignore
/// seqmock::dispatch! {
///     impl Runner for MockObject {
///         fn run(&self, a: i32, b: i32) -> bool;
///
///         #[seqmock(name = "stopNow")]
///         fn stop(&mut self);
///     }
/// }
/// ```
///
/// Methods that are declared without a body are recorded under their own name
/// (or the name given by `#[seqmock(name = "..")]`). Reference arguments are
/// recorded as owned values. The return value is the configured value of the
/// matching expectation, or `Default::default()` if there is none.
///
/// Methods with a body and any other item are passed through unchanged.
#[proc_macro]
pub fn dispatch(input: TokenStream) -> TokenStream {
    dispatch::exec(input.into()).into()
}
