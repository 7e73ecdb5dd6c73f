//! The [`verify`](self) module implements the comparison of the recorded call
//! sequence against the expected one.

use crate::{Call, Result, VerificationFailure};

/// Compare the `actual` calls against the `expected` calls position by
/// position and report the first divergence.
///
/// For each position both lists have an entry for, a different method name is
/// reported as [`CallMismatch`](VerificationFailure::CallMismatch) before
/// the arguments are compared, which are reported as
/// [`ArgumentMismatch`](VerificationFailure::ArgumentMismatch). Afterwards
/// the first remaining expectation is reported as
/// [`NotCalled`](VerificationFailure::NotCalled), or else the first remaining
/// recorded call as [`Surprise`](VerificationFailure::Surprise).
///
/// # Errors
/// Returns the first [`VerificationFailure`] that was found.
pub fn verify(expected: &[Call], actual: &[Call]) -> Result<()> {
    for (index, (expected, actual)) in expected.iter().zip(actual).enumerate() {
        if !expected.compare_function(actual) {
            return Err(VerificationFailure::CallMismatch {
                index,
                expected: expected.clone(),
                actual: actual.clone(),
            });
        }

        if !expected.compare_arguments(actual) {
            return Err(VerificationFailure::ArgumentMismatch {
                index,
                expected: expected.args().clone(),
                actual: actual.args().clone(),
            });
        }
    }

    let index = expected.len().min(actual.len());

    if let Some(expected) = expected.get(index) {
        return Err(VerificationFailure::NotCalled {
            index,
            expected: expected.clone(),
        });
    }

    if let Some(actual) = actual.get(index) {
        return Err(VerificationFailure::Surprise {
            index,
            actual: actual.clone(),
        });
    }

    Ok(())
}
