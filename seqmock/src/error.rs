//! Error definitions
//!
//! This module provides the error that is returned if the recorded calls of a
//! mock do not match its expectations.

use thiserror::Error;

use crate::{Args, Call};

/// Error returned by [`verify`](crate::verify::verify) for the first position
/// the recorded calls diverge from the expected ones.
#[derive(Error, Debug, Clone)]
pub enum VerificationFailure {
    /// A different method than the expected one was called.
    #[error("Call Mismatch at #{index}: Expected <{expected}>, Was <{actual}>")]
    CallMismatch {
        index: usize,
        expected: Call,
        actual: Call,
    },

    /// The expected method was called with different arguments.
    #[error("Argument Mismatch at #{index}: Expected <{expected}>, Was <{actual}>")]
    ArgumentMismatch {
        index: usize,
        expected: Args,
        actual: Args,
    },

    /// The expected method was never called.
    #[error("Not Called at #{index}: <{expected}>")]
    NotCalled { index: usize, expected: Call },

    /// A method was called after all expectations were met.
    #[error("Surprise at #{index}: <{actual}>")]
    Surprise { index: usize, actual: Call },
}

impl VerificationFailure {
    /// Get the position in the call sequence the failure was detected at.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::CallMismatch { index, .. }
            | Self::ArgumentMismatch { index, .. }
            | Self::NotCalled { index, .. }
            | Self::Surprise { index, .. } => *index,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, VerificationFailure>;
