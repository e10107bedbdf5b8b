// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! The shared pass/fail contract every check function follows.
//!
//! A check produces exactly one of two outcomes: `Ok(())` (optionally with a
//! pass notification when the caller asked for verbosity) or
//! `Err(AssertionError)` carrying the caller's failure message plus a
//! condition-specific detail. Nothing is retried or recovered here; whatever
//! invoked the check decides what a failure means.

use std::error::Error;
use std::fmt;

use crate::options::CheckOptions;

/// Failure message used when the caller does not supply one.
pub const DEFAULT_MESSAGE: &str = "Test failed";

/// What every check function returns.
pub type CheckResult = Result<(), AssertionError>;

/// The single failure kind of this library.
///
/// Carries one human-readable message: the caller's `message_on_fail`
/// followed by a description of the condition that did not hold, with the
/// relevant values interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    /// Build a failure from the caller's message and a condition detail.
    pub(crate) fn with_detail(message_on_fail: &str, detail: &str) -> Self {
        AssertionError {
            message: format!("{}: {}", message_on_fail, detail),
        }
    }

    /// Build a failure carrying the caller's message alone.
    ///
    /// Only `expect` uses this; every other check appends a detail.
    pub(crate) fn bare(message_on_fail: &str) -> Self {
        AssertionError {
            message: message_on_fail.to_string(),
        }
    }

    /// The full failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AssertionError {}

/// Resolve a check outcome under the uniform contract.
///
/// On pass, emits the notification if the options ask for it. On failure,
/// builds the error from the caller's message and the (lazily formatted)
/// detail.
pub(crate) fn settle(
    passed: bool,
    opts: &CheckOptions,
    detail: impl FnOnce() -> String,
) -> CheckResult {
    if passed {
        opts.notify_pass();
        Ok(())
    } else {
        Err(AssertionError::with_detail(opts.message_on_fail(), &detail()))
    }
}
