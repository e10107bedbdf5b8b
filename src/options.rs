// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-call configuration shared by every check function.
//!
//! Options are plain immutable values passed at each call site. There are no
//! global defaults to mutate and no state carried between calls.

use std::borrow::Cow;

use crate::notify;
use crate::outcome::DEFAULT_MESSAGE;

/// Options accepted by every check function.
///
/// - `message_on_fail` prefixes the failure detail; defaults to
///   `"Test failed"`.
/// - `verbose` makes a passing check print `Test passed`; defaults to off.
///   Failures are reported through the returned error regardless.
///
/// # Example
///
/// ```
/// use affirm::{equals, CheckOptions};
///
/// equals(&1, &1, &CheckOptions::DEFAULT).unwrap();
/// equals(&1, &2, &CheckOptions::new().message("ids must line up"))
///     .unwrap_err();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    message_on_fail: Cow<'static, str>,
    verbose: bool,
}

impl CheckOptions {
    /// The default options: generic failure message, verbosity off.
    pub const DEFAULT: CheckOptions = CheckOptions {
        message_on_fail: Cow::Borrowed(DEFAULT_MESSAGE),
        verbose: false,
    };

    /// Fresh options with the defaults.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the message prefixed to the failure detail.
    pub fn message(mut self, message_on_fail: impl Into<Cow<'static, str>>) -> Self {
        self.message_on_fail = message_on_fail.into();
        self
    }

    /// Set whether a passing check prints a notification.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub(crate) fn message_on_fail(&self) -> &str {
        &self.message_on_fail
    }

    /// Emit the pass notification if verbosity is on.
    pub(crate) fn notify_pass(&self) {
        if self.verbose {
            notify::report_pass();
        }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
