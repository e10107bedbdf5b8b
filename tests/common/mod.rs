// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Test helpers shared across unit and property tests.

#![allow(dead_code)]

use affirm::{CheckOptions, CheckResult};

/// Default options: generic message, verbosity off.
pub fn quiet() -> CheckOptions {
    CheckOptions::default()
}

/// Options with verbosity on, for exercising the notification path.
pub fn loud() -> CheckOptions {
    CheckOptions::new().verbose(true)
}

/// Unwrap a failing check and return its full message.
pub fn failure_message(result: CheckResult) -> String {
    result
        .expect_err("check should have failed")
        .message()
        .to_string()
}
