// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Success notification for verbose checks.
//!
//! The only side effect this library ever has: a `Test passed` line on
//! stdout when a check passes and the caller asked for verbosity. Failures
//! never print; they travel in the returned error.

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Check if colors should be used (TTY detection)
fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Print the pass notification.
pub(crate) fn report_pass() {
    if use_colors() {
        println!("{}Test passed{}", GREEN, RESET);
    } else {
        println!("Test passed");
    }
}
