// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Approximate numeric equality with an explicit margin.
//!
//! Both checks compare the absolute difference `|a - b|` against the margin.
//! The boundary belongs to the equal side: a distance exactly equal to the
//! margin satisfies `approximately_equals` and not
//! `not_approximately_equals`, so for any finite inputs exactly one of the
//! two checks passes.

use std::fmt::Display;

use crate::options::CheckOptions;
use crate::outcome::{settle, CheckResult};

/// Check that `a` is within `margin` of `b` (inclusive).
///
/// Fails with `expected {a} to be within {margin} of {b}`. The margin is
/// expected to be non-negative; a negative margin can never be satisfied, so
/// the check then always fails.
///
/// # Example
///
/// ```
/// use affirm::{approximately_equals, CheckOptions};
///
/// approximately_equals(90, 90.1, 0.2, &CheckOptions::DEFAULT).unwrap();
/// ```
pub fn approximately_equals<A, B, M>(a: A, b: B, margin: M, opts: &CheckOptions) -> CheckResult
where
    A: Into<f64> + Display + Copy,
    B: Into<f64> + Display + Copy,
    M: Into<f64> + Display + Copy,
{
    let distance = (a.into() - b.into()).abs();
    settle(distance <= margin.into(), opts, || {
        format!("expected {} to be within {} of {}", a, margin, b)
    })
}

/// Check that `a` is farther than `margin` from `b`.
///
/// Fails with `expected {a} to not be within {margin} of {b}`. The exact
/// complement of [`approximately_equals`]: a distance equal to the margin
/// fails here.
pub fn not_approximately_equals<A, B, M>(a: A, b: B, margin: M, opts: &CheckOptions) -> CheckResult
where
    A: Into<f64> + Display + Copy,
    B: Into<f64> + Display + Copy,
    M: Into<f64> + Display + Copy,
{
    let distance = (a.into() - b.into()).abs();
    settle(distance > margin.into(), opts, || {
        format!("expected {} to not be within {} of {}", a, margin, b)
    })
}
