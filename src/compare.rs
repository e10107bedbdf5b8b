// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Equality and ordering checks.
//!
//! The two-sided checks accept different left and right types as long as the
//! standard comparison traits connect them, so `equals(&1.0, &1.0)` and
//! `greater(&2_i64, &1_i64)` both read naturally at the call site.

use std::fmt::Debug;

use crate::options::CheckOptions;
use crate::outcome::{settle, CheckResult};

/// Check that two values are equal.
///
/// Fails with `expected {a} to equal {b}`.
///
/// # Example
///
/// ```
/// use affirm::{equals, CheckOptions};
///
/// equals(&1, &1, &CheckOptions::DEFAULT).unwrap();
/// ```
pub fn equals<A, B>(a: &A, b: &B, opts: &CheckOptions) -> CheckResult
where
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    settle(a == b, opts, || {
        format!("expected {:?} to equal {:?}", a, b)
    })
}

/// Check that two values are not equal.
///
/// Fails with `expected {a} to not equal {b}`.
pub fn not_equals<A, B>(a: &A, b: &B, opts: &CheckOptions) -> CheckResult
where
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    settle(a != b, opts, || {
        format!("expected {:?} to not equal {:?}", a, b)
    })
}

/// Check that `value` is strictly greater than `comparison`.
///
/// Fails with `expected {value} to be greater than {comparison}`. An
/// incomparable pair (NaN on either side) fails the same way.
pub fn greater<A, B>(value: &A, comparison: &B, opts: &CheckOptions) -> CheckResult
where
    A: PartialOrd<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    settle(value > comparison, opts, || {
        format!("expected {:?} to be greater than {:?}", value, comparison)
    })
}

/// Check that `value` is strictly less than `comparison`.
///
/// Fails with `expected {value} to be less than {comparison}`. An
/// incomparable pair (NaN on either side) fails the same way.
pub fn less<A, B>(value: &A, comparison: &B, opts: &CheckOptions) -> CheckResult
where
    A: PartialOrd<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    settle(value < comparison, opts, || {
        format!("expected {:?} to be less than {:?}", value, comparison)
    })
}
