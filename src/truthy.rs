// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! The truthiness check and the trait behind it.
//!
//! Rust has no implicit truthiness, so `expect` goes through an explicit
//! [`Truthy`] trait: zero numbers, empty strings and collections, and `None`
//! are falsy; everything else is truthy. NaN compares unequal to zero and is
//! therefore truthy.

use crate::options::CheckOptions;
use crate::outcome::{AssertionError, CheckResult};

/// Values that can be judged truthy or falsy.
pub trait Truthy {
    /// Whether this value counts as "present and non-trivial".
    fn is_truthy(&self) -> bool;
}

/// Check that a value is truthy.
///
/// The only check whose failure carries the caller's message alone, with no
/// appended detail.
///
/// # Example
///
/// ```
/// use affirm::{expect, CheckOptions};
///
/// expect(&true, &CheckOptions::DEFAULT).unwrap();
/// expect(&"", &CheckOptions::DEFAULT).unwrap_err();
/// ```
pub fn expect<V>(value: &V, opts: &CheckOptions) -> CheckResult
where
    V: Truthy + ?Sized,
{
    if value.is_truthy() {
        opts.notify_pass();
        Ok(())
    } else {
        Err(AssertionError::bare(opts.message_on_fail()))
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! truthy_float {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                // NaN != 0.0, so NaN is truthy
                *self != 0.0
            }
        })*
    };
}

truthy_float!(f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// `None` is falsy; `Some(v)` defers to `v`.
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        match self {
            Some(value) => value.is_truthy(),
            None => false,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
