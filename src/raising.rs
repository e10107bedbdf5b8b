// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Checks over callables that may fail.
//!
//! Rust has no exception hierarchy to inspect at runtime, so raise-checks
//! work over a closed set of category tags. The callable under test returns
//! `Result<T, E>` where the error maps to an [`ErrorKind`] through the
//! [`Fault`] trait, and matching is plain tag comparison against a
//! [`KindSet`]. `Other` keeps the set extensible for domain-specific
//! categories without opening the door to hierarchy reflection.

use std::fmt;

use crate::options::CheckOptions;
use crate::outcome::{settle, CheckResult};

/// Category tag for a raised error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand or argument of an unsupported type.
    Type,
    /// Well-typed value outside the accepted domain.
    Value,
    /// Sequence index out of range.
    Index,
    /// Missing key in a map lookup.
    Key,
    /// Division by zero, overflow, and other arithmetic faults.
    Arithmetic,
    /// Operating-system or I/O failure.
    Io,
    /// A category the closed tags above do not cover.
    Other(&'static str),
}

impl ErrorKind {
    /// The name used in failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Type => "TypeError",
            ErrorKind::Value => "ValueError",
            ErrorKind::Index => "IndexError",
            ErrorKind::Key => "KeyError",
            ErrorKind::Arithmetic => "ArithmeticError",
            ErrorKind::Io => "IoError",
            ErrorKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps a concrete error to its category tag.
///
/// Implement this for domain error types so their values can be matched by
/// [`raises`] and [`does_not_raise`]. Implementations for common std error
/// types are provided.
pub trait Fault {
    /// The category this error belongs to.
    fn kind(&self) -> ErrorKind;
}

/// A bare tag is its own category; handy in tests and small closures.
impl Fault for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl Fault for std::io::Error {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}

impl Fault for std::num::ParseIntError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl Fault for std::num::ParseFloatError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl Fault for std::num::TryFromIntError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl Fault for std::str::Utf8Error {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl Fault for std::string::FromUtf8Error {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

/// The set of error kinds a raise-check matches.
///
/// `KindSet::any()` matches every kind (the default sentinel for "any
/// error"). A single kind, an array, a slice, or a vec of kinds all convert
/// into a set, so a one-kind call site needs no special casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSet {
    // None matches every kind
    kinds: Option<Vec<ErrorKind>>,
}

impl KindSet {
    /// The sentinel set that matches any error kind.
    pub fn any() -> Self {
        KindSet { kinds: None }
    }

    /// Whether `kind` is in the set.
    pub fn matches(&self, kind: ErrorKind) -> bool {
        match &self.kinds {
            None => true,
            Some(kinds) => kinds.contains(&kind),
        }
    }

    /// Render the set for failure messages: a lone kind by name, several
    /// kinds as `any of the following: A, B`.
    fn describe(&self) -> String {
        match &self.kinds {
            None => "any error".to_string(),
            Some(kinds) if kinds.len() == 1 => kinds[0].name().to_string(),
            Some(kinds) => {
                let names: Vec<&str> = kinds.iter().map(ErrorKind::name).collect();
                format!("any of the following: {}", names.join(", "))
            }
        }
    }
}

impl From<ErrorKind> for KindSet {
    fn from(kind: ErrorKind) -> Self {
        KindSet {
            kinds: Some(vec![kind]),
        }
    }
}

impl<const N: usize> From<[ErrorKind; N]> for KindSet {
    fn from(kinds: [ErrorKind; N]) -> Self {
        KindSet {
            kinds: Some(kinds.to_vec()),
        }
    }
}

impl From<&[ErrorKind]> for KindSet {
    fn from(kinds: &[ErrorKind]) -> Self {
        KindSet {
            kinds: Some(kinds.to_vec()),
        }
    }
}

impl From<Vec<ErrorKind>> for KindSet {
    fn from(kinds: Vec<ErrorKind>) -> Self {
        KindSet { kinds: Some(kinds) }
    }
}

/// Check that invoking `function` raises an error matching `kinds`.
///
/// Fails when the callable returns successfully and when it raises a kind
/// outside the set; both cases get the same
/// `expected given function to raise {kinds}` detail.
///
/// # Example
///
/// ```
/// use affirm::{raises, CheckOptions, ErrorKind};
///
/// raises(
///     || "a".parse::<i32>(),
///     ErrorKind::Value,
///     &CheckOptions::DEFAULT,
/// )
/// .unwrap();
/// ```
pub fn raises<T, E, F>(function: F, kinds: impl Into<KindSet>, opts: &CheckOptions) -> CheckResult
where
    F: FnOnce() -> Result<T, E>,
    E: Fault,
{
    let kinds = kinds.into();
    let raised = function().err().map(|error| error.kind());
    let passed = matches!(raised, Some(kind) if kinds.matches(kind));
    settle(passed, opts, || {
        format!("expected given function to raise {}", kinds.describe())
    })
}

/// Check that invoking `function` does not raise an error matching `kinds`.
///
/// Deliberately permissive: only the listed kinds are forbidden. A clean
/// return passes, and so does an error of an unlisted kind. Fails with
/// `expected given function to not raise {kinds}`.
///
/// # Example
///
/// ```
/// use affirm::{does_not_raise, CheckOptions, ErrorKind};
///
/// does_not_raise(
///     || "7".parse::<i32>(),
///     ErrorKind::Value,
///     &CheckOptions::DEFAULT,
/// )
/// .unwrap();
/// ```
pub fn does_not_raise<T, E, F>(
    function: F,
    kinds: impl Into<KindSet>,
    opts: &CheckOptions,
) -> CheckResult
where
    F: FnOnce() -> Result<T, E>,
    E: Fault,
{
    let kinds = kinds.into();
    let passed = match function() {
        Ok(_) => true,
        Err(error) => !kinds.matches(error.kind()),
    };
    settle(passed, opts, || {
        format!("expected given function to not raise {}", kinds.describe())
    })
}
