// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Containment checks and the trait behind them.
//!
//! Membership means different things to different containers: element
//! equality for sequences and sets, key lookup for maps, substring or
//! character lookup for strings. The [`Container`] trait names that seam
//! once so the two check functions never care which container they got.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::options::CheckOptions;
use crate::outcome::{settle, CheckResult};

/// Containers that can answer a membership question for `T`.
pub trait Container<T: ?Sized> {
    /// Whether `candidate` is a member of this container.
    fn admits(&self, candidate: &T) -> bool;
}

/// Check that `value` is a member of `container`.
///
/// Fails with `expected {value} to be in {container}`.
///
/// # Example
///
/// ```
/// use affirm::{contains, CheckOptions};
///
/// contains(&[1, 2, 3][..], &2, &CheckOptions::DEFAULT).unwrap();
/// contains("hello", "ell", &CheckOptions::DEFAULT).unwrap();
/// ```
pub fn contains<C, T>(container: &C, value: &T, opts: &CheckOptions) -> CheckResult
where
    C: Container<T> + Debug + ?Sized,
    T: Debug + ?Sized,
{
    settle(container.admits(value), opts, || {
        format!("expected {:?} to be in {:?}", value, container)
    })
}

/// Check that `value` is not a member of `container`.
///
/// Fails with `expected {value} to not be in {container}`.
pub fn does_not_contain<C, T>(container: &C, value: &T, opts: &CheckOptions) -> CheckResult
where
    C: Container<T> + Debug + ?Sized,
    T: Debug + ?Sized,
{
    settle(!container.admits(value), opts, || {
        format!("expected {:?} to not be in {:?}", value, container)
    })
}

impl<T: PartialEq> Container<T> for [T] {
    fn admits(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: PartialEq, const N: usize> Container<T> for [T; N] {
    fn admits(&self, candidate: &T) -> bool {
        self.as_slice().contains(candidate)
    }
}

impl<T: PartialEq> Container<T> for Vec<T> {
    fn admits(&self, candidate: &T) -> bool {
        self.as_slice().contains(candidate)
    }
}

impl<T: Eq + Hash> Container<T> for HashSet<T> {
    fn admits(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    fn admits(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

/// Maps admit their keys, not their values.
impl<K: Eq + Hash, V> Container<K> for HashMap<K, V> {
    fn admits(&self, candidate: &K) -> bool {
        self.contains_key(candidate)
    }
}

/// Maps admit their keys, not their values.
impl<K: Ord, V> Container<K> for BTreeMap<K, V> {
    fn admits(&self, candidate: &K) -> bool {
        self.contains_key(candidate)
    }
}

/// Substring membership.
impl Container<str> for str {
    fn admits(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

/// Character membership.
impl Container<char> for str {
    fn admits(&self, candidate: &char) -> bool {
        self.contains(*candidate)
    }
}

impl Container<str> for String {
    fn admits(&self, candidate: &str) -> bool {
        self.as_str().contains(candidate)
    }
}

impl Container<char> for String {
    fn admits(&self, candidate: &char) -> bool {
        self.as_str().contains(*candidate)
    }
}
