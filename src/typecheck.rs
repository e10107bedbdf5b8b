// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Instance checks against an explicit set of type descriptors.
//!
//! There is no type hierarchy to reflect over here. A [`TypeSet`] is a flat
//! list of `TypeId` tags with their names, and matching is exact tag
//! equality: a value is "an instance" of the set when its concrete type is
//! one of the listed types. Build sets with [`TypeSet::of`] and
//! [`TypeSet::or`], or the [`type_set!`](crate::type_set) macro; a
//! one-element set behaves identically to the single-type case.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::fmt::Debug;

use crate::options::CheckOptions;
use crate::outcome::{settle, CheckResult};

/// One or more type descriptors, matched by exact `TypeId` comparison.
#[derive(Debug, Clone)]
pub struct TypeSet {
    entries: Vec<(TypeId, &'static str)>,
}

impl TypeSet {
    /// A set holding a single type.
    pub fn of<T: Any>() -> Self {
        TypeSet {
            entries: vec![(TypeId::of::<T>(), type_name::<T>())],
        }
    }

    /// Extend the set with another type.
    pub fn or<T: Any>(mut self) -> Self {
        self.entries.push((TypeId::of::<T>(), type_name::<T>()));
        self
    }

    /// Whether the concrete type of `value` is one of the listed types.
    pub fn admits(&self, value: &dyn Any) -> bool {
        let id = value.type_id();
        self.entries.iter().any(|(tag, _)| *tag == id)
    }
}

/// Renders the listed type names, e.g. `(i32, f64)`.
impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (_, name)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, ")")
    }
}

/// Build a [`TypeSet`] from a comma-separated list of types.
///
/// `type_set![i32, f64]` is shorthand for `TypeSet::of::<i32>().or::<f64>()`.
#[macro_export]
macro_rules! type_set {
    ($first:ty $(, $rest:ty)* $(,)?) => {
        $crate::TypeSet::of::<$first>()$(.or::<$rest>())*
    };
}

/// Check that the value's concrete type is in the given type set.
///
/// Fails with `expected {value} to be an instance of {types}`.
///
/// # Example
///
/// ```
/// use affirm::{is_instance, type_set, CheckOptions};
///
/// is_instance(&9.3_f64, type_set![i32, f64], &CheckOptions::DEFAULT).unwrap();
/// ```
pub fn is_instance<V>(value: &V, types: impl Into<TypeSet>, opts: &CheckOptions) -> CheckResult
where
    V: Any + Debug,
{
    let types = types.into();
    settle(types.admits(value), opts, || {
        format!("expected {:?} to be an instance of {}", value, types)
    })
}

/// Check that the value's concrete type is not in the given type set.
///
/// Fails with `expected {value} to not be an instance of {types}`.
pub fn not_is_instance<V>(value: &V, types: impl Into<TypeSet>, opts: &CheckOptions) -> CheckResult
where
    V: Any + Debug,
{
    let types = types.into();
    settle(!types.admits(value), opts, || {
        format!("expected {:?} to not be an instance of {}", value, types)
    })
}
