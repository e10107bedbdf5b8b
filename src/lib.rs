// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! A minimal assertion library for test authoring.
//!
//! The crate is a flat set of independent, stateless check functions. Each
//! one evaluates a single predicate over caller-supplied values and resolves
//! under one uniform contract: `Ok(())` on success, optionally printing
//! `Test passed` when the caller asked for verbosity, and
//! `Err(AssertionError)` on failure with the caller's message plus a
//! description of the condition that did not hold. No scheduler, no shared
//! state, no recovery; what a failure means is the caller's business.
//!
//! # Checks
//!
//! | Function | Passes when |
//! |------------------------------|------------------------------------------------|
//! | [`equals`] | `a == b` |
//! | [`not_equals`] | `a != b` |
//! | [`expect`] | the value is truthy ([`Truthy`]) |
//! | [`raises`] | the callable raises a matching [`ErrorKind`] |
//! | [`does_not_raise`] | the callable raises none of the listed kinds |
//! | [`approximately_equals`] | the distance is at most the margin |
//! | [`not_approximately_equals`] | the distance exceeds the margin |
//! | [`contains`] | the container admits the value ([`Container`]) |
//! | [`does_not_contain`] | the container does not admit the value |
//! | [`is_instance`] | the value's type is in the [`TypeSet`] |
//! | [`not_is_instance`] | the value's type is not in the [`TypeSet`] |
//! | [`greater`] | `value > comparison` |
//! | [`less`] | `value < comparison` |
//!
//! # Usage
//!
//! ```
//! use affirm::{approximately_equals, equals, raises, CheckOptions, ErrorKind};
//!
//! equals(&1, &1, &CheckOptions::DEFAULT)?;
//! approximately_equals(90, 90.1, 0.2, &CheckOptions::DEFAULT)?;
//! raises(|| "a".parse::<i32>(), ErrorKind::Value, &CheckOptions::DEFAULT)?;
//!
//! let failure = equals(&1, &5, &CheckOptions::new().message("ids diverged"));
//! assert_eq!(
//!     failure.unwrap_err().message(),
//!     "ids diverged: expected 1 to equal 5",
//! );
//! # Ok::<(), affirm::AssertionError>(())
//! ```

// Module declarations
mod approx;
mod compare;
mod membership;
mod notify;
mod options;
mod outcome;
mod raising;
mod truthy;
mod typecheck;

// Re-exports for public API
pub use approx::{approximately_equals, not_approximately_equals};
pub use compare::{equals, greater, less, not_equals};
pub use membership::{contains, does_not_contain, Container};
pub use options::CheckOptions;
pub use outcome::{AssertionError, CheckResult, DEFAULT_MESSAGE};
pub use raising::{does_not_raise, raises, ErrorKind, Fault, KindSet};
pub use truthy::{expect, Truthy};
pub use typecheck::{is_instance, not_is_instance, TypeSet};
