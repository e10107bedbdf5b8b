// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Raise-checks: expected errors, forbidden errors, and the permissive
//! policy for unlisted kinds.

use super::common::{failure_message, loud, quiet};
use affirm::{does_not_raise, raises, ErrorKind, KindSet};

/// A callable that fails with the given kind.
fn failing(kind: ErrorKind) -> impl FnOnce() -> Result<(), ErrorKind> {
    move || Err(kind)
}

/// A callable that returns cleanly.
fn succeeding() -> Result<i32, ErrorKind> {
    Ok(1 + 1)
}

#[test]
fn raises_passes_when_the_expected_kind_occurs() {
    raises(failing(ErrorKind::Type), ErrorKind::Type, &loud()).unwrap();
}

#[test]
fn raises_passes_on_any_listed_kind() {
    let listed = [ErrorKind::Type, ErrorKind::Key];
    raises(failing(ErrorKind::Key), listed, &quiet()).unwrap();
}

#[test]
fn raises_fails_when_nothing_is_raised() {
    let message = failure_message(raises(succeeding, ErrorKind::Value, &quiet()));
    assert_eq!(
        message,
        "Test failed: expected given function to raise ValueError"
    );
}

#[test]
fn raises_fails_on_a_non_matching_kind() {
    // Wrong kind raised reads the same as nothing raised
    let message = failure_message(raises(
        failing(ErrorKind::Io),
        [ErrorKind::Type, ErrorKind::Value],
        &quiet(),
    ));
    assert_eq!(
        message,
        "Test failed: expected given function to raise any of the following: TypeError, ValueError"
    );
}

#[test]
fn raises_with_the_any_sentinel_accepts_every_kind() {
    raises(failing(ErrorKind::Arithmetic), KindSet::any(), &quiet()).unwrap();
    raises(failing(ErrorKind::Other("LeaseExpired")), KindSet::any(), &quiet()).unwrap();
    raises(succeeding, KindSet::any(), &quiet()).unwrap_err();
}

#[test]
fn raises_works_with_std_error_types() {
    raises(|| "a".parse::<i32>(), ErrorKind::Value, &quiet()).unwrap();
    raises(
        || std::str::from_utf8(&[0xff, 0xfe]),
        ErrorKind::Value,
        &quiet(),
    )
    .unwrap();
}

#[test]
fn does_not_raise_passes_on_a_clean_return() {
    does_not_raise(succeeding, ErrorKind::Value, &loud()).unwrap();
}

#[test]
fn does_not_raise_tolerates_unlisted_kinds() {
    // Only the listed kinds are forbidden
    does_not_raise(failing(ErrorKind::Io), ErrorKind::Value, &quiet()).unwrap();
    does_not_raise(
        failing(ErrorKind::Other("Backoff")),
        [ErrorKind::Type, ErrorKind::Value],
        &quiet(),
    )
    .unwrap();
}

#[test]
fn does_not_raise_fails_on_a_forbidden_kind() {
    let message = failure_message(does_not_raise(
        failing(ErrorKind::Value),
        ErrorKind::Value,
        &quiet(),
    ));
    assert_eq!(
        message,
        "Test failed: expected given function to not raise ValueError"
    );
}

#[test]
fn does_not_raise_with_the_any_sentinel_forbids_everything() {
    does_not_raise(succeeding, KindSet::any(), &quiet()).unwrap();
    does_not_raise(failing(ErrorKind::Index), KindSet::any(), &quiet()).unwrap_err();
}

#[test]
fn raise_failures_signal_regardless_of_verbosity() {
    let message = failure_message(raises(succeeding, ErrorKind::Value, &loud()));
    assert_eq!(
        message,
        "Test failed: expected given function to raise ValueError"
    );

    let message = failure_message(does_not_raise(
        failing(ErrorKind::Value),
        ErrorKind::Value,
        &loud(),
    ));
    assert_eq!(
        message,
        "Test failed: expected given function to not raise ValueError"
    );
}

#[test]
fn callables_are_invoked_exactly_once() {
    let mut calls = 0;
    let _ = raises(
        || {
            calls += 1;
            Err::<(), _>(ErrorKind::Type)
        },
        ErrorKind::Type,
        &quiet(),
    );
    assert_eq!(calls, 1);
}
