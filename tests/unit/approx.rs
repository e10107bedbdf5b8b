// Copyright 2025-present Affirm Contributors
// SPDX-License-Identifier: Apache-2.0

//! Approximate equality checks and their boundary policy.

use super::common::{failure_message, loud, quiet};
use affirm::{approximately_equals, not_approximately_equals};

#[test]
fn within_margin_passes() {
    // |90 - 90.1| = 0.1 <= 0.2
    approximately_equals(90, 90.1, 0.2, &quiet()).unwrap();
    approximately_equals(1.0, 1.0, 0.0, &quiet()).unwrap();
}

#[test]
fn outside_margin_fails_with_all_three_values() {
    let message = failure_message(approximately_equals(1.0, 2.0, 0.5, &quiet()));
    assert_eq!(message, "Test failed: expected 1 to be within 0.5 of 2");
}

#[test]
fn far_apart_passes_the_negated_check() {
    not_approximately_equals(1, 2, 0.1, &loud()).unwrap();
}

#[test]
fn close_together_fails_the_negated_check() {
    let message = failure_message(not_approximately_equals(1.0, 1.05, 0.2, &quiet()));
    assert_eq!(
        message,
        "Test failed: expected 1 to not be within 0.2 of 1.05"
    );
}

#[test]
fn boundary_distance_belongs_to_the_equal_side() {
    // |1.5 - 1.0| == 0.5 exactly
    approximately_equals(1.5, 1.0, 0.5, &quiet()).unwrap();
    not_approximately_equals(1.5, 1.0, 0.5, &quiet()).unwrap_err();
}

#[test]
fn comparison_is_symmetric_in_a_and_b() {
    approximately_equals(90.1, 90, 0.2, &quiet()).unwrap();
    not_approximately_equals(2, 1, 0.1, &quiet()).unwrap();
}

#[test]
fn negative_margin_is_never_satisfied() {
    approximately_equals(1.0, 1.0, -0.1, &quiet()).unwrap_err();
    not_approximately_equals(1.0, 1.0, -0.1, &quiet()).unwrap();
}

#[test]
fn mixed_integer_and_float_operands_are_accepted() {
    approximately_equals(3, 3.0_f64, 0.0, &quiet()).unwrap();
    approximately_equals(2.5_f32, 2, 1, &quiet()).unwrap();
}
