//! Serialization conformance for trace and error types.
//!
//! Run with: cargo test --features serde
//!
//! Note: This test file requires the `serde` feature to be enabled.

#![cfg(feature = "serde")]

use typeswitch::prelude::*;

#[test]
fn trace_serializes_one_object_per_step() {
    let mut trace = SwitchTrace::new();

    TypeSwitch::traced(&42_i32, &mut trace, |_: &String| {})
        .or_on(|_: &i32| {})
        .or_else(|_| {});

    let json = serde_json::to_value(&trace).expect("serialize trace");
    let steps = json["steps"].as_array().expect("steps array");

    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["clause"], "On");
    assert_eq!(steps[0]["outcome"], "Miss");
    assert_eq!(steps[1]["target"], "i32");
    assert_eq!(steps[1]["outcome"], "Hit");
    assert_eq!(steps[2]["clause"], "OrElse");
    assert_eq!(steps[2]["outcome"], "Skipped");
}

#[test]
fn unmatched_error_serializes_with_subject_label() {
    let err = TypeSwitch::over(&1_u8, |_: &String| {})
        .or_fail()
        .unwrap_err();

    let json = serde_json::to_value(&err).expect("serialize error");
    assert_eq!(json["Unmatched"]["subject"], "u8");
}
