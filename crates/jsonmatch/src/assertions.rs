//! Assertion helpers for test code.
//!
//! Thin wrappers over [`compare`](crate::compare) that panic with the
//! rendered diff, optionally prefixed with a caller-supplied message.

use serde_json::Value;

use crate::{compare, compare_with, CompareMode, CompareResult, Comparator};

/// Assert that `actual` satisfies `expected` under `mode`.
///
/// # Panics
///
/// Panics with the rendered diff when the comparison fails.
pub fn assert_json_eq(expected: &Value, actual: &Value, mode: CompareMode) {
    check_eq(None, &compare(expected, actual, mode));
}

/// Like [`assert_json_eq`], with a message prefixed to the diff on failure.
///
/// # Panics
///
/// Panics with `message` followed by the rendered diff when the comparison
/// fails.
pub fn assert_json_eq_msg(message: &str, expected: &Value, actual: &Value, mode: CompareMode) {
    check_eq(Some(message), &compare(expected, actual, mode));
}

/// Assert that `actual` satisfies `expected` under an explicit comparator.
///
/// # Panics
///
/// Panics with the rendered diff when the comparison fails.
pub fn assert_json_eq_with<C: Comparator + ?Sized>(
    expected: &Value,
    actual: &Value,
    comparator: &C,
) {
    check_eq(None, &compare_with(expected, actual, comparator));
}

/// Assert that `actual` does **not** satisfy `expected` under `mode`.
///
/// # Panics
///
/// Panics when the comparison passes.
pub fn assert_json_ne(expected: &Value, actual: &Value, mode: CompareMode) {
    check_ne(None, &compare(expected, actual, mode));
}

/// Like [`assert_json_ne`], with a message prefix on failure.
///
/// # Panics
///
/// Panics with `message` when the comparison passes.
pub fn assert_json_ne_msg(message: &str, expected: &Value, actual: &Value, mode: CompareMode) {
    check_ne(Some(message), &compare(expected, actual, mode));
}

/// Assert that `actual` does **not** satisfy `expected` under an explicit
/// comparator.
///
/// # Panics
///
/// Panics when the comparison passes.
pub fn assert_json_ne_with<C: Comparator + ?Sized>(
    expected: &Value,
    actual: &Value,
    comparator: &C,
) {
    check_ne(None, &compare_with(expected, actual, comparator));
}

fn check_eq(message: Option<&str>, result: &CompareResult) {
    assert!(!result.failed(), "{}", prefixed(message, result.message()));
}

fn check_ne(message: Option<&str>, result: &CompareResult) {
    assert!(
        !result.passed(),
        "{}",
        prefixed(message, "documents were expected to differ, but they matched")
    );
}

fn prefixed(message: Option<&str>, body: &str) -> String {
    match message {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}\n{body}"),
        _ => body.to_owned(),
    }
}
