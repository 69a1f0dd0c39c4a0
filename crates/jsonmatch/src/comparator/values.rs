use serde_json::Value;

use crate::{
    cmp,
    comparator::{arrays, objects, Comparator},
    paths::Location,
    result::{FailureKind, Recorder},
};

/// Compare one pair of nodes, recording any differences.
///
/// Customization overrides are consulted first and their verdict is final,
/// even where it disagrees with default equality. Failures accumulate; a
/// difference in one subtree never stops evaluation of its siblings.
pub(crate) fn compare_values<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &Value,
    actual: &Value,
    recorder: &mut Recorder,
) {
    if let Some(matcher) = comparator.override_for(path) {
        if !matcher.matches(expected, actual) {
            recorder.record_mismatch(FailureKind::ValueMismatch, path, expected, actual);
        }
        return;
    }
    match (expected, actual) {
        (Value::Object(expected_map), Value::Object(actual_map)) => {
            objects::compare_objects(comparator, path, expected_map, actual_map, recorder);
        }
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            arrays::compare_arrays(comparator, path, expected_items, actual_items, recorder);
        }
        (Value::Number(expected_number), Value::Number(actual_number)) => {
            if !cmp::equal_numbers(expected_number, actual_number) {
                recorder.record_mismatch(FailureKind::ValueMismatch, path, expected, actual);
            }
        }
        _ if !cmp::is_scalar(expected) || !cmp::is_scalar(actual) => {
            recorder.record_mismatch(FailureKind::TypeMismatch, path, expected, actual);
        }
        _ => {
            if expected != actual {
                recorder.record_mismatch(FailureKind::ValueMismatch, path, expected, actual);
            }
        }
    }
}
