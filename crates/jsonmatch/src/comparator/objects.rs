use serde_json::{Map, Value};

use crate::{
    comparator::{values, Comparator},
    paths::Location,
    result::{FailureKind, Recorder},
};

/// Walk the expected keys, then account for the actual-only keys.
///
/// Key order is never significant; reporting follows expected-key order,
/// with unexpected actual keys appended in actual-key order.
pub(crate) fn compare_objects<C: Comparator + ?Sized>(
    comparator: &C,
    path: &Location,
    expected: &Map<String, Value>,
    actual: &Map<String, Value>,
    recorder: &mut Recorder,
) {
    for (key, expected_value) in expected {
        let field = path.join(key.as_str());
        match actual.get(key) {
            Some(actual_value) => {
                values::compare_values(comparator, &field, expected_value, actual_value, recorder);
            }
            None => recorder.record_missing(FailureKind::MissingField, &field, expected_value),
        }
    }
    if !comparator.mode().is_extensible() {
        for (key, actual_value) in actual {
            if !expected.contains_key(key) {
                recorder.record_unexpected(
                    FailureKind::UnexpectedField,
                    &path.join(key.as_str()),
                    actual_value,
                );
            }
        }
    }
}
