use std::fmt;

use serde_json::Value;

use crate::{cmp, paths::Location};

/// The closed taxonomy of recordable differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Expected and actual are structurally incompatible kinds.
    TypeMismatch,
    /// Scalar inequality after customization lookup.
    ValueMismatch,
    /// Array lengths differ where they must agree.
    ArrayLengthMismatch,
    /// Ordered comparison found the expected element at another position.
    ArrayOrderMismatch,
    /// Expected object key absent from actual.
    MissingField,
    /// Actual object key not sanctioned by expected.
    UnexpectedField,
    /// Expected array element with no counterpart in actual.
    MissingElement,
    /// Actual array element not claimed by any expected element.
    UnexpectedElement,
}

impl FailureKind {
    #[must_use]
    pub fn is_mismatch(self) -> bool {
        matches!(
            self,
            FailureKind::TypeMismatch
                | FailureKind::ValueMismatch
                | FailureKind::ArrayLengthMismatch
                | FailureKind::ArrayOrderMismatch
        )
    }

    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, FailureKind::MissingField | FailureKind::MissingElement)
    }

    #[must_use]
    pub fn is_unexpected(self) -> bool {
        matches!(
            self,
            FailureKind::UnexpectedField | FailureKind::UnexpectedElement
        )
    }
}

/// One recorded difference at one path.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    kind: FailureKind,
    field: String,
    expected: Option<Value>,
    actual: Option<Value>,
}

impl FieldFailure {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Rendered path of the difference; `$` is the document root.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The expected value, where one applies (absent for unexpected content).
    #[must_use]
    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_ref()
    }

    /// The actual value, where one applies (absent for missing content).
    #[must_use]
    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_ref()
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = OptionalValue(self.expected.as_ref());
        let actual = OptionalValue(self.actual.as_ref());
        match self.kind {
            FailureKind::ValueMismatch => {
                write!(f, "{}: expected {expected} but got {actual}", self.field)
            }
            FailureKind::TypeMismatch => write!(
                f,
                "{}: expected a value of type {} but got {}",
                self.field,
                self.expected.as_ref().map_or("unknown", cmp::json_kind),
                self.actual.as_ref().map_or("unknown", cmp::json_kind),
            ),
            FailureKind::ArrayOrderMismatch => write!(
                f,
                "{}: expected {expected} but got {actual} (element order differs)",
                self.field
            ),
            FailureKind::ArrayLengthMismatch => write!(
                f,
                "{}[]: expected {expected} elements but got {actual}",
                self.field
            ),
            FailureKind::MissingField | FailureKind::MissingElement => {
                write!(f, "{}: expected {expected} but none found", self.field)
            }
            FailureKind::UnexpectedField | FailureKind::UnexpectedElement => {
                write!(f, "{}: unexpected {actual}", self.field)
            }
        }
    }
}

struct OptionalValue<'a>(Option<&'a Value>);

impl fmt::Display for OptionalValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("(none)"),
        }
    }
}

/// Mutable failure log owned by a single comparison call.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    entries: Vec<FieldFailure>,
}

impl Recorder {
    pub(crate) fn new() -> Recorder {
        Recorder::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn record_mismatch(
        &mut self,
        kind: FailureKind,
        path: &Location,
        expected: &Value,
        actual: &Value,
    ) {
        self.entries.push(FieldFailure {
            kind,
            field: path.to_string(),
            expected: Some(expected.clone()),
            actual: Some(actual.clone()),
        });
    }

    pub(crate) fn record_missing(&mut self, kind: FailureKind, path: &Location, expected: &Value) {
        self.entries.push(FieldFailure {
            kind,
            field: path.to_string(),
            expected: Some(expected.clone()),
            actual: None,
        });
    }

    pub(crate) fn record_unexpected(&mut self, kind: FailureKind, path: &Location, actual: &Value) {
        self.entries.push(FieldFailure {
            kind,
            field: path.to_string(),
            expected: None,
            actual: Some(actual.clone()),
        });
    }

    pub(crate) fn record_length_mismatch(
        &mut self,
        path: &Location,
        expected_len: usize,
        actual_len: usize,
    ) {
        self.entries.push(FieldFailure {
            kind: FailureKind::ArrayLengthMismatch,
            field: path.to_string(),
            expected: Some(Value::from(expected_len)),
            actual: Some(Value::from(actual_len)),
        });
    }

    /// Render the message and freeze the log.
    pub(crate) fn finish(self) -> CompareResult {
        let mut message = String::new();
        for entry in &self.entries {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&entry.to_string());
        }
        CompareResult {
            entries: self.entries,
            message,
        }
    }
}

/// Outcome of one comparison call.
///
/// Immutable once returned: the entry log is ordered by discovery and the
/// message is rendered exactly once, so repeated reads always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareResult {
    entries: Vec<FieldFailure>,
    message: String,
}

impl CompareResult {
    /// True when no difference was recorded.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact negation of [`passed`](CompareResult::passed).
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.passed()
    }

    /// Every recorded difference, in discovery order.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.entries
    }

    /// Value/type/length/order mismatches.
    pub fn mismatches(&self) -> impl Iterator<Item = &FieldFailure> {
        self.entries.iter().filter(|entry| entry.kind.is_mismatch())
    }

    /// Expected content with no counterpart in actual.
    pub fn missing(&self) -> impl Iterator<Item = &FieldFailure> {
        self.entries.iter().filter(|entry| entry.kind.is_missing())
    }

    /// Actual content not sanctioned by expected.
    pub fn unexpected(&self) -> impl Iterator<Item = &FieldFailure> {
        self.entries
            .iter()
            .filter(|entry| entry.kind.is_unexpected())
    }

    /// One line per recorded difference, in discovery order.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CompareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::{FailureKind, Recorder};
    use crate::paths::Location;
    use serde_json::json;

    #[test]
    fn empty_recorder_passes() {
        let result = Recorder::new().finish();
        assert!(result.passed());
        assert!(!result.failed());
        assert_eq!(result.message(), "");
    }

    #[test]
    fn entries_render_in_discovery_order() {
        let mut recorder = Recorder::new();
        let name = Location::root().join("name");
        let id = Location::root().join("id");
        recorder.record_mismatch(FailureKind::ValueMismatch, &name, &json!("Pat"), &json!("Sue"));
        recorder.record_missing(FailureKind::MissingField, &id, &json!(1));
        let result = recorder.finish();
        assert!(result.failed());
        assert_eq!(
            result.message(),
            "name: expected \"Pat\" but got \"Sue\"\nid: expected 1 but none found"
        );
        assert_eq!(result.mismatches().count(), 1);
        assert_eq!(result.missing().count(), 1);
        assert_eq!(result.unexpected().count(), 0);
    }

    #[test]
    fn length_mismatch_line() {
        let mut recorder = Recorder::new();
        recorder.record_length_mismatch(&Location::root().join("pets"), 3, 2);
        assert_eq!(
            recorder.finish().message(),
            "pets[]: expected 3 elements but got 2"
        );
    }

    #[test]
    fn type_mismatch_line() {
        let mut recorder = Recorder::new();
        recorder.record_mismatch(
            FailureKind::TypeMismatch,
            &Location::root().join("name"),
            &json!({"first": "Joe"}),
            &json!(["Joe"]),
        );
        assert_eq!(
            recorder.finish().message(),
            "name: expected a value of type object but got array"
        );
    }

    #[test]
    fn unexpected_line() {
        let mut recorder = Recorder::new();
        recorder.record_unexpected(
            FailureKind::UnexpectedField,
            &Location::root().join("name"),
            &json!("Joe"),
        );
        assert_eq!(recorder.finish().message(), "name: unexpected \"Joe\"");
    }
}
