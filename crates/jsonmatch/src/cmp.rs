//! Value-kind predicates and numeric-aware equality.
//!
//! JSON numbers compare by mathematical value, not by representation:
//! `12345`, `12345.0` and `1.2345e4` are the same number. Equality of
//! objects ignores key order; equality of arrays does not (order-insensitive
//! array matching is the comparator's job, not equality's).

use num_cmp::NumCmp;
use serde_json::{Map, Value};

/// Scalar here means anything that is not an object or an array; `null`
/// counts as a scalar.
pub(crate) fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Copy, Clone)]
enum Number {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(u) = value.as_u64() {
            Number::PositiveInteger(u)
        } else if let Some(i) = value.as_i64() {
            Number::NegativeInteger(i)
        } else {
            Number::Float(value.as_f64().expect("Always succeeds"))
        }
    }
}

#[allow(clippy::float_cmp)]
pub(crate) fn equal_numbers(left: &serde_json::Number, right: &serde_json::Number) -> bool {
    match (Number::from(left), Number::from(right)) {
        (Number::PositiveInteger(a), Number::PositiveInteger(b)) => a == b,
        (Number::NegativeInteger(a), Number::NegativeInteger(b)) => a == b,
        (Number::PositiveInteger(_), Number::NegativeInteger(_))
        | (Number::NegativeInteger(_), Number::PositiveInteger(_)) => false,
        (Number::PositiveInteger(a), Number::Float(b))
        | (Number::Float(b), Number::PositiveInteger(a)) => NumCmp::num_eq(a, b),
        (Number::NegativeInteger(a), Number::Float(b))
        | (Number::Float(b), Number::NegativeInteger(a)) => NumCmp::num_eq(a, b),
        (Number::Float(a), Number::Float(b)) => a == b,
    }
}

pub(crate) fn equal_values(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => equal_numbers(a, b),
        (Value::Array(a), Value::Array(b)) => equal_arrays(a, b),
        (Value::Object(a), Value::Object(b)) => equal_objects(a, b),
        _ => left == right,
    }
}

pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| equal_values(a, b))
}

pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, value)| right.get(key).is_some_and(|other| equal_values(value, other)))
}

/// Hashable normalization of a scalar used to bucket multiset matches and
/// unique-key indexes. Integral floats collapse onto their integer key so
/// `2` and `2.0` land in the same bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ScalarKey {
    Null,
    Bool(bool),
    Integer(i128),
    Float(u64),
    Text(String),
}

/// `None` for objects and arrays.
pub(crate) fn scalar_key(value: &Value) -> Option<ScalarKey> {
    match value {
        Value::Null => Some(ScalarKey::Null),
        Value::Bool(b) => Some(ScalarKey::Bool(*b)),
        Value::Number(n) => Some(number_key(n)),
        Value::String(s) => Some(ScalarKey::Text(s.clone())),
        Value::Object(_) | Value::Array(_) => None,
    }
}

// Integral f64 values inside this range convert to i128 exactly, which is
// what lets them share a bucket with u64/i64 payloads of the same value.
const MIN_INTEGRAL_FLOAT: f64 = -9_223_372_036_854_775_808.0;
const MAX_INTEGRAL_FLOAT: f64 = 18_446_744_073_709_551_615.0;

#[allow(clippy::cast_possible_truncation)]
fn number_key(number: &serde_json::Number) -> ScalarKey {
    match Number::from(number) {
        Number::PositiveInteger(u) => ScalarKey::Integer(i128::from(u)),
        Number::NegativeInteger(i) => ScalarKey::Integer(i128::from(i)),
        Number::Float(f) => {
            if f.is_finite()
                && f.fract() == 0.0
                && (MIN_INTEGRAL_FLOAT..=MAX_INTEGRAL_FLOAT).contains(&f)
            {
                ScalarKey::Integer(f as i128)
            } else {
                ScalarKey::Float(f.to_bits())
            }
        }
    }
}
