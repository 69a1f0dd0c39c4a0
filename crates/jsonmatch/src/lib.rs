//! # jsonmatch
//!
//! Semantic comparison of JSON documents under a configurable strictness
//! policy, with a structured diff when the documents disagree.
//!
//! The engine decides whether an *actual* document satisfies an *expected*
//! document. Strictness is the product of two orthogonal flags — may the
//! actual document carry extra content, and must arrays match by position —
//! captured by [`CompareMode`] and its four conventional combinations.
//! Differences are accumulated, never short-circuited, so a single call
//! reports the complete set of problems.
//!
//! ```
//! use jsonmatch::{compare, CompareMode};
//! use serde_json::json;
//!
//! let expected = json!({"id": 1});
//! let actual = json!({"id": 1, "name": "Joe"});
//! assert!(compare(&expected, &actual, CompareMode::LENIENT).passed());
//! assert!(compare(&expected, &actual, CompareMode::STRICT).failed());
//! ```
//!
//! Numbers compare by mathematical value, so `12345` and `12345.0` are the
//! same number in every mode. Unordered arrays are matched by content:
//! scalars as multisets, objects by an inferred identifier field where one
//! exists and by cheapest recursive comparison otherwise.
//!
//! Default equality can be overridden at specific paths with
//! [`Customization`]s carried by a [`CustomComparator`]:
//!
//! ```
//! use jsonmatch::{compare_with, CompareMode, CustomComparator, Customization, RegexMatcher};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), jsonmatch::Error> {
//! let comparator = CustomComparator::new(CompareMode::STRICT)
//!     .with(Customization::new("entry.id", RegexMatcher::new(r"\d+")?)?);
//! let result = compare_with(
//!     &json!({"entry": {"id": "x"}}),
//!     &json!({"entry": {"id": "37"}}),
//!     &comparator,
//! );
//! assert!(result.passed());
//! # Ok(())
//! # }
//! ```

pub mod assertions;
mod cmp;
mod comparator;
mod customization;
mod error;
mod matchers;
mod modes;
mod paths;
mod result;

pub use comparator::{Comparator, CustomComparator, DefaultComparator};
pub use customization::Customization;
pub use error::Error;
pub use matchers::{RegexMatcher, ValueMatcher};
pub use modes::CompareMode;
pub use paths::{Location, Segment};
pub use result::{CompareResult, FailureKind, FieldFailure};

use serde_json::Value;

/// Compare `actual` against `expected` under `mode`.
#[must_use]
pub fn compare(expected: &Value, actual: &Value, mode: CompareMode) -> CompareResult {
    compare_with(expected, actual, &DefaultComparator::new(mode))
}

/// Compare `actual` against `expected` with an explicit [`Comparator`].
///
/// This is the canonical core every other entry point funnels into.
#[must_use]
pub fn compare_with<C: Comparator + ?Sized>(
    expected: &Value,
    actual: &Value,
    comparator: &C,
) -> CompareResult {
    let mut recorder = result::Recorder::new();
    comparator::compare_values(comparator, &Location::root(), expected, actual, &mut recorder);
    recorder.finish()
}

/// Parse two JSON texts and compare them under `mode`.
///
/// # Errors
///
/// Returns [`Error::Parse`] when either input is not valid JSON.
pub fn compare_str(expected: &str, actual: &str, mode: CompareMode) -> Result<CompareResult, Error> {
    compare_str_with(expected, actual, &DefaultComparator::new(mode))
}

/// Parse two JSON texts and compare them with an explicit [`Comparator`].
///
/// # Errors
///
/// Returns [`Error::Parse`] when either input is not valid JSON.
pub fn compare_str_with<C: Comparator + ?Sized>(
    expected: &str,
    actual: &str,
    comparator: &C,
) -> Result<CompareResult, Error> {
    let expected: Value = serde_json::from_str(expected)?;
    let actual: Value = serde_json::from_str(actual)?;
    Ok(compare_with(&expected, &actual, comparator))
}
