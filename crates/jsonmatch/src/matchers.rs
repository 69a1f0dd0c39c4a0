use regex::Regex;
use serde_json::Value;

use crate::error::Error;

/// Path-scoped override of default leaf equality.
///
/// When a [`Customization`](crate::Customization) matches the current path,
/// the matcher's verdict replaces the default comparison outright, even where
/// it disagrees with it.
pub trait ValueMatcher {
    fn matches(&self, expected: &Value, actual: &Value) -> bool;
}

/// Any `Fn(&Value, &Value) -> bool` closure is a matcher.
impl<F> ValueMatcher for F
where
    F: Fn(&Value, &Value) -> bool,
{
    fn matches(&self, expected: &Value, actual: &Value) -> bool {
        self(expected, actual)
    }
}

/// Accepts the actual value when its textual form matches a regular
/// expression in full. Strings match on their contents; every other value
/// matches on its compact JSON rendering. The expected value is ignored.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: String,
    regex: Regex,
}

impl RegexMatcher {
    /// Compile a matcher from `pattern`.
    ///
    /// The whole textual form must match, so `\d` accepts `"1"` but not
    /// `"12"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegex`] when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<RegexMatcher, Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            Error::InvalidRegex {
                pattern: pattern.to_owned(),
                source,
            }
        })?;
        Ok(RegexMatcher {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl ValueMatcher for RegexMatcher {
    fn matches(&self, _expected: &Value, actual: &Value) -> bool {
        match actual {
            Value::String(text) => self.regex.is_match(text),
            other => self.regex.is_match(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RegexMatcher, ValueMatcher};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(r"\d", &json!("1"), true; "single digit")]
    #[test_case(r"\d", &json!("12"), false; "whole text must match")]
    #[test_case(r"\d", &json!("as"), false; "letters rejected")]
    #[test_case(r"\d+", &json!(12345), true; "numbers match on rendering")]
    #[test_case(r"v\d+\.\d+", &json!("v1.12"), true; "version strings")]
    #[test_case(r"true|false", &json!(true), true; "booleans match on rendering")]
    fn regex_matching(pattern: &str, actual: &Value, expected_verdict: bool) {
        let matcher = RegexMatcher::new(pattern).expect("valid pattern");
        assert_eq!(matcher.matches(&json!(null), actual), expected_verdict);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let error = RegexMatcher::new("[").expect_err("unclosed class");
        assert!(error.to_string().contains("invalid regular expression"));
    }

    #[test]
    fn closures_are_matchers() {
        let always = |_: &Value, _: &Value| true;
        assert!(always.matches(&json!(1), &json!(2)));
    }
}
