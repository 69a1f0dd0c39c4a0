use std::fmt;

use crate::{
    error::Error,
    matchers::ValueMatcher,
    paths::{Location, Segment},
};

/// A path pattern bound to a [`ValueMatcher`].
///
/// Patterns use the dotted/indexed address grammar: dot-separated field
/// names, each optionally followed by index selectors, where `[*]` matches
/// any array index. `entry.id` addresses one field; `friends[*].pets`
/// addresses the `pets` field of every element of `friends`.
pub struct Customization {
    raw: String,
    pattern: PathPattern,
    matcher: Box<dyn ValueMatcher + Send + Sync>,
}

impl Customization {
    /// Bind `matcher` to the nodes addressed by `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when the pattern is malformed.
    pub fn new(
        pattern: &str,
        matcher: impl ValueMatcher + Send + Sync + 'static,
    ) -> Result<Customization, Error> {
        Ok(Customization {
            raw: pattern.to_owned(),
            pattern: PathPattern::parse(pattern)?,
            matcher: Box::new(matcher),
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.raw
    }

    pub(crate) fn applies_to(&self, path: &Location) -> bool {
        self.pattern.matches(path)
    }

    pub(crate) fn matcher(&self) -> &dyn ValueMatcher {
        &*self.matcher
    }
}

impl fmt::Debug for Customization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customization")
            .field("pattern", &self.raw)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PathPattern {
    segments: Vec<PatternSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Key(String),
    Index(usize),
    AnyIndex,
}

impl PatternSegment {
    fn matches(&self, segment: &Segment) -> bool {
        match (self, segment) {
            (PatternSegment::Key(pattern), Segment::Key(key)) => pattern == key,
            (PatternSegment::Index(pattern), Segment::Index(index)) => pattern == index,
            (PatternSegment::AnyIndex, Segment::Index(_)) => true,
            _ => false,
        }
    }
}

impl PathPattern {
    fn parse(pattern: &str) -> Result<PathPattern, Error> {
        let mut segments = Vec::new();
        // The empty pattern addresses the document root.
        if pattern.is_empty() {
            return Ok(PathPattern { segments });
        }
        for token in pattern.split('.') {
            let (name, mut rest) = match token.find('[') {
                Some(at) => (&token[..at], &token[at..]),
                None => (token, ""),
            };
            if name.is_empty() && rest.is_empty() {
                return Err(invalid(pattern, "empty path token"));
            }
            if !name.is_empty() {
                segments.push(PatternSegment::Key(name.to_owned()));
            }
            while !rest.is_empty() {
                let Some(close) = rest.find(']') else {
                    return Err(invalid(pattern, "unterminated index selector"));
                };
                let selector = &rest[1..close];
                if selector == "*" {
                    segments.push(PatternSegment::AnyIndex);
                } else {
                    let index = selector
                        .parse::<usize>()
                        .map_err(|_| invalid(pattern, "index selector is not a number"))?;
                    segments.push(PatternSegment::Index(index));
                }
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(invalid(pattern, "unexpected text after index selector"));
                }
            }
        }
        Ok(PathPattern { segments })
    }

    fn matches(&self, path: &Location) -> bool {
        let segments = path.segments();
        self.segments.len() == segments.len()
            && self
                .segments
                .iter()
                .zip(segments)
                .all(|(pattern, segment)| pattern.matches(segment))
    }
}

fn invalid(pattern: &str, reason: &'static str) -> Error {
    Error::InvalidPattern {
        pattern: pattern.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::PathPattern;
    use crate::paths::Location;
    use test_case::test_case;

    fn location(steps: &[(&str, Option<usize>)]) -> Location {
        let mut path = Location::root();
        for (key, index) in steps {
            if !key.is_empty() {
                path = path.join(*key);
            }
            if let Some(index) = index {
                path = path.join(*index);
            }
        }
        path
    }

    #[test_case("entry.id", &[("entry", None), ("id", None)], true; "plain fields")]
    #[test_case("entry.id", &[("entry", None)], false; "prefix does not match")]
    #[test_case("entry", &[("entry", None), ("id", None)], false; "shorter pattern does not match")]
    #[test_case("friends[1].pets", &[("friends", Some(1)), ("pets", None)], true; "fixed index")]
    #[test_case("friends[1].pets", &[("friends", Some(2)), ("pets", None)], false; "other index")]
    #[test_case("friends[*].pets", &[("friends", Some(7)), ("pets", None)], true; "wildcard index")]
    #[test_case("friends[*]", &[("friends", None)], false; "wildcard needs an index segment")]
    #[test_case("[0]", &[("", Some(0))], true; "top level index")]
    #[test_case("[*]", &[("", Some(3))], true; "top level wildcard")]
    #[test_case("", &[], true; "empty pattern matches root")]
    fn pattern_matching(pattern: &str, path: &[(&str, Option<usize>)], expected: bool) {
        let pattern = PathPattern::parse(pattern).expect("valid pattern");
        assert_eq!(pattern.matches(&location(path)), expected);
    }

    #[test_case("a..b"; "empty token")]
    #[test_case("a[x]"; "non numeric index")]
    #[test_case("a[1"; "unterminated selector")]
    #[test_case("a[1]b"; "trailing text after selector")]
    fn malformed_patterns(pattern: &str) {
        let error = PathPattern::parse(pattern).expect_err("malformed");
        assert!(error.to_string().contains("invalid path pattern"));
    }
}
