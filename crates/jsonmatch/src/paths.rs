use std::fmt;

/// One step of a tree address: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Segment {
        Segment::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Segment {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Segment {
        Segment::Index(index)
    }
}

/// Immutable address of a node inside a document.
///
/// Rendered in dotted/indexed form (`friends[1].pets`); the document root
/// renders as `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    segments: Vec<Segment>,
}

impl Location {
    /// The document root.
    #[must_use]
    pub fn root() -> Location {
        Location::default()
    }

    /// A new location extended by one segment.
    #[must_use]
    pub fn join(&self, segment: impl Into<Segment>) -> Location {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment.into());
        Location { segments }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn root_renders_as_dollar() {
        assert_eq!(Location::root().to_string(), "$");
        assert!(Location::root().is_root());
    }

    #[test]
    fn nested_path_rendering() {
        let path = Location::root().join("friends").join(1).join("pets");
        assert_eq!(path.to_string(), "friends[1].pets");
        assert!(!path.is_root());
    }

    #[test]
    fn top_level_array_index() {
        assert_eq!(Location::root().join(0).to_string(), "[0]");
        assert_eq!(Location::root().join(2).join("id").to_string(), "[2].id");
    }

    #[test]
    fn join_does_not_mutate_the_parent() {
        let parent = Location::root().join("a");
        let _child = parent.join("b");
        assert_eq!(parent.to_string(), "a");
    }
}
