mod arrays;
mod objects;
mod values;

use std::fmt;

pub(crate) use values::compare_values;

use crate::{
    customization::Customization, matchers::ValueMatcher, modes::CompareMode, paths::Location,
};

/// The capability consumed by the comparison engine.
///
/// A comparator supplies the policy ([`mode`](Comparator::mode)) and the
/// path-specific overrides ([`override_for`](Comparator::override_for)); the
/// recursive walk itself is shared engine code, so every implementation runs
/// the same algorithm.
pub trait Comparator {
    /// Comparison policy in effect.
    fn mode(&self) -> CompareMode;

    /// Override for leaf equality at `path`, if any. The default has none.
    fn override_for(&self, path: &Location) -> Option<&dyn ValueMatcher> {
        let _ = path;
        None
    }
}

/// Default engine: a [`CompareMode`] and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct DefaultComparator {
    mode: CompareMode,
}

impl DefaultComparator {
    #[must_use]
    pub fn new(mode: CompareMode) -> DefaultComparator {
        DefaultComparator { mode }
    }
}

impl Comparator for DefaultComparator {
    fn mode(&self) -> CompareMode {
        self.mode
    }
}

/// The default engine parameterized with path-scoped overrides.
///
/// Customizations are consulted in registration order; the first pattern
/// matching the full current path wins.
///
/// ```
/// use jsonmatch::{compare_with, CompareMode, CustomComparator, Customization, RegexMatcher};
/// use serde_json::json;
///
/// # fn main() -> Result<(), jsonmatch::Error> {
/// let comparator = CustomComparator::new(CompareMode::STRICT)
///     .with(Customization::new("entry.id", RegexMatcher::new(r"\d")?)?);
/// let expected = json!({"entry": {"id": "x"}});
/// assert!(compare_with(&expected, &json!({"entry": {"id": "1"}}), &comparator).passed());
/// assert!(compare_with(&expected, &json!({"entry": {"id": "as"}}), &comparator).failed());
/// # Ok(())
/// # }
/// ```
pub struct CustomComparator {
    mode: CompareMode,
    customizations: Vec<Customization>,
}

impl CustomComparator {
    #[must_use]
    pub fn new(mode: CompareMode) -> CustomComparator {
        CustomComparator {
            mode,
            customizations: Vec::new(),
        }
    }

    /// Append a customization; earlier registrations take precedence.
    #[must_use]
    pub fn with(mut self, customization: Customization) -> CustomComparator {
        self.customizations.push(customization);
        self
    }

    #[must_use]
    pub fn customizations(&self) -> &[Customization] {
        &self.customizations
    }
}

impl Comparator for CustomComparator {
    fn mode(&self) -> CompareMode {
        self.mode
    }

    fn override_for(&self, path: &Location) -> Option<&dyn ValueMatcher> {
        self.customizations
            .iter()
            .find(|customization| customization.applies_to(path))
            .map(Customization::matcher)
    }
}

impl fmt::Debug for CustomComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomComparator")
            .field("mode", &self.mode)
            .field("customizations", &self.customizations)
            .finish()
    }
}
