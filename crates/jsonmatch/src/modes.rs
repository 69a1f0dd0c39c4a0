/// Comparison policy: how much leeway the actual document gets.
///
/// A mode is the product of two orthogonal flags. `extensible` allows the
/// actual document to carry object fields and unordered-array elements that
/// the expected document does not mention. `strict_order` compares arrays
/// position by position instead of pairing elements by content.
///
/// Object key order is never significant in any mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareMode {
    extensible: bool,
    strict_order: bool,
}

impl CompareMode {
    /// No extra actual content, arrays compared by position.
    pub const STRICT: CompareMode = CompareMode::new(false, true);
    /// Extra actual content tolerated, arrays matched irrespective of order.
    pub const LENIENT: CompareMode = CompareMode::new(true, false);
    /// No extra actual content, but array order is not significant.
    pub const NON_EXTENSIBLE: CompareMode = CompareMode::new(false, false);
    /// Extra actual content tolerated, but arrays must match by position.
    pub const STRICT_ORDER: CompareMode = CompareMode::new(true, true);

    #[must_use]
    pub const fn new(extensible: bool, strict_order: bool) -> CompareMode {
        CompareMode {
            extensible,
            strict_order,
        }
    }

    /// May the actual document contain fields/elements the expected one omits?
    #[must_use]
    pub const fn is_extensible(self) -> bool {
        self.extensible
    }

    /// Are arrays compared position by position?
    #[must_use]
    pub const fn has_strict_order(self) -> bool {
        self.strict_order
    }
}

#[cfg(test)]
mod tests {
    use super::CompareMode;
    use test_case::test_case;

    #[test_case(CompareMode::STRICT, false, true)]
    #[test_case(CompareMode::LENIENT, true, false)]
    #[test_case(CompareMode::NON_EXTENSIBLE, false, false)]
    #[test_case(CompareMode::STRICT_ORDER, true, true)]
    fn named_modes(mode: CompareMode, extensible: bool, strict_order: bool) {
        assert_eq!(mode.is_extensible(), extensible);
        assert_eq!(mode.has_strict_order(), strict_order);
        assert_eq!(mode, CompareMode::new(extensible, strict_order));
    }
}
