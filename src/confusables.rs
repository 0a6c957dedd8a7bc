//! Detection and correction of intentionally confusable characters.
//!
//! The intentional confusables list is a finite set of characters that are
//! visually identical to a more common character, such as CYRILLIC SMALL LETTER A
//! for LATIN SMALL LETTER A. Lookups are hash-map membership tests, not range
//! searches.

use crate::SafetyChecker;

/// One confusable character found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfusableFinding<'t> {
    /// Position of the character, counted in characters.
    pub index: usize,
    /// Byte offset of the character in the UTF-8 string.
    pub offset: usize,
    pub confusing: char,
    pub canonical: char,
    pub confusing_name: &'t str,
    pub canonical_name: &'t str,
}

impl<'t> SafetyChecker<'t> {
    /// Returns true if any character of `s` is on the intentional confusables list.
    pub fn is_intentional_confusion(&self, s: &str) -> bool {
        s.chars().any(|c| self.tables.confusable(c).is_some())
    }

    /// Replace every confusable character with the character it mimics.
    ///
    /// Characters that are not confusable are copied unchanged. Applying this
    /// twice gives the same result as applying it once.
    pub fn fix_intentional_confusion(&self, s: &str) -> String {
        s.chars()
            .map(|c| match self.tables.confusable(c) {
                Some(entry) => entry.canonical,
                None => c,
            })
            .collect()
    }

    /// List the confusable characters of `s` in order of appearance.
    pub fn show_intentional_confusion(&self, s: &str) -> Vec<ConfusableFinding<'t>> {
        s.char_indices()
            .enumerate()
            .filter_map(|(index, (offset, c))| {
                let entry = self.tables.confusable(c)?;
                Some(ConfusableFinding {
                    index,
                    offset,
                    confusing: c,
                    canonical: entry.canonical,
                    confusing_name: entry.confusing_name,
                    canonical_name: entry.canonical_name,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::tables::fixtures;
    use crate::*;

    #[test]
    fn test_is_intentional_confusion() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.is_intentional_confusion("b\u{0430}d"));
        assert!(!checker.is_intentional_confusion("bad"));
        assert!(!checker.is_intentional_confusion(""));
    }

    #[test]
    fn test_fix_intentional_confusion() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert_eq!(checker.fix_intentional_confusion("b\u{0430}d"), "bad");
        assert_eq!(checker.fix_intentional_confusion("caf\u{E9}"), "caf\u{E9}");
        assert_eq!(checker.fix_intentional_confusion(""), "");
    }

    #[test]
    fn test_show_intentional_confusion_positions() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);

        // U+00E9 takes two bytes, so char index and byte offset diverge.
        let findings = checker.show_intentional_confusion("\u{E9}\u{0430}x\u{0430}");
        assert_eq!(findings.len(), 2);

        assert_eq!(findings[0].index, 1);
        assert_eq!(findings[0].offset, 2);
        assert_eq!(findings[0].confusing, '\u{0430}');
        assert_eq!(findings[0].canonical, 'a');
        assert_eq!(findings[0].confusing_name, "CYRILLIC SMALL LETTER A");
        assert_eq!(findings[0].canonical_name, "LATIN SMALL LETTER A");

        assert_eq!(findings[1].index, 3);
        assert_eq!(findings[1].offset, 5);
    }

    #[test]
    fn test_show_intentional_confusion_empty() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.show_intentional_confusion("").is_empty());
        assert!(checker.show_intentional_confusion("plain").is_empty());
    }
}
