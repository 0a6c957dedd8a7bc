//! Per-character classifiers and the class folds built on them.
//!
//! Range questions (reserved, identifier status, identifier type) go through the
//! interval lookup. Block membership by name is plain arithmetic on the block's
//! bounds, and repertoire questions use an exact-key lookup.
//!
//! The class folds (`all_ascii`, `all_latin`, `all_allowed`) never fail: a
//! character that cannot be classified simply does not belong to the class.

use rustc_hash::FxHashSet;

use crate::policy::{permits, AllowList};
use crate::tables::{is_latin_alias, IdentifierStatus, IdentifierType};
use crate::{SafetyChecker, SafetyError};

impl<'t> SafetyChecker<'t> {
    /// Returns true if every character of `s` lies inside the named block.
    ///
    /// `block_name` may be either the long name (`Basic Latin`) or the alias (`ASCII`).
    pub fn in_block(&self, s: &str, block_name: &str) -> Result<bool, SafetyError> {
        let block = self
            .tables
            .block(block_name)
            .ok_or_else(|| SafetyError::UnknownBlock(block_name.to_string()))?;
        Ok(s.chars().all(|c| block.contains_char(c)))
    }

    /// The set of block aliases covering the characters of `s`.
    ///
    /// Fails on the first character without a repertoire entry.
    pub fn blocks(&self, s: &str) -> Result<FxHashSet<&'t str>, SafetyError> {
        s.chars()
            .map(|c| {
                self.tables
                    .char_entry(c)
                    .map(|entry| entry.block)
                    .ok_or(SafetyError::NotInRepertoire(c))
            })
            .collect()
    }

    /// Returns true if every character of `s` is reserved, a surrogate or a noncharacter.
    pub fn in_reserved(&self, s: &str) -> bool {
        s.chars().all(|c| self.tables.reserved_range(c).is_some())
    }

    /// Returns true if `c` falls inside an `Allowed` identifier status range.
    pub fn in_identifier_range(&self, c: char) -> bool {
        self.tables.status_range(c).is_some()
    }

    pub fn identifier_status(&self, c: char) -> IdentifierStatus {
        if self.in_identifier_range(c) {
            IdentifierStatus::Allowed
        } else {
            IdentifierStatus::Restricted
        }
    }

    /// Identifier types of the range covering `c`, or `None` if no range does.
    pub fn identifier_type(&self, c: char) -> Option<IdentifierType> {
        self.tables.type_range(c).map(|entry| entry.types)
    }

    /// Returns true if every character is ASCII or allow-listed.
    pub fn all_ascii(&self, s: &str, allowed: Option<&AllowList>) -> bool {
        s.chars().all(|c| c.is_ascii() || permits(allowed, c))
    }

    /// Returns true if every character that is not allow-listed belongs to
    /// Basic Latin or to a block whose alias starts with `Latin`.
    pub fn all_latin(&self, s: &str, allowed: Option<&AllowList>) -> bool {
        s.chars().all(|c| {
            permits(allowed, c)
                || self
                    .tables
                    .char_entry(c)
                    .is_some_and(|entry| is_latin_alias(entry.block))
        })
    }

    /// Returns true if every character that is not allow-listed has the
    /// `ALLOWED` identifier type.
    pub fn all_allowed(&self, s: &str, allowed: Option<&AllowList>) -> bool {
        s.chars().all(|c| {
            permits(allowed, c) || self.identifier_type(c).is_some_and(IdentifierType::is_allowed)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::tables::fixtures;
    use crate::*;

    #[test]
    fn test_in_block_by_name_and_alias() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert_eq!(checker.in_block("Aa0", "Basic Latin"), Ok(true));
        assert_eq!(checker.in_block("Aa0", "ASCII"), Ok(true));
        assert_eq!(checker.in_block("A\u{E9}", "Basic Latin"), Ok(false));
        assert_eq!(checker.in_block("\u{E9}", "Latin_1_Sup"), Ok(true));
        // The empty string is inside every block.
        assert_eq!(checker.in_block("", "Cyrillic"), Ok(true));
    }

    #[test]
    fn test_in_block_unknown_name() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert_eq!(
            checker.in_block("a", "Klingon"),
            Err(SafetyError::UnknownBlock("Klingon".to_string()))
        );
    }

    #[test]
    fn test_blocks() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        let blocks = checker.blocks("a\u{0430}A").unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.contains("ASCII"));
        assert!(blocks.contains("Cyrillic"));
        assert!(checker.blocks("").unwrap().is_empty());
    }

    #[test]
    fn test_blocks_missing_repertoire_entry() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert_eq!(checker.blocks("aZ"), Err(SafetyError::NotInRepertoire('Z')));
        assert_eq!(
            checker.blocks("\u{4E01}"),
            Err(SafetyError::NotInRepertoire('\u{4E01}')),
            "range interiors are not exact repertoire keys"
        );
    }

    #[test]
    fn test_in_reserved() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.in_reserved("\u{0378}\u{0379}"));
        assert!(checker.in_reserved("\u{FDD0}\u{FDEF}"));
        assert!(!checker.in_reserved("\u{0378}a"), "one assigned character is enough");
        assert!(!checker.in_reserved("\u{037A}"), "one past the range end");
        assert!(!checker.in_reserved("\u{0377}"), "one before the range start");
    }

    #[test]
    fn test_in_identifier_range_single_point() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.in_identifier_range('_'));
        assert!(!checker.in_identifier_range('`'), "single-point range covers only its start");
        assert!(checker.in_identifier_range('z'));
        assert!(!checker.in_identifier_range('{'));
        assert!(!checker.in_identifier_range(' '), "before the first range");
        assert_eq!(checker.identifier_status('\u{E9}'), IdentifierStatus::Allowed);
        assert_eq!(checker.identifier_status('\u{EA}'), IdentifierStatus::Restricted);
    }

    #[test]
    fn test_identifier_type() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.identifier_type('9').is_some_and(|t| t.is_allowed()));
        assert_eq!(checker.identifier_type(':'), Some(IdentifierType::NOT_XID));
        assert_eq!(checker.identifier_type(';'), None);
    }

    #[test]
    fn test_all_ascii() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.all_ascii("hello, world\u{7F}", None));
        assert!(!checker.all_ascii("caf\u{E9}", None));
        let allowed = AllowList::from("\u{E9}");
        assert!(checker.all_ascii("caf\u{E9}", Some(&allowed)));
        assert!(checker.all_ascii("", None));
    }

    #[test]
    fn test_all_latin() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.all_latin("a\u{E9}", None));
        assert!(!checker.all_latin("a\u{0300}", None));
        assert!(!checker.all_latin("B", None), "missing repertoire entry");
        let allowed = AllowList::from("\u{0300}");
        assert!(checker.all_latin("a\u{0300}", Some(&allowed)));
    }

    #[test]
    fn test_all_allowed() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert!(checker.all_allowed("Az09", None));
        assert!(!checker.all_allowed("a:b", None));
        assert!(!checker.all_allowed("a\u{AA}", None));
        assert!(!checker.all_allowed("a!", None), "no type range at all");
        let allowed = AllowList::from(":!");
        assert!(checker.all_allowed("a:b!", Some(&allowed)));
    }
}
