//! unicode-safety: classify code points and strings against Unicode safety policies
//!
//! The checks are driven by tables derived from the Unicode Character Database and
//! UTS #39 (identifier status, identifier type and the intentional confusables
//! list). Every range table is searched with the same interval lookup, and the
//! per-character results are folded into string-level predicates.
//!
//! ```
//! use unicode_safety::{IdentifierLevel, SafetyChecker, StringLevel};
//!
//! let checker = SafetyChecker::builtin();
//!
//! assert!(checker.is_safe_identifier("facebook", IdentifierLevel::Ascii, None).unwrap());
//! // The "с" below is CYRILLIC SMALL LETTER ES.
//! assert!(!checker.is_safe_identifier("faсebook", IdentifierLevel::Ascii, None).unwrap());
//! assert!(checker.is_safe_string("faсebook", StringLevel::Unrestricted, None));
//! assert_eq!(checker.fix_intentional_confusion("faсebook"), "facebook");
//! ```
//!
//! The tables are immutable once built, so a [`SafetyChecker`] is `Copy` and can be
//! used from any number of threads at once:
//! ```
//! # use unicode_safety::SafetyChecker;
//! let checker = SafetyChecker::builtin();
//! let handle = std::thread::spawn(move || checker.in_reserved("\u{0378}"));
//! assert!(handle.join().unwrap());
//! ```

mod classify;
mod confusables;
pub mod interval;
mod policy;
pub mod tables;
pub mod ucd;

use std::fmt;

pub use confusables::ConfusableFinding;
pub use interval::{IntervalTable, Span, TableError};
pub use policy::{AllowList, Assessment, IdentifierLevel, SafetyConfig, StringLevel};
pub use tables::{
    BlockEntry, CharEntry, CharFlags, ConfusableEntry, IdentifierStatus, IdentifierType,
    RawTables, ReservedEntry, ReservedKind, StatusEntry, TypeEntry, UnicodeTables,
};

/// Errors reported by the safety checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyError {
    /// A level name that does not name any level of the given kind.
    InvalidLevel { kind: &'static str, value: String },
    /// A block name that is neither a block's long name nor its alias.
    UnknownBlock(String),
    /// A character that has no repertoire entry.
    NotInRepertoire(char),
    /// The `programming` identifier level needs a first character.
    EmptyIdentifier,
    /// The tables handed to the checker are malformed.
    Table(TableError),
}

impl fmt::Display for SafetyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyError::InvalidLevel { kind, value } => {
                write!(f, "unsupported {} level: {:?}", kind, value)
            }
            SafetyError::UnknownBlock(name) => write!(f, "unknown block: {:?}", name),
            SafetyError::NotInRepertoire(c) => {
                write!(f, "U+{:04X} is not in the repertoire", *c as u32)
            }
            SafetyError::EmptyIdentifier => write!(f, "empty identifier"),
            SafetyError::Table(err) => write!(f, "invalid table: {}", err),
        }
    }
}

impl std::error::Error for SafetyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SafetyError::Table(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TableError> for SafetyError {
    fn from(err: TableError) -> Self {
        SafetyError::Table(err)
    }
}

/// Entry point for every classification.
///
/// Holds a shared borrow of a validated table set. The classifiers live in
/// separate modules as `impl` blocks on this type:
/// - per-character and per-class checks (`in_block`, `in_reserved`, `all_latin`, ...)
/// - confusable detection and correction
/// - the level-based `is_safe_identifier` / `is_safe_string` predicates
#[derive(Debug, Clone, Copy)]
pub struct SafetyChecker<'t> {
    tables: &'t UnicodeTables<'t>,
}

impl<'t> SafetyChecker<'t> {
    pub fn new(tables: &'t UnicodeTables<'t>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t UnicodeTables<'t> {
        self.tables
    }
}

impl SafetyChecker<'static> {
    /// A checker over the built-in Unicode 14.0.0 tables.
    ///
    /// The tables are validated on the first call and shared afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in tables fail validation, which only a broken
    /// table generator can cause. `ucd::tests` validates them on every test run.
    /// Use [`UnicodeTables::new`] with [`ucd::raw`] to handle the error instead.
    pub fn builtin() -> Self {
        Self::new(ucd::builtin())
    }
}

impl Default for SafetyChecker<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod assert_send_sync {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_types_are_send_sync() {
        assert_send_sync::<UnicodeTables<'static>>();
        assert_send_sync::<SafetyChecker<'static>>();
        assert_send_sync::<SafetyConfig>();
    }
}
