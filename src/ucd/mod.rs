//! Built-in tables generated from Unicode 14.0.0.
//!
//! Sources: the flat UCD (repertoire, blocks, reserved ranges), `IdentifierStatus.txt`
//! and `IdentifierType.txt` from UTS #39, and confusable pairs taken from the
//! UTS #39 confusable skeletons.
//! The generated modules only contain data; the constructors below keep each
//! row short.

use std::sync::OnceLock;

use crate::tables::{
    BlockEntry, CharEntry, CharFlags, ConfusableEntry, IdentifierType, RawTables, ReservedEntry,
    ReservedKind, StatusEntry, TypeEntry, UnicodeTables,
};

mod blocks;
mod identifier_status;
mod identifier_type;
mod intentional;
mod repertoire;
mod reserved;

pub use blocks::BLOCKS;
pub use identifier_status::IDENTIFIER_STATUS;
pub use identifier_type::IDENTIFIER_TYPE;
pub use intentional::INTENTIONAL;
pub use repertoire::REPERTOIRE;
pub use reserved::RESERVED;

/// Unicode version the built-in tables were generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

/// The built-in tables, unvalidated.
pub fn raw() -> RawTables<'static> {
    RawTables {
        repertoire: REPERTOIRE,
        blocks: BLOCKS,
        reserved: RESERVED,
        identifier_status: IDENTIFIER_STATUS,
        identifier_type: IDENTIFIER_TYPE,
        confusables: INTENTIONAL,
    }
}

/// The built-in tables, validated and indexed on first use.
///
/// # Panics
///
/// Panics if the compiled-in tables fail validation.
pub fn builtin() -> &'static UnicodeTables<'static> {
    static TABLES: OnceLock<UnicodeTables<'static>> = OnceLock::new();
    TABLES.get_or_init(|| match UnicodeTables::new(raw()) {
        Ok(tables) => tables,
        // The data is compiled in; a failure here is a generator bug.
        Err(err) => panic!("built-in Unicode tables are malformed: {}", err),
    })
}

const fn c(
    first: u32,
    last: Option<u32>,
    name: &'static str,
    flags: u8,
    block: &'static str,
) -> CharEntry {
    CharEntry {
        first,
        last,
        name,
        flags: CharFlags::from_bits_retain(flags),
        block,
    }
}

const fn b(name: &'static str, alias: &'static str, first: u32, last: u32) -> BlockEntry {
    BlockEntry {
        name,
        alias,
        first,
        last,
    }
}

const fn r(kind: ReservedKind, first: u32, last: u32) -> ReservedEntry {
    ReservedEntry { kind, first, last }
}

const fn s(first: u32, last: Option<u32>) -> StatusEntry {
    StatusEntry { first, last }
}

const fn t(first: u32, last: Option<u32>, types: u16) -> TypeEntry {
    TypeEntry {
        first,
        last,
        types: IdentifierType::from_bits_retain(types),
    }
}

const fn i(
    confusing: char,
    canonical: char,
    confusing_name: &'static str,
    canonical_name: &'static str,
) -> ConfusableEntry {
    ConfusableEntry {
        confusing,
        canonical,
        confusing_name,
        canonical_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Span;

    #[test]
    fn test_builtin_tables_validate() {
        let tables = UnicodeTables::new(raw());
        assert!(tables.is_ok(), "{:?}", tables.err());
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }

    #[test]
    fn test_allowed_bit_is_derived() {
        for entry in IDENTIFIER_TYPE {
            let expected = entry
                .types
                .intersects(IdentifierType::INCLUSION | IdentifierType::RECOMMENDED);
            assert_eq!(entry.types.is_allowed(), expected, "U+{:04X}", entry.first);
        }
    }

    #[test]
    fn test_confusables_do_not_chain() {
        // Canonical targets are never confusable themselves.
        let tables = builtin();
        for entry in INTENTIONAL {
            assert!(
                tables.confusable(entry.canonical).is_none(),
                "{:?} maps to a confusable",
                entry.confusing
            );
        }
    }

    #[test]
    fn test_repertoire_blocks_exist() {
        let tables = builtin();
        for entry in REPERTOIRE {
            let block = tables.block(entry.block);
            assert!(block.is_some(), "unknown block alias {}", entry.block);
            let block = block.unwrap();
            assert!(
                block.first <= entry.first && entry.end() <= block.last,
                "U+{:04X} outside {}",
                entry.first,
                block.name
            );
        }
    }

    #[test]
    fn test_reserved_and_repertoire_are_disjoint() {
        let tables = builtin();
        for range in RESERVED {
            for cp in [range.first, range.last] {
                if let Some(c) = char::from_u32(cp) {
                    assert!(tables.char_entry(c).is_none(), "U+{:04X}", cp);
                }
            }
        }
    }
}
