//! Record types for the Unicode data tables and the validated table set.
//!
//! The tables are produced offline from the Unicode Character Database and UTS #39
//! data files. This module only defines their shape and checks the ordering
//! invariants once, when a [`UnicodeTables`] is built from [`RawTables`].
//! After that the set is immutable and can be shared freely between threads.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::interval::{IntervalTable, Span, TableError};

bitflags! {
    /// Boolean character properties kept in the repertoire.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharFlags: u8 {
        const ALPHA = 1 << 0;
        const MATH = 1 << 1;
        const NONCHARACTER = 1 << 2;
        const DEPRECATED = 1 << 3;
        const XID_START = 1 << 4;
        const XID_CONTINUE = 1 << 5;
    }
}

bitflags! {
    /// UTS #39 identifier types of a code point range.
    ///
    /// `ALLOWED` is derived: it is set whenever `INCLUSION` or `RECOMMENDED` is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IdentifierType: u16 {
        const ALLOWED = 1 << 0;
        const DEPRECATED = 1 << 1;
        const TECHNICAL = 1 << 2;
        const OBSOLETE = 1 << 3;
        const INCLUSION = 1 << 4;
        const EXCLUSION = 1 << 5;
        const LIMITED_USE = 1 << 6;
        const UNCOMMON_USE = 1 << 7;
        const NOT_NFKC = 1 << 8;
        const NOT_XID = 1 << 9;
        const RECOMMENDED = 1 << 10;
        const DEFAULT_IGNORABLE = 1 << 11;
    }
}

impl IdentifierType {
    pub fn is_allowed(self) -> bool {
        self.contains(IdentifierType::ALLOWED)
    }
}

/// One repertoire record: a single assigned character, or a range of them that
/// share a name template (for example `CJK UNIFIED IDEOGRAPH-#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharEntry {
    pub first: u32,
    pub last: Option<u32>,
    pub name: &'static str,
    pub flags: CharFlags,
    /// Short alias of the owning block, e.g. `Latin_1_Sup`.
    pub block: &'static str,
}

impl CharEntry {
    pub fn is_range(&self) -> bool {
        self.last.is_some()
    }

    pub fn is_xid_start(&self) -> bool {
        self.flags.contains(CharFlags::XID_START)
    }

    pub fn is_xid_continue(&self) -> bool {
        self.flags.contains(CharFlags::XID_CONTINUE)
    }
}

impl Span for CharEntry {
    fn first(&self) -> u32 {
        self.first
    }
    fn last(&self) -> Option<u32> {
        self.last
    }
}

/// A Unicode block, known under both its long name and its short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEntry {
    /// Long name, e.g. `Latin-1 Supplement`.
    pub name: &'static str,
    /// Short alias, e.g. `Latin_1_Sup`. This is the spelling used by [`CharEntry::block`].
    pub alias: &'static str,
    pub first: u32,
    pub last: u32,
}

impl BlockEntry {
    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        let cp = c as u32;
        self.first <= cp && cp <= self.last
    }

    /// Latin script blocks, including Basic Latin.
    pub fn is_latin(&self) -> bool {
        is_latin_alias(self.alias)
    }
}

impl Span for BlockEntry {
    fn first(&self) -> u32 {
        self.first
    }
    fn last(&self) -> Option<u32> {
        Some(self.last)
    }
}

pub(crate) fn is_latin_alias(alias: &str) -> bool {
    alias == "ASCII" || alias.starts_with("Latin")
}

/// Why a code point range has no assigned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKind {
    Reserved,
    Surrogate,
    Noncharacter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedEntry {
    pub kind: ReservedKind,
    pub first: u32,
    pub last: u32,
}

impl Span for ReservedEntry {
    fn first(&self) -> u32 {
        self.first
    }
    fn last(&self) -> Option<u32> {
        Some(self.last)
    }
}

/// UTS #39 identifier status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierStatus {
    Allowed,
    Restricted,
}

/// A range whose identifier status is `Allowed`. Everything else is restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub first: u32,
    pub last: Option<u32>,
}

impl Span for StatusEntry {
    fn first(&self) -> u32 {
        self.first
    }
    fn last(&self) -> Option<u32> {
        self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    pub first: u32,
    pub last: Option<u32>,
    pub types: IdentifierType,
}

impl Span for TypeEntry {
    fn first(&self) -> u32 {
        self.first
    }
    fn last(&self) -> Option<u32> {
        self.last
    }
}

/// A character on the intentional confusables list and the character it mimics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusableEntry {
    pub confusing: char,
    pub canonical: char,
    pub confusing_name: &'static str,
    pub canonical_name: &'static str,
}

/// The tables as handed over by the data generator, not yet validated.
#[derive(Debug, Clone, Copy)]
pub struct RawTables<'t> {
    pub repertoire: &'t [CharEntry],
    pub blocks: &'t [BlockEntry],
    pub reserved: &'t [ReservedEntry],
    pub identifier_status: &'t [StatusEntry],
    pub identifier_type: &'t [TypeEntry],
    pub confusables: &'t [ConfusableEntry],
}

/// The validated, indexed table set every classifier reads from.
#[derive(Debug, Clone)]
pub struct UnicodeTables<'t> {
    repertoire: IntervalTable<'t, CharEntry>,
    blocks: IntervalTable<'t, BlockEntry>,
    block_names: FxHashMap<&'t str, &'t BlockEntry>,
    reserved: IntervalTable<'t, ReservedEntry>,
    identifier_status: IntervalTable<'t, StatusEntry>,
    identifier_type: IntervalTable<'t, TypeEntry>,
    confusables: FxHashMap<char, &'t ConfusableEntry>,
}

impl<'t> UnicodeTables<'t> {
    /// Validate the raw tables and build the lookup indexes.
    pub fn new(raw: RawTables<'t>) -> Result<Self, TableError> {
        let repertoire = IntervalTable::new("repertoire", raw.repertoire)?;
        let blocks = IntervalTable::new("block", raw.blocks)?;
        let reserved = IntervalTable::new("reserved", raw.reserved)?;
        let identifier_status = IntervalTable::new("identifier status", raw.identifier_status)?;
        let identifier_type = IntervalTable::new("identifier type", raw.identifier_type)?;

        let mut block_names = FxHashMap::default();
        for block in raw.blocks {
            if block_names.insert(block.name, block).is_some() {
                return Err(TableError::DuplicateBlock(block.name.to_string()));
            }
            // Blocks like "Cyrillic" use the same spelling for both.
            if block.alias != block.name && block_names.insert(block.alias, block).is_some() {
                return Err(TableError::DuplicateBlock(block.alias.to_string()));
            }
        }

        let mut confusables = FxHashMap::default();
        for entry in raw.confusables {
            if confusables.insert(entry.confusing, entry).is_some() {
                return Err(TableError::DuplicateConfusable(entry.confusing));
            }
        }

        tracing::debug!(
            repertoire = repertoire.len(),
            blocks = blocks.len(),
            reserved = reserved.len(),
            identifier_status = identifier_status.len(),
            identifier_type = identifier_type.len(),
            confusables = confusables.len(),
            "unicode tables validated"
        );

        Ok(Self {
            repertoire,
            blocks,
            block_names,
            reserved,
            identifier_status,
            identifier_type,
            confusables,
        })
    }

    /// Exact-key repertoire lookup. A range entry answers only for its first code point.
    pub fn char_entry(&self, c: char) -> Option<&'t CharEntry> {
        self.repertoire.exact(c as u32)
    }

    /// Block by long name or short alias.
    pub fn block(&self, name: &str) -> Option<&'t BlockEntry> {
        self.block_names.get(name).copied()
    }

    /// Block containing the code point, if any.
    pub fn block_of(&self, c: char) -> Option<&'t BlockEntry> {
        self.blocks.find(c as u32)
    }

    pub fn reserved_range(&self, c: char) -> Option<&'t ReservedEntry> {
        self.reserved.find(c as u32)
    }

    pub fn status_range(&self, c: char) -> Option<&'t StatusEntry> {
        self.identifier_status.find(c as u32)
    }

    pub fn type_range(&self, c: char) -> Option<&'t TypeEntry> {
        self.identifier_type.find(c as u32)
    }

    pub fn confusable(&self, c: char) -> Option<&'t ConfusableEntry> {
        self.confusables.get(&c).copied()
    }

    pub fn repertoire(&self) -> &'t [CharEntry] {
        self.repertoire.entries()
    }

    pub fn blocks(&self) -> &'t [BlockEntry] {
        self.blocks.entries()
    }

    pub fn reserved(&self) -> &'t [ReservedEntry] {
        self.reserved.entries()
    }

    pub fn identifier_status(&self) -> &'t [StatusEntry] {
        self.identifier_status.entries()
    }

    pub fn identifier_type(&self) -> &'t [TypeEntry] {
        self.identifier_type.entries()
    }

    pub fn confusable_count(&self) -> usize {
        self.confusables.len()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A tiny hand-made table set, small enough to reason about edge cases.

    use super::*;

    const L: CharFlags = CharFlags::ALPHA
        .union(CharFlags::XID_START)
        .union(CharFlags::XID_CONTINUE);
    const D: CharFlags = CharFlags::XID_CONTINUE;
    const RECOMMENDED: IdentifierType = IdentifierType::ALLOWED.union(IdentifierType::RECOMMENDED);

    const fn ch(first: u32, name: &'static str, flags: CharFlags, block: &'static str) -> CharEntry {
        CharEntry {
            first,
            last: None,
            name,
            flags,
            block,
        }
    }

    const fn blk(name: &'static str, alias: &'static str, first: u32, last: u32) -> BlockEntry {
        BlockEntry {
            name,
            alias,
            first,
            last,
        }
    }

    pub static REPERTOIRE: &[CharEntry] = &[
        ch(0x30, "DIGIT ZERO", D, "ASCII"),
        ch(0x41, "LATIN CAPITAL LETTER A", L, "ASCII"),
        ch(0x61, "LATIN SMALL LETTER A", L, "ASCII"),
        ch(0xE9, "LATIN SMALL LETTER E WITH ACUTE", L, "Latin_1_Sup"),
        ch(0x0300, "COMBINING GRAVE ACCENT", D, "Diacriticals"),
        ch(0x0430, "CYRILLIC SMALL LETTER A", L, "Cyrillic"),
        CharEntry {
            first: 0x4E00,
            last: Some(0x9FFF),
            name: "CJK UNIFIED IDEOGRAPH-#",
            flags: L,
            block: "CJK",
        },
    ];

    pub static BLOCKS: &[BlockEntry] = &[
        blk("Basic Latin", "ASCII", 0x00, 0x7F),
        blk("Latin-1 Supplement", "Latin_1_Sup", 0x80, 0xFF),
        blk("Combining Diacritical Marks", "Diacriticals", 0x0300, 0x036F),
        blk("Cyrillic", "Cyrillic", 0x0400, 0x04FF),
        blk("CJK Unified Ideographs", "CJK", 0x4E00, 0x9FFF),
    ];

    pub static RESERVED: &[ReservedEntry] = &[
        ReservedEntry {
            kind: ReservedKind::Reserved,
            first: 0x0378,
            last: 0x0379,
        },
        ReservedEntry {
            kind: ReservedKind::Surrogate,
            first: 0xD800,
            last: 0xDFFF,
        },
        ReservedEntry {
            kind: ReservedKind::Noncharacter,
            first: 0xFDD0,
            last: 0xFDEF,
        },
    ];

    pub static STATUS: &[StatusEntry] = &[
        StatusEntry {
            first: 0x30,
            last: Some(0x39),
        },
        StatusEntry {
            first: 0x41,
            last: Some(0x5A),
        },
        StatusEntry {
            first: 0x5F,
            last: None,
        },
        StatusEntry {
            first: 0x61,
            last: Some(0x7A),
        },
        StatusEntry {
            first: 0xE9,
            last: None,
        },
    ];

    pub static TYPES: &[TypeEntry] = &[
        TypeEntry {
            first: 0x30,
            last: Some(0x39),
            types: RECOMMENDED,
        },
        TypeEntry {
            first: 0x3A,
            last: None,
            types: IdentifierType::NOT_XID,
        },
        TypeEntry {
            first: 0x41,
            last: Some(0x5A),
            types: RECOMMENDED,
        },
        TypeEntry {
            first: 0x61,
            last: Some(0x7A),
            types: RECOMMENDED,
        },
        TypeEntry {
            first: 0xAA,
            last: None,
            types: IdentifierType::NOT_NFKC,
        },
    ];

    pub static CONFUSABLES: &[ConfusableEntry] = &[ConfusableEntry {
        confusing: '\u{0430}',
        canonical: 'a',
        confusing_name: "CYRILLIC SMALL LETTER A",
        canonical_name: "LATIN SMALL LETTER A",
    }];

    pub fn raw() -> RawTables<'static> {
        RawTables {
            repertoire: REPERTOIRE,
            blocks: BLOCKS,
            reserved: RESERVED,
            identifier_status: STATUS,
            identifier_type: TYPES,
            confusables: CONFUSABLES,
        }
    }

    pub fn tables() -> UnicodeTables<'static> {
        UnicodeTables::new(raw()).expect("fixture tables are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn test_fixture_tables_validate() {
        let tables = fixtures::tables();
        assert_eq!(tables.repertoire().len(), 7);
        assert_eq!(tables.blocks().len(), 5);
        assert_eq!(tables.confusable_count(), 1);
    }

    #[test]
    fn test_char_entry_is_exact() {
        let tables = fixtures::tables();
        assert_eq!(
            tables.char_entry('A').map(|e| e.name),
            Some("LATIN CAPITAL LETTER A")
        );
        assert!(tables.char_entry('\u{4E00}').is_some_and(|e| e.is_range()));
        assert_eq!(
            tables.char_entry('\u{4E01}'),
            None,
            "interior of a range entry is not an exact key"
        );
        assert_eq!(tables.char_entry('B'), None);
    }

    #[test]
    fn test_block_by_name_or_alias() {
        let tables = fixtures::tables();
        let by_name = tables.block("Latin-1 Supplement").unwrap();
        let by_alias = tables.block("Latin_1_Sup").unwrap();
        assert_eq!(by_name, by_alias);
        assert!(by_name.is_latin());
        assert!(tables.block("Cyrillic").is_some());
        assert!(tables.block("Latin 1 Supplement").is_none());
    }

    #[test]
    fn test_block_of_gap() {
        let tables = fixtures::tables();
        assert_eq!(
            tables.block_of('\u{E9}').map(|b| b.alias),
            Some("Latin_1_Sup")
        );
        assert_eq!(tables.block_of('\u{0100}'), None);
    }

    #[test]
    fn test_identifier_type_allowed_bit() {
        let tables = fixtures::tables();
        assert!(tables.type_range('5').unwrap().types.is_allowed());
        assert!(!tables.type_range(':').unwrap().types.is_allowed());
        assert_eq!(tables.type_range('!'), None);
    }

    #[test]
    fn test_rejects_duplicate_block() {
        static DUP: &[BlockEntry] = &[
            BlockEntry {
                name: "A",
                alias: "X",
                first: 0,
                last: 1,
            },
            BlockEntry {
                name: "B",
                alias: "X",
                first: 2,
                last: 3,
            },
        ];
        let raw = RawTables {
            blocks: DUP,
            ..fixtures::raw()
        };
        assert_eq!(
            UnicodeTables::new(raw).unwrap_err(),
            TableError::DuplicateBlock("X".to_string())
        );
    }

    #[test]
    fn test_rejects_duplicate_confusable() {
        static DUP: &[ConfusableEntry] = &[
            ConfusableEntry {
                confusing: '\u{0430}',
                canonical: 'a',
                confusing_name: "",
                canonical_name: "",
            },
            ConfusableEntry {
                confusing: '\u{0430}',
                canonical: 'b',
                confusing_name: "",
                canonical_name: "",
            },
        ];
        let raw = RawTables {
            confusables: DUP,
            ..fixtures::raw()
        };
        assert_eq!(
            UnicodeTables::new(raw).unwrap_err(),
            TableError::DuplicateConfusable('\u{0430}')
        );
    }

    #[test]
    fn test_rejects_unsorted_repertoire() {
        static BAD: &[CharEntry] = &[
            CharEntry {
                first: 0x62,
                last: None,
                name: "b",
                flags: CharFlags::empty(),
                block: "ASCII",
            },
            CharEntry {
                first: 0x61,
                last: None,
                name: "a",
                flags: CharFlags::empty(),
                block: "ASCII",
            },
        ];
        let raw = RawTables {
            repertoire: BAD,
            ..fixtures::raw()
        };
        assert!(matches!(
            UnicodeTables::new(raw),
            Err(TableError::Overlapping {
                table: "repertoire",
                ..
            })
        ));
    }
}
