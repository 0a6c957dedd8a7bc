//! Sorted interval tables keyed by code point.
//!
//! Every range-based classifier in this crate goes through [`find`]. A table is a
//! slice of entries sorted by their first code point, with no two entries
//! overlapping. Gaps between entries are normal: a query that lands in a gap, or
//! before the first entry, is simply "not found".
//!
//! Entries describe their extent through the [`Span`] trait. The end of a span is
//! optional; an entry without an end covers exactly its first code point.
//!
//! ```text
//! starts:  0x0378        0x0380        0x038B
//! spans:   [0378..0379]  [0380..0383]  [038B]
//!
//! find(0x0379) -> [0378..0379]   (inside the preceding span)
//! find(0x037A) -> None           (gap)
//! find(0x038B) -> [038B]         (exact start)
//! ```

use std::fmt;

/// A contiguous run of code points described by a table entry.
pub trait Span {
    /// First code point covered by the entry.
    fn first(&self) -> u32;

    /// Last code point covered by the entry, or `None` for a single code point.
    fn last(&self) -> Option<u32>;

    /// Last code point actually covered, resolving a missing end to the start.
    #[inline]
    fn end(&self) -> u32 {
        self.last().unwrap_or_else(|| self.first())
    }

    /// Returns true if `cp` lies inside the closed range `[first, end]`.
    #[inline]
    fn contains(&self, cp: u32) -> bool {
        self.first() <= cp && cp <= self.end()
    }
}

/// Find the entry of a sorted, non-overlapping table that covers `cp`.
///
/// Lower-bound search on the start keys. An exact hit on a start key is the
/// match. Otherwise the candidate is the entry just before the insertion point,
/// which matches only if `cp` does not run past its end. A candidate without an
/// end covers only its own start, so it can never match here.
pub fn find<T: Span>(entries: &[T], cp: u32) -> Option<&T> {
    let idx = entries.partition_point(|entry| entry.first() < cp);

    if let Some(entry) = entries.get(idx) {
        if entry.first() == cp {
            return Some(entry);
        }
    }

    // Before the first range (or an empty table).
    let candidate = entries.get(idx.checked_sub(1)?)?;
    match candidate.last() {
        Some(last) if cp <= last => Some(candidate),
        _ => None,
    }
}

/// Errors found while validating a table handed over by the data generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An entry ends before it starts.
    Inverted {
        table: &'static str,
        first: u32,
        last: u32,
    },
    /// An entry starts at or before the end of the entry preceding it.
    Overlapping {
        table: &'static str,
        previous_end: u32,
        first: u32,
    },
    /// The same block name or alias appears twice.
    DuplicateBlock(String),
    /// The same confusing character appears twice.
    DuplicateConfusable(char),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Inverted { table, first, last } => write!(
                f,
                "{} table: range U+{:04X}..U+{:04X} ends before it starts",
                table, first, last
            ),
            TableError::Overlapping {
                table,
                previous_end,
                first,
            } => write!(
                f,
                "{} table: entry at U+{:04X} is not after previous end U+{:04X}",
                table, first, previous_end
            ),
            TableError::DuplicateBlock(name) => write!(f, "duplicate block name: {}", name),
            TableError::DuplicateConfusable(c) => {
                write!(f, "duplicate confusable: U+{:04X}", *c as u32)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// A validated view over a sorted, non-overlapping slice of entries.
///
/// Construction checks the ordering invariant once; lookups afterwards are a
/// plain binary search and never allocate.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTable<'t, T> {
    name: &'static str,
    entries: &'t [T],
}

impl<'t, T: Span> IntervalTable<'t, T> {
    /// Validate `entries` and wrap them. `name` is used in error messages.
    pub fn new(name: &'static str, entries: &'t [T]) -> Result<Self, TableError> {
        let mut previous_end: Option<u32> = None;
        for entry in entries {
            let first = entry.first();
            if let Some(last) = entry.last() {
                if last < first {
                    return Err(TableError::Inverted {
                        table: name,
                        first,
                        last,
                    });
                }
            }
            if let Some(previous_end) = previous_end {
                if first <= previous_end {
                    return Err(TableError::Overlapping {
                        table: name,
                        previous_end,
                        first,
                    });
                }
            }
            previous_end = Some(entry.end());
        }
        Ok(Self { name, entries })
    }

    /// The entry covering `cp`, if any.
    #[inline]
    pub fn find(&self, cp: u32) -> Option<&'t T> {
        find(self.entries, cp)
    }

    /// The entry whose first code point is exactly `cp`.
    ///
    /// Unlike [`IntervalTable::find`] this never matches the interior of a range.
    #[inline]
    pub fn exact(&self, cp: u32) -> Option<&'t T> {
        let entries = self.entries;
        entries
            .binary_search_by_key(&cp, |entry| entry.first())
            .ok()
            .map(|idx| &entries[idx])
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'t [T] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct R(u32, Option<u32>);

    impl Span for R {
        fn first(&self) -> u32 {
            self.0
        }
        fn last(&self) -> Option<u32> {
            self.1
        }
    }

    fn sample() -> Vec<R> {
        vec![
            R(0x10, Some(0x1F)),
            R(0x30, None),
            R(0x40, Some(0x40)),
            R(0x50, Some(0x5F)),
        ]
    }

    #[test]
    fn test_empty_table() {
        let empty: Vec<R> = Vec::new();
        assert_eq!(find(&empty, 0), None);
        assert_eq!(find(&empty, 0x10FFFF), None);
    }

    #[test]
    fn test_before_first_range() {
        let table = sample();
        assert_eq!(find(&table, 0), None);
        assert_eq!(find(&table, 0x0F), None);
    }

    #[test]
    fn test_exact_start() {
        let table = sample();
        assert_eq!(find(&table, 0x10), Some(&table[0]));
        assert_eq!(find(&table, 0x30), Some(&table[1]));
        assert_eq!(find(&table, 0x50), Some(&table[3]));
    }

    #[test]
    fn test_interior_and_last() {
        let table = sample();
        assert_eq!(find(&table, 0x18), Some(&table[0]));
        assert_eq!(find(&table, 0x1F), Some(&table[0]), "last is inclusive");
        assert_eq!(find(&table, 0x5F), Some(&table[3]));
    }

    #[test]
    fn test_gap_after_last() {
        let table = sample();
        assert_eq!(find(&table, 0x20), None, "last + 1 falls in a gap");
        assert_eq!(find(&table, 0x2F), None);
        assert_eq!(find(&table, 0x60), None);
        assert_eq!(find(&table, 0x10FFFF), None);
    }

    #[test]
    fn test_single_point_range() {
        let table = sample();
        assert_eq!(find(&table, 0x30), Some(&table[1]));
        // One past a range without an end never matches.
        assert_eq!(find(&table, 0x31), None);
        assert_eq!(find(&table, 0x3F), None);
        // A range whose end equals its start behaves the same way.
        assert_eq!(find(&table, 0x40), Some(&table[2]));
        assert_eq!(find(&table, 0x41), None);
    }

    #[test]
    fn test_adjacent_ranges_boundary() {
        let table = vec![R(0x00, Some(0x7F)), R(0x80, Some(0xFF))];
        assert_eq!(find(&table, 0x7F), Some(&table[0]));
        assert_eq!(
            find(&table, 0x80),
            Some(&table[1]),
            "boundary belongs to the later range"
        );
        assert_eq!(find(&table, 0x100), None);
    }

    #[test]
    fn test_every_code_point_in_sample() {
        let table = sample();
        for cp in 0..0x70 {
            let expected = table.iter().find(|r| r.contains(cp));
            assert_eq!(find(&table, cp), expected, "U+{:04X}", cp);
        }
    }

    #[test]
    fn test_validation_accepts_sorted() {
        let entries = sample();
        let table = IntervalTable::new("sample", &entries).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.find(0x55), Some(&entries[3]));
        assert_eq!(table.name(), "sample");
    }

    #[test]
    fn test_validation_rejects_inverted() {
        let entries = vec![R(0x20, Some(0x10))];
        let err = IntervalTable::new("bad", &entries).unwrap_err();
        assert_eq!(
            err,
            TableError::Inverted {
                table: "bad",
                first: 0x20,
                last: 0x10
            }
        );
    }

    #[test]
    fn test_validation_rejects_overlap_and_disorder() {
        let overlapping = vec![R(0x10, Some(0x20)), R(0x20, None)];
        assert!(matches!(
            IntervalTable::new("t", &overlapping),
            Err(TableError::Overlapping { first: 0x20, .. })
        ));

        let unsorted = vec![R(0x30, None), R(0x10, None)];
        assert!(matches!(
            IntervalTable::new("t", &unsorted),
            Err(TableError::Overlapping {
                previous_end: 0x30,
                first: 0x10,
                ..
            })
        ));
    }

    #[test]
    fn test_exact_ignores_interior() {
        let entries = sample();
        let table = IntervalTable::new("sample", &entries).unwrap();
        assert_eq!(table.exact(0x10), Some(&entries[0]));
        assert_eq!(table.exact(0x11), None);
        assert_eq!(table.exact(0x30), Some(&entries[1]));
    }
}
