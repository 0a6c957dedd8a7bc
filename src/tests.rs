//! End-to-end checks over the built-in Unicode 14.0.0 tables.

use crate::interval::Span;
use crate::*;

const PAULO: &str = "S\u{E3}0 Paulo";
const MONTREAL: &str = "Montr\u{E9}al";
const FACEBOOK_SPOOF: &str = "f\u{0430}\u{0441}\u{0435}bo\u{03BF}k";
const BIGBIRD_MODIFIERS: &str = "\u{1D2E}\u{1D35}\u{1D33}\u{1D2E}\u{1D35}\u{1D3F}\u{1D30}";
const RESERVED: &str = "\u{03A2}\u{0530}\u{05EB}\u{05EC}\u{05EE}";
const PROGRAMMING_NOT_IDMOD: &str = "\u{AA}\u{B5}\u{133}";
const PROGRAMMING_NOT_IDMOD_PREFIXED: &str = "h\u{AA}\u{B5}\u{133}";
const ALLOWED_TYPES: &str = "\u{C0}\u{C1}\u{D6}";
const NOT_ALLOWED_TYPES: &str = "\u{C0}\u{C1}\u{D6}\u{AA}";
// A CJK ideograph inside a ranged repertoire entry, then Ethiopic, then a digit.
const INSIDE_RANGE: &str = "\u{7465}\u{1235}4";
const RESTRICTED_COPTIC: &str = "\u{2CEB}1";

fn checker() -> SafetyChecker<'static> {
    SafetyChecker::builtin()
}

#[test]
fn test_is_intentional_confusion() {
    let checker = checker();
    assert!(checker.is_intentional_confusion("\u{0430}"));
    assert!(!checker.is_intentional_confusion("f"));
    assert!(!checker.is_intentional_confusion("\u{E9}"));
    assert!(!checker.is_intentional_confusion("facebook"));
    assert!(checker.is_intentional_confusion(FACEBOOK_SPOOF));
    // Confusing, but modifier letters are not on the intentional list.
    assert!(!checker.is_intentional_confusion(BIGBIRD_MODIFIERS));
    assert!(!checker.is_intentional_confusion(RESERVED));
    assert!(!checker.is_intentional_confusion(INSIDE_RANGE));
    assert!(!checker.is_intentional_confusion(RESTRICTED_COPTIC));
}

#[test]
fn test_fix_intentional_confusion() {
    let checker = checker();
    assert_eq!(checker.fix_intentional_confusion("\u{0430}"), "a");
    assert_eq!(checker.fix_intentional_confusion("\u{E9}"), "\u{E9}");
    assert_eq!(checker.fix_intentional_confusion("f"), "f");
    assert_eq!(
        checker.fix_intentional_confusion("\u{0391}\u{0392}\u{0421}\u{0430}\u{01C3}"),
        "ABCa!"
    );
    assert_eq!(checker.fix_intentional_confusion(PAULO), PAULO);
    assert_eq!(checker.fix_intentional_confusion(MONTREAL), MONTREAL);
    assert_eq!(checker.fix_intentional_confusion(FACEBOOK_SPOOF), "facebook");
    assert_eq!(
        checker.fix_intentional_confusion(BIGBIRD_MODIFIERS),
        BIGBIRD_MODIFIERS
    );
}

#[test]
fn test_fix_intentional_confusion_is_idempotent() {
    let checker = checker();
    let mut everything: String = ucd::INTENTIONAL.iter().map(|e| e.confusing).collect();
    everything.push_str(FACEBOOK_SPOOF);
    everything.push_str(MONTREAL);

    let once = checker.fix_intentional_confusion(&everything);
    assert!(!checker.is_intentional_confusion(&once));
    assert_eq!(checker.fix_intentional_confusion(&once), once);
}

#[test]
fn test_show_intentional_confusion() {
    let checker = checker();
    assert_eq!(checker.show_intentional_confusion("\u{0430}").len(), 1);
    assert!(checker.show_intentional_confusion("f").is_empty());
    assert!(checker.show_intentional_confusion(BIGBIRD_MODIFIERS).is_empty());

    let findings = checker.show_intentional_confusion(FACEBOOK_SPOOF);
    let summary: Vec<(usize, char, char)> = findings
        .iter()
        .map(|f| (f.index, f.confusing, f.canonical))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, '\u{0430}', 'a'),
            (2, '\u{0441}', 'c'),
            (3, '\u{0435}', 'e'),
            (6, '\u{03BF}', 'o'),
        ]
    );
    assert_eq!(findings[3].confusing_name, "GREEK SMALL LETTER OMICRON");
    assert_eq!(findings[3].canonical_name, "LATIN SMALL LETTER O");
}

#[test]
fn test_show_counts_every_confusable() {
    let checker = checker();
    let all: String = ucd::INTENTIONAL.iter().map(|e| e.confusing).collect();
    let mixed = format!("x{}y{}", all, all);
    assert_eq!(
        checker.show_intentional_confusion(&mixed).len(),
        2 * ucd::INTENTIONAL.len()
    );
}

#[test]
fn test_confusables_cover_cyrillic_and_ipa_lookalikes() {
    let checker = checker();
    let expected = [
        ('\u{04D3}', '\u{E4}'),  // CYRILLIC SMALL LETTER A WITH DIAERESIS
        ('\u{0261}', 'g'),        // LATIN SMALL LETTER SCRIPT G
        ('\u{0269}', 'i'),        // LATIN SMALL LETTER IOTA
        ('\u{04CF}', 'i'),        // CYRILLIC SMALL LETTER PALOCHKA
        ('\u{0432}', '\u{0299}'), // CYRILLIC SMALL LETTER VE
        ('\u{04C0}', 'I'),        // CYRILLIC LETTER PALOCHKA
        ('\u{0585}', 'o'),        // ARMENIAN SMALL LETTER OH
        ('\u{212A}', 'K'),        // KELVIN SIGN
    ];
    for (confusing, canonical) in expected {
        let s = confusing.to_string();
        assert!(checker.is_intentional_confusion(&s), "U+{:04X}", confusing as u32);
        assert_eq!(
            checker.fix_intentional_confusion(&s),
            canonical.to_string(),
            "U+{:04X}",
            confusing as u32
        );
    }
}

#[test]
fn test_confusables_leave_latin_orthography_alone() {
    let checker = checker();
    // Czech, Romanian and Turkish spellings, and compatibility letters that NFKC folds.
    for s in ["\u{11B}\u{161}\u{10D}", "\u{219}\u{21B}", "\u{15F}\u{11F}", "\u{2102}\u{2113}"] {
        assert!(!checker.is_intentional_confusion(s), "{:?}", s);
    }
}

#[test]
fn test_in_block() {
    let checker = checker();
    assert_eq!(checker.in_block("facebook", "Basic Latin"), Ok(true));
    assert_eq!(checker.in_block("\u{0430}\u{0441}", "Cyrillic"), Ok(true));
    assert_eq!(
        checker.in_block(BIGBIRD_MODIFIERS, "Phonetic Extensions"),
        Ok(true)
    );
    assert_eq!(checker.in_block("\u{E9}", "Latin-1 Supplement"), Ok(true));
    assert_eq!(checker.in_block("\u{E9}", "Basic Latin"), Ok(false));
    assert_eq!(checker.in_block("\u{E9}", "Latin_1_Sup"), Ok(true));
}

#[test]
fn test_in_block_covers_every_block() {
    let checker = checker();
    for block in checker.tables().blocks() {
        let middle = block.first + (block.last - block.first) / 2;
        for cp in [block.first, middle, block.last] {
            // Surrogate blocks have no `char` representation.
            let Some(c) = char::from_u32(cp) else {
                continue;
            };
            let s = c.to_string();
            assert_eq!(checker.in_block(&s, block.name), Ok(true), "U+{:04X}", cp);
            assert_eq!(checker.in_block(&s, block.alias), Ok(true), "U+{:04X}", cp);
        }
    }
}

#[test]
fn test_gaps_between_blocks_belong_to_no_block() {
    let tables = checker().tables();
    for pair in tables.blocks().windows(2) {
        let gap = pair[0].last + 1;
        if gap < pair[1].first {
            if let Some(c) = char::from_u32(gap) {
                assert!(tables.block_of(c).is_none(), "U+{:04X}", gap);
            }
        }
    }
    assert!(tables.block_of('\u{10FFFF}').is_some());
}

#[test]
fn test_blocks() {
    let checker = checker();
    let set = |names: &[&'static str]| names.iter().copied().collect::<rustc_hash::FxHashSet<_>>();

    assert_eq!(checker.blocks("facebook"), Ok(set(&["ASCII"])));
    assert_eq!(
        checker.blocks(FACEBOOK_SPOOF),
        Ok(set(&["ASCII", "Cyrillic", "Greek"]))
    );
    assert_eq!(checker.blocks(BIGBIRD_MODIFIERS), Ok(set(&["Phonetic_Ext"])));
    assert_eq!(checker.blocks("\u{E9}"), Ok(set(&["Latin_1_Sup"])));
    assert_eq!(
        checker.blocks("a\u{0378}"),
        Err(SafetyError::NotInRepertoire('\u{0378}'))
    );
}

#[test]
fn test_in_reserved() {
    let checker = checker();
    assert!(!checker.in_reserved("facebook"));
    assert!(checker.in_reserved(RESERVED));
    assert!(checker.in_reserved("\u{0378}"));
    assert!(checker.in_reserved("\u{FFFE}\u{FFFF}\u{10FFFF}"));
    assert!(!checker.in_reserved("\u{0377}"));
}

#[test]
fn test_identifier_status_and_type() {
    let checker = checker();
    assert_eq!(checker.identifier_status('a'), IdentifierStatus::Allowed);
    assert_eq!(checker.identifier_status('\u{7465}'), IdentifierStatus::Allowed);
    assert_eq!(checker.identifier_status('\u{2CEB}'), IdentifierStatus::Restricted);
    assert_eq!(checker.identifier_status('\u{AA}'), IdentifierStatus::Restricted);

    assert!(checker.identifier_type('\u{C0}').is_some_and(IdentifierType::is_allowed));
    let ordinal = checker.identifier_type('\u{AA}');
    assert!(ordinal.is_some_and(|t| t.contains(IdentifierType::NOT_NFKC)));
    assert!(!ordinal.is_some_and(IdentifierType::is_allowed));
}

#[test]
fn test_safe_identifiers() {
    use IdentifierLevel::*;

    let checker = checker();
    let check = |s: &str, level, allowed: Option<&AllowList>| {
        checker
            .is_safe_identifier(s, level, allowed)
            .unwrap_or_else(|err| panic!("{:?} at {}: {}", s, level, err))
    };

    assert!(check("facebook", Ascii, None));
    assert!(!check(FACEBOOK_SPOOF, Ascii, None));
    assert!(!check("\u{E9}", Ascii, None));
    assert!(check("\u{E9}\u{E9}", Programming, None));
    assert!(!check("\u{E9}\u{0300}", Ascii, None));
    assert!(check("\u{E9}\u{0300}", Programming, None));
    assert!(!check("\u{0300}\u{E9}", Programming, None), "a mark cannot start");

    assert!(!check(INSIDE_RANGE, Ascii, None));
    assert!(!check(INSIDE_RANGE, Programming, None));
    assert!(check(INSIDE_RANGE, Idmod, None));
    assert!(!check(RESTRICTED_COPTIC, Idmod, None));

    let macron = AllowList::from("\u{100}");
    assert!(!check("\u{100}", Ascii, None));
    assert!(check("\u{100}", Ascii, Some(&macron)));
    assert!(check("\u{100}", Programming, None));

    assert!(check(PROGRAMMING_NOT_IDMOD, Programming, None));
    assert!(check(PROGRAMMING_NOT_IDMOD_PREFIXED, Programming, None));
    assert!(!check(PROGRAMMING_NOT_IDMOD, Idmod, None));
    assert!(!check(PROGRAMMING_NOT_IDMOD_PREFIXED, Idmod, None));
    let extras = AllowList::from(PROGRAMMING_NOT_IDMOD);
    assert!(check(PROGRAMMING_NOT_IDMOD_PREFIXED, Idmod, Some(&extras)));
}

#[test]
fn test_programming_rejects_unassigned() {
    let checker = checker();
    assert_eq!(
        checker.is_safe_identifier("a\u{0378}", IdentifierLevel::Programming, None),
        Ok(false)
    );
    let allowed = AllowList::from("\u{0378}");
    assert_eq!(
        checker.is_safe_identifier("a\u{0378}", IdentifierLevel::Programming, Some(&allowed)),
        Ok(true)
    );
}

#[test]
fn test_safe_strings() {
    use StringLevel::*;

    let checker = checker();
    let check = |s: &str, level| checker.is_safe_string(s, level, None);

    assert!(check("facebook", Ascii));
    assert!(!check(PAULO, Ascii));
    assert!(check(PAULO, Latin));
    assert!(!check(MONTREAL, Ascii));
    assert!(check(MONTREAL, Latin));
    assert!(!check(FACEBOOK_SPOOF, Ascii));
    assert!(check(FACEBOOK_SPOOF, Unrestricted));
    assert!(!check("\u{E9}", Ascii));
    assert!(check("\u{E9}", Latin));

    // U+0300 lives in Combining Diacritical Marks.
    assert!(!check("\u{E9}\u{0300}", Latin));
    let grave = AllowList::from("\u{0300}");
    assert!(checker.is_safe_string("\u{E9}\u{0300}", Latin, Some(&grave)));

    assert!(!check(INSIDE_RANGE, Ascii));
    assert!(!check(INSIDE_RANGE, Latin));
    // Identifier types are ranges, so the ideograph is typed even without an
    // exact repertoire key.
    assert!(check(INSIDE_RANGE, Allowed));
    assert!(check(INSIDE_RANGE, Unrestricted));
    assert!(!check(RESTRICTED_COPTIC, Allowed), "U+2CEB is an exclusion");

    assert!(!check(PROGRAMMING_NOT_IDMOD, Ascii));
    assert!(check(PROGRAMMING_NOT_IDMOD, Latin));
    assert!(!check(PROGRAMMING_NOT_IDMOD, Allowed));
    assert!(check(PROGRAMMING_NOT_IDMOD, Unrestricted));

    assert!(check(ALLOWED_TYPES, Allowed));
    assert!(!check(NOT_ALLOWED_TYPES, Allowed));
    let ordinal = AllowList::from("\u{AA}");
    assert!(checker.is_safe_string(NOT_ALLOWED_TYPES, Allowed, Some(&ordinal)));
}

#[test]
fn test_assess_spoofed_name() {
    let checker = checker();
    let config = SafetyConfig::new(IdentifierLevel::Idmod, StringLevel::Latin);

    let assessment = checker.assess(FACEBOOK_SPOOF, &config).unwrap();
    assert!(!assessment.safe_string);
    assert_eq!(assessment.confusables.len(), 4);
    assert!(!assessment.is_safe());

    let clean = checker.assess(MONTREAL, &config).unwrap();
    assert!(clean.is_safe());
}

/// Every range table answers for its last code point and not for the one after,
/// unless that is where the next range starts.
fn assert_range_boundaries<T: Span>(entries: &'static [T], lookup: impl Fn(char) -> Option<&'static T>) {
    for (i, entry) in entries.iter().enumerate() {
        let end = entry.end();
        if let Some(c) = char::from_u32(end) {
            let hit = lookup(c);
            assert!(
                hit.is_some_and(|hit| std::ptr::eq(hit, entry)),
                "U+{:04X} should hit its own range",
                end
            );
        }

        let next_starts_here = entries.get(i + 1).is_some_and(|next| next.first() == end + 1);
        if next_starts_here {
            continue;
        }
        if let Some(c) = char::from_u32(end + 1) {
            assert!(lookup(c).is_none(), "U+{:04X} is past the range", end + 1);
        }
    }
}

#[test]
fn test_range_boundaries_on_builtin_tables() {
    let tables = checker().tables();
    assert_range_boundaries(tables.reserved(), |c| tables.reserved_range(c));
    assert_range_boundaries(tables.identifier_status(), |c| tables.status_range(c));
    assert_range_boundaries(tables.identifier_type(), |c| tables.type_range(c));
    assert_range_boundaries(tables.blocks(), |c| tables.block_of(c));
}

#[test]
fn test_concurrent_readers_agree() {
    let checker = checker();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                (
                    checker.fix_intentional_confusion(FACEBOOK_SPOOF),
                    checker.in_reserved(RESERVED),
                    checker.is_safe_string(MONTREAL, StringLevel::Latin, None),
                )
            })
        })
        .collect();
    for handle in handles {
        let (fixed, reserved, latin) = handle.join().unwrap();
        assert_eq!(fixed, "facebook");
        assert!(reserved);
        assert!(latin);
    }
}
