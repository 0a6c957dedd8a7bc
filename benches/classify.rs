//! Benchmarks for unicode-safety classification
//!
//! Covers the interval lookup on its own and the string-level predicates over the
//! built-in tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unicode_safety::{IdentifierLevel, SafetyChecker, SafetyConfig, StringLevel};

const ASCII_NAME: &str = "facebook_login_handler";
const SPOOFED_NAME: &str = "f\u{0430}\u{0441}\u{0435}bo\u{03BF}k_login_handler";
const LATIN_TEXT: &str = "S\u{E3}o Paulo, Montr\u{E9}al, K\u{F8}benhavn, \u{C5}lesund";
const MIXED_TEXT: &str = "\u{7465}\u{1235}4 \u{0391}\u{0392}\u{0421} \u{1D2E}\u{1D35}\u{1D33}";

fn bench_tables_build(c: &mut Criterion) {
    c.bench_function("tables_validate", |b| {
        b.iter(|| unicode_safety::UnicodeTables::new(black_box(unicode_safety::ucd::raw())).unwrap())
    });
}

fn bench_interval_lookup(c: &mut Criterion) {
    let tables = SafetyChecker::builtin().tables();
    let samples = ['a', '\u{E9}', '\u{0378}', '\u{2CEB}', '\u{7465}', '\u{1F600}', '\u{10FFFF}'];

    c.bench_function("identifier_type_lookup", |b| {
        b.iter(|| {
            for &ch in &samples {
                black_box(tables.type_range(black_box(ch)));
            }
        })
    });

    c.bench_function("reserved_lookup", |b| {
        b.iter(|| {
            for &ch in &samples {
                black_box(tables.reserved_range(black_box(ch)));
            }
        })
    });
}

fn bench_identifier_levels(c: &mut Criterion) {
    let checker = SafetyChecker::builtin();

    for level in [
        IdentifierLevel::Ascii,
        IdentifierLevel::Programming,
        IdentifierLevel::Idmod,
    ] {
        c.bench_function(&format!("identifier_{}", level), |b| {
            b.iter(|| checker.is_safe_identifier(black_box(ASCII_NAME), level, None).unwrap())
        });
    }
}

fn bench_string_levels(c: &mut Criterion) {
    let checker = SafetyChecker::builtin();

    c.bench_function("string_latin", |b| {
        b.iter(|| checker.is_safe_string(black_box(LATIN_TEXT), StringLevel::Latin, None))
    });

    c.bench_function("string_allowed", |b| {
        b.iter(|| checker.is_safe_string(black_box(MIXED_TEXT), StringLevel::Allowed, None))
    });
}

fn bench_confusables(c: &mut Criterion) {
    let checker = SafetyChecker::builtin();

    c.bench_function("fix_confusion_clean", |b| {
        b.iter(|| checker.fix_intentional_confusion(black_box(ASCII_NAME)))
    });

    c.bench_function("fix_confusion_spoofed", |b| {
        b.iter(|| checker.fix_intentional_confusion(black_box(SPOOFED_NAME)))
    });

    c.bench_function("show_confusion_spoofed", |b| {
        b.iter(|| checker.show_intentional_confusion(black_box(SPOOFED_NAME)))
    });
}

fn bench_assess(c: &mut Criterion) {
    let checker = SafetyChecker::builtin();
    let config = SafetyConfig::new(IdentifierLevel::Idmod, StringLevel::Latin).with_allowed("-.");

    c.bench_function("assess_spoofed", |b| {
        b.iter(|| checker.assess(black_box(SPOOFED_NAME), &config).unwrap())
    });
}

criterion_group!(
    benches,
    bench_tables_build,
    bench_interval_lookup,
    bench_identifier_levels,
    bench_string_levels,
    bench_confusables,
    bench_assess,
);

criterion_main!(benches);
