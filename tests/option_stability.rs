//! Option toggling must not change regenerated text
//!
//! The `loc` and `raw` toggles shape the AST summary only. Every sample is
//! regenerated under each toggle combination and the text compared; the
//! metadata side is asserted separately.

use rstest::rstest;

use retrip::retrip::checker::Checker;
use retrip::retrip::options::ParseOptions;
use retrip::retrip::testing::samples;

#[rstest(
    name => ["member-assignment", "numeric-formats", "string-escapes", "iife"]
)]
fn test_toggles_do_not_change_regenerated_text(name: &str) {
    let checker = Checker::new();
    let source = samples::get(name).unwrap();

    let plain = checker
        .round_trip(source, &ParseOptions::new())
        .unwrap()
        .regenerated;
    let with_loc = checker
        .round_trip(source, &ParseOptions::new().with_loc(true))
        .unwrap()
        .regenerated;
    let with_raw = checker
        .round_trip(source, &ParseOptions::new().with_raw(true))
        .unwrap()
        .regenerated;

    assert_eq!(plain, with_loc);
    assert_eq!(plain, with_raw);
}

#[rstest(
    name => ["member-assignment", "numeric-formats", "string-escapes", "iife"],
    loc => [false, true],
    raw => [false, true]
)]
fn test_checks_pass_under_every_toggle_combination(name: &str, loc: bool, raw: bool) {
    let checker = Checker::new();
    let source = samples::get(name).unwrap();
    let options = ParseOptions::new().with_loc(loc).with_raw(raw);
    let report = checker.check(name, source, &options).unwrap();
    assert!(report.passed(), "sample '{}' failed: {:?}", name, report);
}

#[rstest(
    name => ["member-assignment", "numeric-formats", "string-escapes", "iife"]
)]
fn test_loc_retains_positions_and_plain_does_not(name: &str) {
    let checker = Checker::new();
    let source = samples::get(name).unwrap();

    let plain = checker.summarize(source, &ParseOptions::new()).unwrap();
    assert!(plain.positions.is_none());
    assert!(plain.raw_literals.is_none());

    let with_loc = checker
        .summarize(source, &ParseOptions::new().with_loc(true))
        .unwrap();
    let positions = with_loc.positions.unwrap();
    assert_eq!(positions.len(), with_loc.kinds.len());
    assert!(positions.iter().any(|p| p.end > p.start));

    // Metadata aside, both parses see the same structure
    assert_eq!(plain.kinds, with_loc.kinds);
}
