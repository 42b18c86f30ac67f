//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use test_case::test_case;

use wordrev::adapters::SpaceManipulator;
use wordrev::core::models::Bounds;
use wordrev::core::ports::WordManipulator;

// =============================================================================
// Reversal Semantics Tests
// =============================================================================

#[test_case("this is a test", "test a is this" ; "plain sentence")]
#[test_case("all your base", "base your all" ; "three words")]
#[test_case("foobar", "foobar" ; "single word")]
#[test_case("", "" ; "empty string")]
#[test_case(" ", " " ; "single space")]
#[test_case("a  b", "b  a" ; "double space keeps its gap")]
#[test_case(" lead", "lead " ; "leading space moves to the end")]
#[test_case("trail ", " trail" ; "trailing space moves to the front")]
#[test_case("a\tb c", "c a\tb" ; "tab stays inside its word")]
#[test_case("héllo wörld", "wörld héllo" ; "multibyte words")]
fn test_reverse_words(input: &str, expected: &str) {
    assert_eq!(SpaceManipulator::new().reverse_words(input), expected);
}

// =============================================================================
// Bounds Tests
// =============================================================================

#[test_case(1, true ; "minimum is inclusive")]
#[test_case(25, true ; "maximum is inclusive")]
#[test_case(0, false ; "below minimum")]
#[test_case(26, false ; "above maximum")]
#[test_case(13, true ; "middle of range")]
fn test_default_bounds_contains(length: usize, expected: bool) {
    assert_eq!(Bounds::default().contains(length), expected);
}

#[test_case(0, 0, 0, true ; "degenerate zero range admits empty")]
#[test_case(0, 0, 1, false ; "degenerate zero range rejects one")]
#[test_case(5, 5, 5, true ; "equal bounds admit exact length")]
#[test_case(2, 100, 100, true ; "wide range upper edge")]
fn test_custom_bounds_contains(min: usize, max: usize, length: usize, expected: bool) {
    let bounds = Bounds::new(min, max).unwrap();
    assert_eq!(bounds.contains(length), expected);
}
