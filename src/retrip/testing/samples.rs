//! Canonical sample sources
//!
//! Each sample is a small ECMAScript snippet chosen to exercise one aspect
//! of a round trip: member assignment of a function expression, literal
//! formats the generator must not destroy, string escapes, and an
//! immediately invoked function.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Assignment of a function expression to a prototype member
pub const MEMBER_ASSIGNMENT: &str =
    "Set.prototype.member = function (el) { return hasOwn.call(this.set, el); };";

/// Numeric literals in non-canonical formats
pub const NUMERIC_FORMATS: &str = "var mask = 0xFF;\nvar big = 1e3;\nvar fraction = 10.50;";

/// String literals containing escape sequences
pub const STRING_ESCAPES: &str = r#"var greeting = "first line\nsecond line\tend";"#;

/// Immediately invoked function expression
pub const IIFE: &str = "(function () { var total = 0xFF + 1e3; return total; })();";

static SAMPLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut samples = HashMap::new();
    samples.insert("member-assignment", MEMBER_ASSIGNMENT);
    samples.insert("numeric-formats", NUMERIC_FORMATS);
    samples.insert("string-escapes", STRING_ESCAPES);
    samples.insert("iife", IIFE);
    samples
});

/// Get a sample source by name
pub fn get(name: &str) -> Option<&'static str> {
    SAMPLES.get(name).copied()
}

/// List all sample names (sorted)
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = SAMPLES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in names() {
            assert!(get(name).is_some(), "sample '{}' should resolve", name);
        }
    }

    #[test]
    fn test_names_are_sorted() {
        assert_eq!(
            names(),
            vec![
                "iife",
                "member-assignment",
                "numeric-formats",
                "string-escapes",
            ]
        );
    }
}
