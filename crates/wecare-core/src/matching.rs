//! # Name Matching
//!
//! The single rule used to locate a product by operator-typed name.
//!
//! ```text
//!   "Aloe Gel"  vs  "ALOE gel"   → match    (A-Z ≡ a-z pairwise)
//!   "Aloe Gel"  vs  "Aloe Gel "  → no match (length differs)
//!   "Crème"     vs  "CRÈME"      → no match (È is not ASCII, compared exactly)
//! ```
//!
//! No locale-aware folding happens here on purpose: `products.txt` is edited
//! by hand and the same bytes must always resolve to the same product.

/// Returns `true` iff `a` and `b` have the same length and every character
/// pair is equal under ASCII case folding.
///
/// ## Example
/// ```rust
/// use wecare_core::matching::names_match;
///
/// assert!(names_match("ABC", "abc"));
/// assert!(!names_match("ABc", "abD"));
/// assert!(!names_match("abc", "abcd"));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    // ASCII folding never changes UTF-8 width, so byte length is a valid
    // early exit for the character-length check.
    if a.len() != b.len() {
        return false;
    }

    a.chars()
        .zip(b.chars())
        .all(|(x, y)| x == y || (x.is_ascii_alphabetic() && x.eq_ignore_ascii_case(&y)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_case_folding() {
        assert!(names_match("ABC", "abc"));
        assert!(names_match("Aloe Gel", "aLOE gEL"));
        assert!(!names_match("ABc", "abD"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!names_match("abc", "ab"));
        assert!(!names_match("", "a"));
        assert!(names_match("", ""));
    }

    #[test]
    fn test_non_letters_compare_exactly() {
        // '@' (0x40) and '`' (0x60) differ by 32 like case pairs, but are not letters
        assert!(!names_match("@", "`"));
        assert!(!names_match("[", "{"));
        assert!(names_match("SPF-50", "spf-50"));
    }

    #[test]
    fn test_non_ascii_is_not_folded() {
        assert!(!names_match("Crème", "CRÈME"));
        assert!(names_match("Crème", "CRème"));
    }

    proptest! {
        #[test]
        fn match_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(names_match(&a, &b), names_match(&b, &a));
        }

        #[test]
        fn match_is_reflexive(a in "\\PC{0,16}") {
            prop_assert!(names_match(&a, &a));
        }

        #[test]
        fn different_char_lengths_never_match(a in "[a-zA-Z]{0,8}", extra in "[a-zA-Z]{1,4}") {
            let longer = format!("{a}{extra}");
            prop_assert!(!names_match(&a, &longer));
        }

        #[test]
        fn ascii_case_changes_always_match(a in "[ -~]{0,16}") {
            prop_assert!(names_match(&a, &a.to_ascii_uppercase()));
            prop_assert!(names_match(&a.to_ascii_lowercase(), &a));
        }
    }
}
