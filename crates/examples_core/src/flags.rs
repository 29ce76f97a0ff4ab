//! Textual boolean vocabulary.
//!
//! Manifest flags are spelled as the literal strings `"True"` and `"False"`. Nothing else is accepted: lowercase
//! spellings, `1`/`0` or surrounding whitespace are configuration errors.

/// Spelling of a set flag.
pub const TRUE: &str = "True";

/// Spelling of a cleared flag.
pub const FALSE: &str = "False";

/// All accepted flag spellings, in display order.
pub const SPELLINGS: &[&str] = &[TRUE, FALSE];

/// Resolve a flag spelling to a `bool`.
///
/// ## Returns
/// - `Some(true)` for `"True"`, `Some(false)` for `"False"`, `None` for anything else.
///
/// ## Examples
/// ```rust
/// use examples_core::flags;
///
/// assert_eq!(flags::from_str("True"), Some(true));
/// assert_eq!(flags::from_str("true"), None);
/// ```
pub fn from_str(text: &str) -> Option<bool> {
    match text {
        TRUE => Some(true),
        FALSE => Some(false),
        _ => None,
    }
}

/// Return the canonical spelling for a flag value.
pub fn as_str(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_spellings() {
        assert_eq!(from_str("True"), Some(true));
        assert_eq!(from_str("False"), Some(false));
    }

    #[test]
    fn test_rejects_near_misses() {
        for text in ["true", "false", "TRUE", " True", "True ", "1", "0", "", "yes"] {
            assert_eq!(from_str(text), None, "accepted {:?}", text);
        }
    }

    #[test]
    fn test_as_str_resolves_back() {
        for &spelling in SPELLINGS {
            let value = from_str(spelling).unwrap();
            assert_eq!(as_str(value), spelling);
        }
    }
}
