//! Locale-style string ordering for titles and listing keys.
//!
//! Follows the root-locale collation browsers use for `localeCompare`:
//! strings first compare without regard to case, with whitespace ahead of
//! punctuation, punctuation ahead of digits and digits ahead of letters.
//! Case only decides a tie, lowercase first. Raw byte order is the last
//! resort so distinct strings never compare equal.

use std::cmp::Ordering;

/// Punctuation in root-locale order; symbols not listed follow these.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

fn primary_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        (CharClass::Whitespace, 0)
    } else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        (CharClass::Punctuation, rank as u32)
    } else if c.is_numeric() {
        (CharClass::Digit, c.to_digit(10).unwrap_or(c as u32))
    } else if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (CharClass::Letter, folded as u32)
    } else {
        (CharClass::Punctuation, PUNCTUATION_ORDER.len() as u32 + c as u32)
    }
}

fn case_weight(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Compare two strings the way a default-locale `localeCompare` would.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.chars().map(case_weight).cmp(b.chars().map(case_weight)))
        .then_with(|| a.cmp(b))
}
