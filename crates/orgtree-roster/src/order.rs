//! Display ordering for members and sibling units.
//!
//! The tree keeps members and children in insertion order. Renderers sort them with the
//! comparators here so the same roster always displays the same way.

use std::cmp::Ordering;

use crate::{Member, OrgNode};

/// Rank given to members whose position code is missing or not a number.
pub const MISSING_POSITION_RANK: i64 = 9999;

/// Width sibling codes are zero-padded to before comparison.
pub const CODE_PAD_WIDTH: usize = 4;

/// Parses the leading decimal integer of a string.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the first non-digit.
/// Returns `None` when no digit follows. Values beyond the `i64` range saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    seen.then_some(if negative { -value } else { value })
}

/// Returns the sort rank of a position code.
///
/// A code that parses to zero ranks as [`MISSING_POSITION_RANK`], the same as a missing code.
pub fn position_rank(code: &str) -> i64 {
    match parse_leading_int(code) {
        Some(0) | None => MISSING_POSITION_RANK,
        Some(rank) => rank,
    }
}

/// Returns the sort rank of an employee number; missing or non-numeric numbers rank as 0.
pub fn employee_rank(number: &str) -> i64 {
    parse_leading_int(number).unwrap_or(0)
}

/// Orders members by position code, then by employee number.
pub fn compare_members(a: &Member, b: &Member) -> Ordering {
    position_rank(&a.position_code)
        .cmp(&position_rank(&b.position_code))
        .then_with(|| employee_rank(&a.employee_number).cmp(&employee_rank(&b.employee_number)))
}

/// Left-pads a unit code with `'0'` to [`CODE_PAD_WIDTH`] characters.
///
/// Codes already at or beyond the width are returned unchanged.
pub fn padded_code(code: &str) -> String {
    let width = code.chars().count();
    if width >= CODE_PAD_WIDTH {
        return code.to_string();
    }
    let mut padded = "0".repeat(CODE_PAD_WIDTH - width);
    padded.push_str(code);
    padded
}

/// Orders sibling units by their zero-padded codes, compared as strings.
///
/// Codes longer than the pad width, or containing non-digits, compare lexicographically as-is:
/// `"10000"` sorts before `"2000"`.
pub fn compare_units(a: &OrgNode, b: &OrgNode) -> Ordering {
    padded_code(&a.code).cmp(&padded_code(&b.code))
}
