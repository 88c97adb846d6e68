//! Turning a raw reply into an integer.
//!
//! Parsing is deliberately lenient about trailing text: the longest leading
//! integer wins, so `"12abc"` is 12 and `"  -7 pages"` is -7. A reply with
//! no leading digits is not a number.

use crate::errors::PromptRejection;

/// Parse the leading base-10 integer of `text`.
///
/// Leading whitespace is skipped, one optional `+` or `-` sign is allowed,
/// then the longest run of ASCII digits is taken. Returns `None` when there
/// are no digits or the digits do not fit in an `i64`.
///
/// ```rust
/// use bookweight_core::prompt::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("12abc"), Some(12));
/// assert_eq!(parse_int_prefix(" 3.9"), Some(3));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits_len = trimmed.as_bytes()[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    // i64's FromStr accepts a leading sign, and reports overflow as an error
    trimmed[..sign_len + digits_len].parse().ok()
}

/// Classify a reply: empty, not a number, or an integer.
pub fn parse_reply(text: &str) -> Result<i64, PromptRejection> {
    if text.is_empty() {
        return Err(PromptRejection::EmptyInput);
    }
    parse_int_prefix(text).ok_or_else(|| PromptRejection::NotANumber {
        input: text.to_string(),
    })
}
