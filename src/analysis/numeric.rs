//! Numeric token classifier implementation.
//!
//! This module decides whether a canonical token is a numeric or monetary
//! literal rather than prose. Both comma-thousands/period-decimal and
//! period-thousands/comma-decimal conventions are recognized, with an
//! optional leading `$` and optional leading `-`.
//!
//! # Examples
//!
//! ```
//! use lexiscan::analysis::numeric::is_number;
//!
//! assert!(is_number("7,000"));
//! assert!(is_number("-$9.000,00"));
//! assert!(!is_number("left4dead"));
//! ```

/// Check whether a token is a numeric or monetary literal.
///
/// A token qualifies iff it is non-empty and every character is an ASCII
/// digit or one of `,` `.` `-` `$`. This is a permissive character-set check
/// rather than a strict grammar; it accepts some malformed strings such as
/// `--` or a lone `$`, which is accepted behavior. Tokens containing letters
/// never qualify.
pub fn is_number(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-' | '$'))
}
