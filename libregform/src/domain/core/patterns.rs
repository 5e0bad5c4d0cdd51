//! Character-level predicates behind the registration rules.
//!
//! The password checks mirror the lookahead pattern
//! `^(?=.*[a-z])(?=.*[A-Z])(?=.*[0-9])(?=.*[^\w\s]).{6,}` with JavaScript
//! semantics: `\w` is ASCII only and `.` stops at line terminators, so only the
//! first line of the value is inspected.
use lazy_static::lazy_static;
use regex::Regex;
use validator::validate_email;

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 20;

lazy_static! {
    // `^.+@.+\..+$` where `.` excludes the ECMAScript line terminators.
    static ref EMAIL_SHAPE: Regex = Regex::new(
        r"^[^\n\r\x{2028}\x{2029}]+@[^\n\r\x{2028}\x{2029}]+\.[^\n\r\x{2028}\x{2029}]+$"
    )
    .expect("email shape pattern is valid");
}

/// General email syntax check. The empty string is left to the presence rules.
pub fn is_email(value: &str) -> bool {
    value.is_empty() || validate_email(value)
}

/// `local@domain.tld` shape.
pub fn has_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Number of characters, counted as Unicode scalar values.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn first_line(value: &str) -> &str {
    value.split(is_line_terminator).next().unwrap_or_default()
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// ECMAScript `\s`: WhiteSpace and LineTerminator code points.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Anything that is neither a word character nor whitespace.
pub fn is_symbol(c: char) -> bool {
    !is_word(c) && !is_space(c)
}

/// Lowercase, uppercase, digit and symbol all present, with at least
/// [`PASSWORD_MIN_LEN`] characters before the first line break.
pub fn has_password_classes(value: &str) -> bool {
    let line = first_line(value);
    line.chars().any(|c| c.is_ascii_lowercase())
        && line.chars().any(|c| c.is_ascii_uppercase())
        && line.chars().any(|c| c.is_ascii_digit())
        && line.chars().any(is_symbol)
        && char_len(line) >= PASSWORD_MIN_LEN
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn email_syntax_skips_empty_values() {
        assert!(is_email(""));
        assert!(is_email("a@b.c"));
        assert!(!is_email("notanemail"));
        assert!(!is_email("a@@b.c"));
    }

    #[test]
    fn email_shape_needs_a_dot_after_the_at() {
        assert!(has_email_shape("a@b.c"));
        assert!(!has_email_shape("a@b"));
        assert!(!has_email_shape("a.b@c"));
        assert!(!has_email_shape("@b.c"));
        assert!(!has_email_shape(""));
    }

    #[test]
    fn symbols_are_non_word_non_space() {
        assert!(is_symbol('!'));
        assert!(is_symbol('-'));
        assert!(is_symbol('ж'));
        assert!(!is_symbol('_'));
        assert!(!is_symbol('a'));
        assert!(!is_symbol('7'));
        assert!(!is_symbol(' '));
        assert!(!is_symbol('\t'));
    }

    #[test]
    fn whitespace_follows_ecmascript() {
        assert!(is_symbol('\u{85}'));
        assert!(!is_symbol('\u{a0}'));
        assert!(!is_symbol('\u{3000}'));
        assert!(!is_symbol('\u{feff}'));
        assert!(has_password_classes("Abc12\u{85}"));
        assert!(!has_password_classes("Abc12\u{a0}"));
    }

    #[test]
    fn email_shape_stops_at_line_terminators() {
        assert!(!has_email_shape("a\r@b.c"));
        assert!(!has_email_shape("a@b.\u{2028}c"));
        assert!(!has_email_shape("a@b\u{2029}.c"));
        assert!(has_email_shape("a\u{85}@b.c"));
    }

    #[test]
    fn password_needs_every_class() {
        assert!(has_password_classes("Abc123!@"));
        assert!(!has_password_classes("abc123!@"));
        assert!(!has_password_classes("ABC123!@"));
        assert!(!has_password_classes("Abcdef!@"));
        assert!(!has_password_classes("Abc12345"));
    }

    #[test]
    fn password_classes_only_see_the_first_line() {
        assert!(!has_password_classes("abcdef\nA1!"));
        assert!(!has_password_classes("Ab1!\nxyz"));
        assert!(has_password_classes("Abc123!@\nanything"));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(char_len("пароль"), 6);
        assert_eq!(char_len(""), 0);
    }
}
