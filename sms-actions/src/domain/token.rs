//! Phone number token type.

use std::fmt;

/// Error returned when a raw token contains characters outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number {token:?}: unexpected character {offending:?}")]
pub struct InvalidToken {
    token: String,
    offending: char,
}

impl InvalidToken {
    /// The rejected token, exactly as it was supplied.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The first character that is not a digit, `*` or `?`.
    pub fn offending(&self) -> char {
        self.offending
    }
}

/// Placeholder separator in raw input; never part of the dialable address.
pub const PLACEHOLDER: char = '?';

/// Routing wildcard; carried through to the generated line.
pub const WILDCARD: char = '*';

/// A raw input token that has passed validation.
///
/// Valid tokens consist only of ASCII digits, `*` and `?`. There is no length,
/// country code or dial-plan check. The empty string contains no offending
/// characters and is therefore valid; the file reader drops empty lines before
/// they get here.
///
/// # Examples
///
/// ```
/// use sms_actions::domain::ValidToken;
///
/// let token = ValidToken::parse("123?456*").unwrap();
/// assert_eq!(token.as_str(), "123?456*");
/// assert_eq!(token.dialable(), "123456*");
///
/// // Letters are rejected
/// assert!(ValidToken::parse("abc123").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ValidToken(String);

impl ValidToken {
    /// Validate a raw token.
    pub fn parse(s: &str) -> Result<Self, InvalidToken> {
        match s.chars().find(|&c| !is_allowed(c)) {
            Some(offending) => Err(InvalidToken {
                token: s.to_string(),
                offending,
            }),
            None => Ok(ValidToken(s.to_string())),
        }
    }

    /// Returns the token as a string slice, placeholders included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number with every `?` removed. `*` is left in place.
    pub fn dialable(&self) -> String {
        self.0.chars().filter(|&c| c != PLACEHOLDER).collect()
    }

    /// Consumes the token and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == WILDCARD || c == PLACEHOLDER
}

impl fmt::Debug for ValidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidToken({})", self.0)
    }
}

impl fmt::Display for ValidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_tokens() {
        assert!(ValidToken::parse("27840037335").is_ok());
        assert!(ValidToken::parse("123?456*").is_ok());
        assert!(ValidToken::parse("*").is_ok());
        assert!(ValidToken::parse("???").is_ok());
    }

    #[test]
    fn empty_is_valid() {
        let token = ValidToken::parse("").unwrap();
        assert_eq!(token.as_str(), "");
        assert_eq!(token.dialable(), "");
    }

    #[test]
    fn reject_letters() {
        let err = ValidToken::parse("abc123").unwrap_err();
        assert_eq!(err.token(), "abc123");
        assert_eq!(err.offending(), 'a');
    }

    #[test]
    fn reject_other_punctuation() {
        assert!(ValidToken::parse("+27840037335").is_err());
        assert!(ValidToken::parse("123-456").is_err());
        assert!(ValidToken::parse("123 456").is_err());
        assert!(ValidToken::parse("123#").is_err());
    }

    #[test]
    fn reject_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(ValidToken::parse("12\u{0663}").is_err());
        // Fullwidth digit one
        assert!(ValidToken::parse("\u{FF11}23").is_err());
    }

    #[test]
    fn offending_is_first_bad_character() {
        let err = ValidToken::parse("12x4y").unwrap_err();
        assert_eq!(err.offending(), 'x');
    }

    #[test]
    fn dialable_strips_placeholders_only() {
        let token = ValidToken::parse("?1?2*3?*").unwrap();
        assert_eq!(token.dialable(), "12*3*");
    }

    #[test]
    fn into_inner() {
        let token = ValidToken::parse("123?").unwrap();
        assert_eq!(token.into_inner(), "123?".to_string());
    }

    #[test]
    fn display() {
        let token = ValidToken::parse("12?*").unwrap();
        assert_eq!(format!("{}", token), "12?*");
    }

    #[test]
    fn debug() {
        let token = ValidToken::parse("12?*").unwrap();
        assert_eq!(format!("{:?}", token), "ValidToken(12?*)");
    }

    #[test]
    fn error_display() {
        let err = ValidToken::parse("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number \"abc\": unexpected character 'a'"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any string over the allowed alphabet parses
        #[test]
        fn allowed_alphabet_always_parses(s in "[0-9*?]{0,20}") {
            prop_assert!(ValidToken::parse(&s).is_ok());
        }

        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9*?]{0,20}") {
            let token = ValidToken::parse(&s).unwrap();
            prop_assert_eq!(token.as_str(), s.as_str());
        }

        /// A single letter anywhere causes rejection
        #[test]
        fn letter_rejected(
            prefix in "[0-9*?]{0,10}",
            letter in "[a-zA-Z]",
            suffix in "[0-9*?]{0,10}",
        ) {
            let s = format!("{}{}{}", prefix, letter, suffix);
            prop_assert!(ValidToken::parse(&s).is_err());
        }

        /// Dialable form never contains `?` and keeps every `*`
        #[test]
        fn dialable_drops_placeholders_keeps_wildcards(s in "[0-9*?]{0,20}") {
            let dialable = ValidToken::parse(&s).unwrap().dialable();
            prop_assert!(!dialable.contains(PLACEHOLDER));
            prop_assert_eq!(
                dialable.matches(WILDCARD).count(),
                s.matches(WILDCARD).count()
            );
        }
    }
}
