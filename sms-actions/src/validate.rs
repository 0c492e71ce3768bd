//! Filtering of raw input tokens.

use tracing::warn;

use crate::domain::ValidToken;

/// Outcome of filtering a batch of raw tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filtered {
    /// Accepted tokens, in input order.
    pub valid: Vec<ValidToken>,
    /// Number of tokens that were dropped.
    pub rejected: usize,
}

/// Keep only the tokens made of digits, `*` and `?`.
///
/// Each rejected token is logged at `warn` and skipped; filtering itself
/// never fails. The binary keeps this module's warnings enabled even when
/// `RUST_LOG` asks for less.
pub fn filter_valid_numbers<I, S>(tokens: I) -> Filtered
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filtered = Filtered::default();

    for raw in tokens {
        match ValidToken::parse(raw.as_ref()) {
            Ok(token) => filtered.valid.push(token),
            Err(err) => {
                warn!(token = err.token(), "skipping invalid number: {}", err.token());
                filtered.rejected += 1;
            }
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs(filtered: &Filtered) -> Vec<&str> {
        filtered.valid.iter().map(ValidToken::as_str).collect()
    }

    #[test]
    fn rejects_letters_keeps_rest() {
        let filtered = filter_valid_numbers(["123?456*", "abc123"]);
        assert_eq!(as_strs(&filtered), vec!["123?456*"]);
        assert_eq!(filtered.rejected, 1);
    }

    #[test]
    fn empty_input() {
        let filtered = filter_valid_numbers(Vec::<String>::new());
        assert!(filtered.valid.is_empty());
        assert_eq!(filtered.rejected, 0);
    }

    #[test]
    fn preserves_order() {
        let filtered = filter_valid_numbers(["3", "x", "1", "2", "y?", "*"]);
        assert_eq!(as_strs(&filtered), vec!["3", "1", "2", "*"]);
        assert_eq!(filtered.rejected, 2);
    }

    #[test]
    fn empty_token_passes_through() {
        let filtered = filter_valid_numbers([""]);
        assert_eq!(as_strs(&filtered), vec![""]);
    }

    #[test]
    fn duplicates_are_kept() {
        let filtered = filter_valid_numbers(["12", "12"]);
        assert_eq!(filtered.valid.len(), 2);
    }

    #[test]
    fn accepts_owned_strings() {
        let raw = vec!["27840037335*".to_string(), "+27".to_string()];
        let filtered = filter_valid_numbers(&raw);
        assert_eq!(as_strs(&filtered), vec!["27840037335*"]);
        assert_eq!(filtered.rejected, 1);
    }
}
