//! Action line templating.
//!
//! Each accepted number becomes one line of the form
//!
//! ```text
//! { "?.?.27840037335*" }  : Actions SET_DEST_LA("cellfsc"),SET_ESME_GROUP(SAG_GROUP_1, A_ADDR)
//! ```
//!
//! Whitespace and quoting are fixed; downstream consumers parse the line by
//! layout. `SAG_GROUP_1` and `A_ADDR` are opaque literals.

use crate::domain::{ActionLine, Destination, ValidToken};

/// Build the action line for a single number.
///
/// `?` placeholders are dropped from the number, `*` wildcards are kept. The
/// destination is inserted verbatim with no escaping.
///
/// # Examples
///
/// ```
/// use sms_actions::domain::{Destination, ValidToken};
/// use sms_actions::format::format_action;
///
/// let token = ValidToken::parse("*").unwrap();
/// let line = format_action(&token, &Destination::new("grp2"));
/// assert_eq!(
///     line.as_str(),
///     r#"{ "?.?.*" }  : Actions SET_DEST_LA("grp2"),SET_ESME_GROUP(SAG_GROUP_1, A_ADDR)"#
/// );
/// ```
pub fn format_action(token: &ValidToken, destination: &Destination) -> ActionLine {
    ActionLine::new(format!(
        r#"{{ "?.?.{number}" }}  : Actions SET_DEST_LA("{dest}"),SET_ESME_GROUP(SAG_GROUP_1, A_ADDR)"#,
        number = token.dialable(),
        dest = destination.as_str(),
    ))
}

/// Build one action line per token, in order, all with the same destination.
pub fn format_actions(tokens: &[ValidToken], destination: &Destination) -> Vec<ActionLine> {
    tokens
        .iter()
        .map(|token| format_action(token, destination))
        .collect()
}
