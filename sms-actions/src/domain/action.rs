//! Generated action line type.

use std::fmt;

/// One line of generated routing configuration.
///
/// Action lines are only built by [`crate::format`], so their layout always
/// follows the fixed `SET_DEST_LA`/`SET_ESME_GROUP` template.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ActionLine(String);

impl ActionLine {
    pub(crate) fn new(line: String) -> Self {
        ActionLine(line)
    }

    /// Returns the line as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionLine({})", self.0)
    }
}

impl fmt::Display for ActionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
