//! Routing destination type.

use std::fmt;

/// Destination used when none is given on the command line.
pub const DEFAULT_DESTINATION: &str = "cellfsc";

/// The named routing group written into every action line of a run.
///
/// Any string is accepted. The text is substituted verbatim into a quoted
/// template field, so a destination containing `"` produces a broken line.
/// That case is reported by [`Destination::breaks_template`] but never
/// escaped or rejected.
///
/// # Examples
///
/// ```
/// use sms_actions::domain::Destination;
///
/// assert_eq!(Destination::default().as_str(), "cellfsc");
/// assert!(Destination::new("bad\"dest").breaks_template());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    pub fn new(s: impl Into<String>) -> Self {
        Destination(s.into())
    }

    /// Returns the destination as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether substituting this destination would break the template's quoting.
    pub fn breaks_template(&self) -> bool {
        self.0.contains('"')
    }
}

impl Default for Destination {
    fn default() -> Self {
        Destination::new(DEFAULT_DESTINATION)
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Destination({})", self.0)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
