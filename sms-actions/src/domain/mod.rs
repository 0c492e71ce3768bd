//! Domain types for the action generator.
//!
//! Tokens are validated at construction time, so code that receives a
//! `ValidToken` can trust its character set.

mod action;
mod destination;
mod token;

pub use action::ActionLine;
pub use destination::{DEFAULT_DESTINATION, Destination};
pub use token::{InvalidToken, PLACEHOLDER, ValidToken, WILDCARD};
