//! SMS routing action generator.
//!
//! Turns a file of phone numbers into `SET_DEST_LA`/`SET_ESME_GROUP` action
//! lines for an SMS gateway's routing table.

pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod format;
pub mod pipeline;
pub mod validate;
