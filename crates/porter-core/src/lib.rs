//! Shared types for the Porter stemmer workspace.
//!
//! - [`character`] -- Letter classes the rule steps test against
//! - [`enums`] -- Stemming modes, options and size limits
//! - [`error`] -- The error type shared by the engine and its bindings

pub mod character;
pub mod enums;
pub mod error;

pub use enums::{MAX_WORD_CHARS, StemMode, StemmerOptions};
pub use error::StemError;
