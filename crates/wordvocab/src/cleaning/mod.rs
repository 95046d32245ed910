//! # Text Cleaning
//!
//! Raw text is normalized into lowercase words before any
//! vocabulary lookup; see [`TextCleaner`].

mod text_cleaner;

#[doc(inline)]
pub use text_cleaner::{STRIP_PATTERN, TextCleaner, WHITESPACE_PATTERN};
