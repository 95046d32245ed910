//! # Token Decoders
//!
//! Each id maps back to its word, or to `[UNK]` when out of range;
//! the words are joined with single spaces.

mod token_decoder;

#[doc(inline)]
pub use token_decoder::TokenDecoder;
