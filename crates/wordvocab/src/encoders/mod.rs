//! # Token Encoders
//!
//! Text is cleaned with the encoder's [`crate::cleaning::TextCleaner`],
//! then each word maps to its id, or to `[UNK]` when absent.

mod token_encoder;

#[doc(inline)]
pub use token_encoder::TokenEncoder;
