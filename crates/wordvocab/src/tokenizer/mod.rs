//! # Tokenizer
//!
//! [`Tokenizer`] owns a vocabulary, and exposes learning, encoding,
//! decoding and persistence. [`SharedTokenizer`] puts one behind a
//! single-writer lock for use from several threads.

mod shared_tokenizer;
mod word_tokenizer;

#[doc(inline)]
pub use shared_tokenizer::SharedTokenizer;
#[doc(inline)]
pub use word_tokenizer::Tokenizer;
