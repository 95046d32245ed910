//! # `wordvocab` Word-Level Tokenizer
//!
//! `wordvocab` learns a word vocabulary from a text corpus, encodes text
//! into integer token ids, and decodes ids back into text.
//!
//! Every vocabulary starts with four fixed special tokens:
//!
//! | Token   | Id |
//! | ------- | -- |
//! | `[PAD]` | 0  |
//! | `[UNK]` | 1  |
//! | `[SOS]` | 2  |
//! | `[EOS]` | 3  |
//!
//! Learned words follow, ranked by descending count, then ascending word.
//!
//! See:
//! * [`cleaning`] for how text is normalized into words.
//! * [`training`] to learn a [`vocab::WordVocab`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vocab::io`] for persistence through a [`vocab::io::KeyValueStore`].
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use wordvocab::{TokenDecoder, TokenEncoder, Tokenizer};
//!
//! let mut tokenizer: Tokenizer<u32> = Tokenizer::in_memory();
//! tokenizer.learn_vocab("the quick brown fox").unwrap();
//!
//! let tokens = tokenizer.encode("The fox!", true);
//! assert_eq!(tokens.first(), Some(&2));
//! assert_eq!(tokenizer.decode(&tokens, true), "the fox");
//! assert_eq!(tokenizer.decode(&tokens, false), "[SOS] the fox [EOS]");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "store")]
#[doc(inline)]
pub use wordvocab_store as store;

pub mod cleaning;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{WVResult, WordVocabError};
#[doc(inline)]
pub use tokenizer::{SharedTokenizer, Tokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialToken, VocabSource, WordVocab};
