//! # Vocabulary
//!
//! This module provides the word vocabulary and its persistence.
//!
//! ## Word Vocabulary
//!
//! [`WordVocab`] is a dense, bidirectional ``{ word <-> T }`` mapping.
//! The [`SpecialToken`]s always hold ids `0..4`:
//! * `[PAD]` = 0,
//! * `[UNK]` = 1,
//! * `[SOS]` = 2,
//! * `[EOS]` = 3.
//!
//! ## Persistence
//!
//! See [`io`] for the [`io::KeyValueStore`] port and the record format.
pub mod io;

pub mod special_tokens;
pub mod validators;
pub mod vocab_source;
pub mod word_vocab;

#[doc(inline)]
pub use special_tokens::{SPECIAL_TOKEN_COUNT, SpecialToken};
#[doc(inline)]
pub use vocab_source::VocabSource;
#[doc(inline)]
pub use word_vocab::WordVocab;
