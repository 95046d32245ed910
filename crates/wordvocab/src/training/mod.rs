//! # Vocabulary Training
//!
//! Vocabularies are learned from word frequencies:
//! 1. text is cleaned and split by a [`crate::cleaning::TextCleaner`],
//! 2. a [`WordCounter`] counts each distinct word,
//! 3. [`VocabTrainer::train`] ranks the words (descending count, then
//!    ascending word) and assigns ids after the special tokens.
//!
//! ## Training Example
//!
//! ```rust
//! use compact_str::CompactString;
//! use wordvocab::{
//!     training::{VocabTrainer, VocabTrainerOptions},
//!     vocab::WordVocab,
//! };
//!
//! let mut trainer: VocabTrainer<CompactString, u64> = VocabTrainerOptions::default()
//!     .with_max_vocab_size(Some(50_000))
//!     .init();
//!
//! for line in ["the quick brown fox", "jumps over the lazy dog"] {
//!     trainer.update_from_text(line);
//! }
//!
//! let vocab: WordVocab<u32> = trainer.train().unwrap();
//! assert_eq!(vocab.token_for_word("the"), Some(4));
//! ```

mod vocab_trainer;
mod word_counter;

#[doc(inline)]
pub use vocab_trainer::{VocabTrainer, VocabTrainerOptions};
#[doc(inline)]
pub use word_counter::{WordCount, WordCounter, WordKey};
