//! # Word Tokenizer

use std::sync::Arc;

use compact_str::CompactString;

use crate::{
    cleaning::TextCleaner,
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    errors::WVResult,
    training::{VocabTrainer, VocabTrainerOptions, WordCount, WordKey},
    types::TokenType,
    vocab::{
        VocabSource,
        WordVocab,
        io::{KeyValueStore, MemoryStore, read_vocab_records, write_vocab_records},
    },
};

/// Word-level tokenizer.
///
/// Combines:
///  * a [`WordVocab`],
///  * the [`TextCleaner`] shared by learning and encoding, and
///  * a [`KeyValueStore`] the vocabulary is saved to and loaded from.
///
/// A new tokenizer holds only the special tokens.
pub struct Tokenizer<T: TokenType> {
    vocab: WordVocab<T>,
    cleaner: TextCleaner,
    store: Arc<dyn KeyValueStore>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a tokenizer persisting to `store`.
    ///
    /// Nothing is loaded; see [`load_vocab`](Self::load_vocab).
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            vocab: WordVocab::new(),
            cleaner: TextCleaner::default(),
            store,
        }
    }

    /// Create a tokenizer persisting to a private [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The number of vocabulary entries, special tokens included.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Replace the vocabulary wholesale, without saving.
    pub fn set_vocab(
        &mut self,
        vocab: WordVocab<T>,
    ) {
        self.vocab = vocab;
    }

    /// Replace the vocabulary with one learned from `corpus`, then save it.
    ///
    /// The new vocabulary holds the special tokens at `0..4`, followed by every
    /// distinct cleaned word of `corpus` by descending count, then ascending word.
    ///
    /// A failed save is logged, not returned; the learned vocabulary
    /// stays in use either way.
    ///
    /// ## Errors
    /// [`crate::WordVocabError::VocabSizeOverflow`] if the vocabulary does not fit in `T`;
    /// the current vocabulary is kept.
    pub fn learn_vocab(
        &mut self,
        corpus: &str,
    ) -> WVResult<()> {
        let mut trainer: VocabTrainer<CompactString, u64> =
            VocabTrainer::with_cleaner(VocabTrainerOptions::default(), self.cleaner.clone());
        trainer.update_from_text(corpus);
        self.learn_from_trainer(trainer)
    }

    /// Replace the vocabulary with the one `trainer` builds, then save it.
    ///
    /// See [`learn_vocab`](Self::learn_vocab).
    pub fn learn_from_trainer<K, C>(
        &mut self,
        trainer: VocabTrainer<K, C>,
    ) -> WVResult<()>
    where
        K: WordKey,
        C: WordCount,
    {
        self.vocab = trainer.train()?;
        log::debug!("learned vocabulary of {} entries", self.vocab.len());
        self.save_vocab();
        Ok(())
    }

    /// Save the vocabulary to the store.
    pub fn try_save_vocab(&self) -> WVResult<()> {
        write_vocab_records(self.store.as_ref(), &self.vocab)
    }

    /// Save the vocabulary to the store.
    ///
    /// ## Returns
    /// `true` on success; failures are logged.
    pub fn save_vocab(&self) -> bool {
        match self.try_save_vocab() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("failed to save vocabulary: {err}");
                false
            }
        }
    }

    /// Load the vocabulary from the store.
    ///
    /// ## Returns
    /// * `Ok(true)` if a vocabulary was loaded and replaced the current one.
    /// * `Ok(false)` if the store holds no vocabulary.
    ///
    /// ## Errors
    /// If the store fails, or the stored records are malformed or inconsistent;
    /// the current vocabulary is untouched.
    pub fn try_load_vocab(&mut self) -> WVResult<bool> {
        let Some(records) = read_vocab_records(self.store.as_ref())? else {
            return Ok(false);
        };
        self.vocab = records.to_vocab()?;
        Ok(true)
    }

    /// Load the vocabulary from the store.
    ///
    /// ## Returns
    /// `true` if a vocabulary was restored; otherwise the current
    /// vocabulary is untouched, and any failure is logged.
    pub fn load_vocab(&mut self) -> bool {
        match self.try_load_vocab() {
            Ok(true) => {
                log::debug!("loaded vocabulary of {} entries", self.vocab.len());
                true
            }
            Ok(false) => {
                log::debug!("no saved vocabulary found");
                false
            }
            Err(err) => {
                log::warn!("failed to load vocabulary: {err}");
                false
            }
        }
    }
}

impl<T: TokenType> VocabSource<T> for Tokenizer<T> {
    fn vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::WordVocabError,
        types::{check_is_send, check_is_sync},
        vocab::io::{VOCAB_SIZE_KEY, WORD_TO_INDEX_KEY},
    };

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(
            &self,
            _key: &str,
        ) -> WVResult<Option<String>> {
            Ok(None)
        }

        fn set(
            &self,
            _key: &str,
            _value: &str,
        ) -> WVResult<()> {
            Err(WordVocabError::Store("read only".to_string()))
        }
    }

    #[test]
    fn test_send_sync() {
        let tokenizer: Tokenizer<u32> = Tokenizer::in_memory();
        check_is_send(&tokenizer);
        check_is_sync(&tokenizer);
    }

    #[test]
    fn test_learn_saves() {
        let store = MemoryStore::new();
        let mut tokenizer: Tokenizer<u32> = Tokenizer::new(Arc::new(store.clone()));
        assert!(store.is_empty());

        tokenizer.learn_vocab("b a b").unwrap();
        assert_eq!(tokenizer.vocab_size(), 6);
        assert_eq!(store.get(VOCAB_SIZE_KEY).unwrap().as_deref(), Some("6"));
    }

    #[test]
    fn test_learn_ignores_byte_order_mark() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::in_memory();
        tokenizer.learn_vocab("\u{feff}hello world hello").unwrap();
        assert_eq!(tokenizer.vocab_size(), 6);
        assert_eq!(tokenizer.vocab().token_for_word("hello"), Some(4));
        assert_eq!(tokenizer.encode("hello", false), vec![4]);
    }

    #[test]
    fn test_learn_replaces_wholesale() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::in_memory();
        tokenizer.learn_vocab("alpha beta gamma").unwrap();
        assert_eq!(tokenizer.vocab_size(), 7);

        tokenizer.learn_vocab("delta").unwrap();
        assert_eq!(tokenizer.vocab_size(), 5);
        assert_eq!(tokenizer.vocab().token_for_word("alpha"), None);
        assert_eq!(tokenizer.vocab().token_for_word("delta"), Some(4));
    }

    #[test]
    fn test_learn_overflow_keeps_vocab() {
        let mut tokenizer: Tokenizer<u8> = Tokenizer::in_memory();
        tokenizer.learn_vocab("small corpus").unwrap();

        let corpus: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        assert!(matches!(
            tokenizer.learn_vocab(&corpus.join(" ")),
            Err(WordVocabError::VocabSizeOverflow { .. })
        ));
        assert_eq!(tokenizer.vocab_size(), 6);
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::new(Arc::new(ReadOnlyStore));
        tokenizer.learn_vocab("still works").unwrap();
        assert_eq!(tokenizer.vocab_size(), 6);

        assert!(!tokenizer.save_vocab());
        assert!(tokenizer.try_save_vocab().is_err());
        assert!(!tokenizer.load_vocab());
        assert_eq!(tokenizer.encode("works", false), vec![5]);
    }

    #[test]
    fn test_load() {
        let store = MemoryStore::new();
        let mut tokenizer: Tokenizer<u32> = Tokenizer::new(Arc::new(store.clone()));
        assert!(!tokenizer.load_vocab());
        assert!(!tokenizer.try_load_vocab().unwrap());

        tokenizer.learn_vocab("one two two").unwrap();

        let mut fresh: Tokenizer<u32> = Tokenizer::new(Arc::new(store.clone()));
        assert!(fresh.try_load_vocab().unwrap());
        assert_eq!(fresh.vocab(), tokenizer.vocab());

        store.set(WORD_TO_INDEX_KEY, "[]").unwrap();
        let mut broken: Tokenizer<u32> = Tokenizer::new(Arc::new(store));
        assert!(broken.try_load_vocab().is_err());
        assert!(!broken.load_vocab());
        assert_eq!(broken.vocab_size(), 4);
    }
}
