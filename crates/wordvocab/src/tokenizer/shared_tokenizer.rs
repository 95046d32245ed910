//! # Shared Tokenizer

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    errors::WVResult,
    tokenizer::Tokenizer,
    types::TokenType,
};

/// A [`Tokenizer`] shared between threads.
///
/// Encoding, decoding and saving take the read lock; learning and loading
/// take the write lock, so readers never observe a half-built vocabulary.
/// Clones share the same tokenizer.
#[derive(Clone)]
pub struct SharedTokenizer<T: TokenType> {
    inner: Arc<RwLock<Tokenizer<T>>>,
}

impl<T: TokenType> From<Tokenizer<T>> for SharedTokenizer<T> {
    fn from(tokenizer: Tokenizer<T>) -> Self {
        Self::new(tokenizer)
    }
}

impl<T: TokenType> SharedTokenizer<T> {
    /// Wrap a tokenizer.
    pub fn new(tokenizer: Tokenizer<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tokenizer)),
        }
    }

    /// Lock for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Tokenizer<T>> {
        self.inner.read()
    }

    /// Lock for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, Tokenizer<T>> {
        self.inner.write()
    }

    /// See [`Tokenizer::learn_vocab`].
    pub fn learn_vocab(
        &self,
        corpus: &str,
    ) -> WVResult<()> {
        self.write().learn_vocab(corpus)
    }

    /// See [`TokenEncoder::encode`].
    pub fn encode(
        &self,
        text: &str,
        add_special_tokens: bool,
    ) -> Vec<T> {
        self.read().encode(text, add_special_tokens)
    }

    /// See [`TokenDecoder::decode`].
    pub fn decode(
        &self,
        tokens: &[T],
        skip_special_tokens: bool,
    ) -> String {
        self.read().decode(tokens, skip_special_tokens)
    }

    /// See [`Tokenizer::save_vocab`].
    pub fn save_vocab(&self) -> bool {
        self.read().save_vocab()
    }

    /// See [`Tokenizer::load_vocab`].
    pub fn load_vocab(&self) -> bool {
        self.write().load_vocab()
    }

    /// See [`Tokenizer::vocab_size`].
    pub fn vocab_size(&self) -> usize {
        self.read().vocab_size()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::vocab::SPECIAL_TOKEN_COUNT;

    #[test]
    fn test_concurrent_readers_and_writer() {
        let shared: SharedTokenizer<u32> = Tokenizer::in_memory().into();
        shared.learn_vocab("red green blue").unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        // every vocabulary the writer installs knows all three words.
                        let tokens = shared.encode("red green blue", false);
                        assert_eq!(tokens.len(), 3);
                        assert!(!tokens.contains(&1));
                    }
                })
            })
            .collect();

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..20 {
                    shared
                        .learn_vocab(&format!("red green blue extra{i}"))
                        .unwrap();
                }
            })
        };

        for reader in readers {
            reader.join().unwrap();
        }
        writer.join().unwrap();

        assert_eq!(shared.vocab_size(), SPECIAL_TOKEN_COUNT + 4);
        assert_eq!(shared.decode(&shared.encode("blue red", true), true), "blue red");
    }
}
