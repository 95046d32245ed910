//! # Vocabulary Source

use crate::{types::TokenType, vocab::WordVocab};

/// Anything holding a [`WordVocab`] that encoders and decoders can read.
pub trait VocabSource<T: TokenType> {
    /// The current vocabulary.
    fn vocab(&self) -> &WordVocab<T>;
}

impl<T: TokenType> VocabSource<T> for WordVocab<T> {
    fn vocab(&self) -> &WordVocab<T> {
        self
    }
}

impl<T: TokenType, V: VocabSource<T> + ?Sized> VocabSource<T> for &V {
    fn vocab(&self) -> &WordVocab<T> {
        (**self).vocab()
    }
}
