//! # Parallel Decoder

use core::marker::PhantomData;

use crate::{
    decoders::TokenDecoder,
    types::TokenType,
    vocab::{VocabSource, WordVocab},
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches; output order matches input order.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Inner decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel decoder.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> VocabSource<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn vocab(&self) -> &WordVocab<T> {
        self.inner.vocab()
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn decode_batch(
        &self,
        batch: &[&[T]],
        skip_special_tokens: bool,
    ) -> Vec<String> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|tokens| self.inner.decode(tokens, skip_special_tokens))
            .collect()
    }
}
