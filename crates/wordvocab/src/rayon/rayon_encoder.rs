//! # Parallel Encoder

use core::marker::PhantomData;

use crate::{
    cleaning::TextCleaner,
    encoders::TokenEncoder,
    types::TokenType,
    vocab::{VocabSource, WordVocab},
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches; output order matches input order.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> VocabSource<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn vocab(&self) -> &WordVocab<T> {
        self.inner.vocab()
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn cleaner(&self) -> &TextCleaner {
        self.inner.cleaner()
    }

    fn encode_batch(
        &self,
        batch: &[&str],
        add_special_tokens: bool,
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|text| self.inner.encode(text, add_special_tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Tokenizer,
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_parallel_encoder() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::in_memory();
        tokenizer
            .learn_vocab("hello world hello san francisco")
            .unwrap();

        let encoder: ParallelRayonEncoder<u32, _> = ParallelRayonEncoder::new(&tokenizer);
        check_is_send(&encoder);
        check_is_sync(&encoder);

        let batch: Vec<String> = (0..64).map(|i| format!("hello {i} world")).collect();
        let batch: Vec<&str> = batch.iter().map(String::as_str).collect();

        assert_eq!(
            encoder.encode_batch(&batch, true),
            tokenizer.encode_batch(&batch, true)
        );
        assert_eq!(encoder.encode("hello world", false), vec![4, 7]);
    }
}
