//! # Token Decoder Trait

use crate::{
    types::TokenType,
    vocab::{SpecialToken, VocabSource},
};

/// A trait for word token decoders.
///
/// Out of range ids are never an error; they decode as `[UNK]`.
pub trait TokenDecoder<T: TokenType>: VocabSource<T> + Send + Sync {
    /// Decode tokens into words.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens to decode.
    /// * `skip_special_tokens` - Drop every special token string from the output;
    ///   including `[UNK]` substituted for an out of range id.
    fn decode_words(
        &self,
        tokens: &[T],
        skip_special_tokens: bool,
    ) -> Vec<&str> {
        let vocab = self.vocab();
        tokens
            .iter()
            .map(|&t| {
                vocab
                    .word_for_token(t)
                    .unwrap_or(SpecialToken::Unk.as_str())
            })
            .filter(|w| !(skip_special_tokens && SpecialToken::from_word(w).is_some()))
            .collect()
    }

    /// Decode tokens into text.
    ///
    /// ## Returns
    /// The words joined by single spaces; empty if no words remain.
    fn decode(
        &self,
        tokens: &[T],
        skip_special_tokens: bool,
    ) -> String {
        self.decode_words(tokens, skip_special_tokens).join(" ")
    }

    /// Decode a batch of token sequences.
    ///
    /// ## Returns
    /// One string per input, in input order.
    fn decode_batch(
        &self,
        batch: &[&[T]],
        skip_special_tokens: bool,
    ) -> Vec<String> {
        batch
            .iter()
            .map(|tokens| self.decode(tokens, skip_special_tokens))
            .collect()
    }
}

impl<T: TokenType, D: TokenDecoder<T> + ?Sized> TokenDecoder<T> for &D {
    fn decode_batch(
        &self,
        batch: &[&[T]],
        skip_special_tokens: bool,
    ) -> Vec<String> {
        (**self).decode_batch(batch, skip_special_tokens)
    }
}
