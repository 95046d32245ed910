//! # Token Encoder Trait

use crate::{
    cleaning::TextCleaner,
    types::TokenType,
    vocab::{SpecialToken, VocabSource},
};

/// A trait for word token encoders.
///
/// Unknown words are never an error; they encode as `[UNK]`.
pub trait TokenEncoder<T: TokenType>: VocabSource<T> + Send + Sync {
    /// Return the attached text cleaner.
    fn cleaner(&self) -> &TextCleaner;

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The raw text to encode.
    /// * `add_special_tokens` - Wrap the words in `[SOS]` ... `[EOS]`.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append(
        &self,
        text: &str,
        add_special_tokens: bool,
        tokens: &mut Vec<T>,
    ) {
        let vocab = self.vocab();
        let words = self.cleaner().split_words(text);
        tokens.reserve(words.len() + 2);

        if add_special_tokens {
            tokens.push(vocab.special_token(SpecialToken::Sos));
        }
        let unk = vocab.special_token(SpecialToken::Unk);
        tokens.extend(
            words
                .iter()
                .map(|w| vocab.token_for_word(w).unwrap_or(unk)),
        );
        if add_special_tokens {
            tokens.push(vocab.special_token(SpecialToken::Eos));
        }
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The raw text to encode.
    /// * `add_special_tokens` - Wrap the words in `[SOS]` ... `[EOS]`.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn encode(
        &self,
        text: &str,
        add_special_tokens: bool,
    ) -> Vec<T> {
        let mut tokens = Vec::new();
        self.encode_append(text, add_special_tokens, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Returns
    /// One token vector per input, in input order.
    fn encode_batch(
        &self,
        batch: &[&str],
        add_special_tokens: bool,
    ) -> Vec<Vec<T>> {
        batch
            .iter()
            .map(|text| self.encode(text, add_special_tokens))
            .collect()
    }
}

impl<T: TokenType, E: TokenEncoder<T> + ?Sized> TokenEncoder<T> for &E {
    fn cleaner(&self) -> &TextCleaner {
        (**self).cleaner()
    }

    fn encode_batch(
        &self,
        batch: &[&str],
        add_special_tokens: bool,
    ) -> Vec<Vec<T>> {
        (**self).encode_batch(batch, add_special_tokens)
    }
}
