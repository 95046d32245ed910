//! Validators for token ids and vocabulary sizes.
use crate::{
    errors::{WVResult, WordVocabError},
    types::TokenType,
    vocab::special_tokens::SPECIAL_TOKEN_COUNT,
};

/// Converts an index into a token id, failing if it does not fit in `T`.
pub fn try_token<T: TokenType>(index: usize) -> WVResult<T> {
    T::from_usize(index).ok_or(WordVocabError::VocabSizeOverflow { size: index + 1 })
}

/// Validates a vocabulary size cap; it must leave room for the special tokens,
/// and its largest id must fit in `T`.
pub fn try_max_vocab_size<T: TokenType>(max_vocab_size: usize) -> WVResult<usize> {
    if max_vocab_size < SPECIAL_TOKEN_COUNT {
        return Err(WordVocabError::InvalidOption(format!(
            "max vocab size ({max_vocab_size}) must be >= {SPECIAL_TOKEN_COUNT}"
        )));
    }
    try_token::<T>(max_vocab_size - 1)?;
    Ok(max_vocab_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_token() {
        assert_eq!(try_token::<u8>(255).unwrap(), 255u8);
        assert!(matches!(
            try_token::<u8>(256),
            Err(WordVocabError::VocabSizeOverflow { size: 257 })
        ));
        assert_eq!(try_token::<u32>(70_000).unwrap(), 70_000u32);
    }

    #[test]
    fn test_try_max_vocab_size() {
        assert_eq!(try_max_vocab_size::<u16>(4).unwrap(), 4);
        assert_eq!(try_max_vocab_size::<u8>(256).unwrap(), 256);
        assert!(try_max_vocab_size::<u8>(257).is_err());
        assert!(matches!(
            try_max_vocab_size::<u32>(3),
            Err(WordVocabError::InvalidOption(_))
        ));
    }
}
