//! # Special Tokens

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::types::TokenType;

/// The fixed sentinel tokens present in every vocabulary.
///
/// The discriminant is the token id; these always occupy ids `0..4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[repr(u8)]
pub enum SpecialToken {
    /// Padding.
    #[strum(serialize = "[PAD]")]
    Pad = 0,

    /// Unknown word.
    #[strum(serialize = "[UNK]")]
    Unk = 1,

    /// Start of sequence.
    #[strum(serialize = "[SOS]")]
    Sos = 2,

    /// End of sequence.
    #[strum(serialize = "[EOS]")]
    Eos = 3,
}

/// The number of special tokens.
pub const SPECIAL_TOKEN_COUNT: usize = 4;

impl SpecialToken {
    /// The token string, e.g. ``"[PAD]"``.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The fixed token id, as a `usize` index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The fixed token id.
    pub fn token<T: TokenType>(self) -> T {
        T::from_u8(self as u8).expect("every token type holds u8 values")
    }

    /// Look up the special token with the given string.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::iter().find(|s| s.as_str() == word)
    }
}
