//! # Text Cleaner

use std::sync::LazyLock;

use regex::Regex;

/// Characters removed from text before splitting into words.
///
/// Hyphens are removed unconditionally; ``"e-mail"`` becomes ``"email"``.
pub const STRIP_PATTERN: &str = r#"[.,/#!%^&*;:{}=\-_`~()?"'“”‘’•]"#;

/// Whitespace runs collapsed to a single space.
///
/// U+FEFF (a byte order mark) counts as whitespace.
pub const WHITESPACE_PATTERN: &str = r"[\s\x{FEFF}]+";

static STRIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRIP_PATTERN).expect("STRIP_PATTERN is a valid regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WHITESPACE_PATTERN).expect("WHITESPACE_PATTERN is a valid regex"));

/// Normalizes raw text into lowercase words.
///
/// The same cleaner is shared by vocabulary learning and encoding,
/// so a word seen during learning is looked up under the same form.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    strip: Regex,
    whitespace: Regex,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self {
            strip: STRIP_REGEX.clone(),
            whitespace: WHITESPACE_REGEX.clone(),
        }
    }
}

impl TextCleaner {
    /// Lowercase, strip punctuation, collapse whitespace and trim.
    ///
    /// ## Arguments
    /// * `text` - The raw text.
    ///
    /// ## Returns
    /// The cleaned text; words separated by single spaces.
    pub fn clean(
        &self,
        text: &str,
    ) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.strip.replace_all(&lowered, "");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        collapsed.trim_matches(' ').to_string()
    }

    /// Clean the text and split it into words.
    ///
    /// Empty words are dropped; the result is empty for blank input.
    pub fn split_words(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.clean(text)
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}
