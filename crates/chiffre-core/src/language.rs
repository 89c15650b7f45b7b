use num_bigint::BigUint;

/// Number-word grammar for one language
pub trait NumberLanguage: Send + Sync {
    /// Language identifier (ISO 639-1 code: "fr", ...)
    fn language_code(&self) -> &str;

    /// Break normalized text into words
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Whether a single word belongs to the number vocabulary
    fn is_number_word(&self, word: &str) -> bool;

    /// Value of normalized text. Words outside the vocabulary count as zero.
    fn extract(&self, text: &str) -> BigUint;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Byte offset in the normalized text
    pub position: usize,
}
