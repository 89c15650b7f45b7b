use chiffre_core::language::{NumberLanguage, Token};
use num_bigint::BigUint;

use crate::extractor::FrenchExtractor;
use crate::vocabulary::Vocabulary;

/// French number-word grammar
pub struct FrenchLanguage {
    vocabulary: &'static Vocabulary,
    extractor: FrenchExtractor,
}

impl FrenchLanguage {
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::shared(),
            extractor: FrenchExtractor::new(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.vocabulary
    }
}

impl Default for FrenchLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberLanguage for FrenchLanguage {
    fn language_code(&self) -> &str {
        "fr"
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (i, c) in text.char_indices() {
            let separator = c == '-' || c.is_whitespace();
            match (separator, start) {
                (true, Some(s)) => {
                    tokens.push(Token {
                        surface: text[s..i].to_string(),
                        position: s,
                    });
                    start = None;
                }
                (false, None) => start = Some(i),
                _ => {}
            }
        }

        if let Some(s) = start {
            tokens.push(Token {
                surface: text[s..].to_string(),
                position: s,
            });
        }

        tokens
    }

    fn is_number_word(&self, word: &str) -> bool {
        self.vocabulary.is_known(word)
    }

    fn extract(&self, text: &str) -> BigUint {
        self.extractor.extract(text)
    }
}
