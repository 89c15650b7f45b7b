use chiffre_config::Config;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::cache::{CacheStats, ConversionCache};
use crate::error::ConvertError;
use crate::language::NumberLanguage;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Normalize, consult the cache, else extract and remember.
pub struct NumberConverter<L> {
    language: L,
    preprocessor: DefaultPreprocessor,
    cache: ConversionCache,
    max_input_len: usize,
}

impl<L: NumberLanguage> NumberConverter<L> {
    pub fn new(language: L) -> Self {
        Self::with_config(language, &Config::default())
    }

    pub fn with_config(language: L, config: &Config) -> Self {
        tracing::debug!(
            language = language.language_code(),
            capacity = config.cache.capacity,
            max_input_len = config.max_input_len,
            "Creating number converter"
        );

        Self {
            language,
            preprocessor: DefaultPreprocessor,
            cache: ConversionCache::new(config.cache.capacity),
            max_input_len: config.max_input_len,
        }
    }

    pub fn language(&self) -> &L {
        &self.language
    }

    /// Convert number words to their value, memoizing by normalized text
    pub fn convert(&self, text: &str) -> Result<BigUint, ConvertError> {
        let normalized = self.normalize(text)?;
        Ok(self.convert_normalized(&normalized))
    }

    /// Like `convert` for raw bytes; non UTF-8 input is rejected
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<BigUint, ConvertError> {
        let normalized = self.preprocessor.process_bytes(bytes)?;
        self.check_len(&normalized)?;
        Ok(self.convert_normalized(&normalized))
    }

    /// An absent value converts to zero, the same as empty text
    pub fn convert_opt(&self, text: Option<&str>) -> Result<BigUint, ConvertError> {
        match text {
            Some(text) => self.convert(text),
            None => Ok(BigUint::zero()),
        }
    }

    /// Same result as `convert` without reading or filling the cache
    pub fn convert_uncached(&self, text: &str) -> Result<BigUint, ConvertError> {
        let normalized = self.normalize(text)?;
        if normalized.is_empty() {
            return Ok(BigUint::zero());
        }
        Ok(self.language.extract(&normalized))
    }

    /// Heuristic: at least half of the words belong to the number vocabulary
    pub fn is_plausible(&self, text: &str) -> bool {
        let normalized = self.preprocessor.process(text);
        if normalized.is_empty() {
            return false;
        }

        let tokens = self.language.tokenize(&normalized);
        if tokens.is_empty() {
            return false;
        }

        let recognized = tokens
            .iter()
            .filter(|token| self.language.is_number_word(&token.surface))
            .count();

        recognized as f64 / tokens.len() as f64 >= 0.5
    }

    pub fn clear_cache(&self) {
        tracing::debug!("Clearing conversion cache");
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &ConversionCache {
        &self.cache
    }

    fn normalize(&self, text: &str) -> Result<String, ConvertError> {
        let normalized = self.preprocessor.process(text);
        self.check_len(&normalized)?;
        Ok(normalized)
    }

    fn check_len(&self, normalized: &str) -> Result<(), ConvertError> {
        let len = normalized.chars().count();
        if len > self.max_input_len {
            tracing::warn!(len, max = self.max_input_len, "Rejecting oversized input");
            return Err(ConvertError::InputTooLong {
                len,
                max: self.max_input_len,
            });
        }
        Ok(())
    }

    fn convert_normalized(&self, normalized: &str) -> BigUint {
        if normalized.is_empty() {
            return BigUint::zero();
        }

        if let Some(value) = self.cache.get(normalized) {
            tracing::debug!(text = normalized, "Conversion cache hit");
            return value;
        }

        let value = self.language.extract(normalized);
        tracing::debug!(text = normalized, %value, "Conversion cache miss");
        self.cache.put(normalized, value.clone());
        value
    }
}
