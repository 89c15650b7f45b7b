use unicode_normalization::UnicodeNormalization;

use crate::error::ConvertError;

pub trait Preprocessor {
    // Default number-text preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), folds combining accents and no-break spaces
        let text: String = text.nfkc().collect();

        text.to_lowercase().trim().to_string()
    }

    /// Same as `process` for raw bytes, which must be UTF-8
    fn process_bytes(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ConvertError::InvalidInput(format!("not UTF-8 text ({e})")))?;
        Ok(self.process(text))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
