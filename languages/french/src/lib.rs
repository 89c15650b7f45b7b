//! French number words to integers.
//!
//! ```
//! use chiffre_lang_french::BigUint;
//!
//! let value = chiffre_lang_french::convert("trois milliards cinq cents millions").unwrap();
//! assert_eq!(value, BigUint::from(3_500_000_000u64));
//! ```

use std::sync::LazyLock;

use chiffre_config::Config;
use chiffre_core::{CacheStats, ConvertError, NumberConverter};

pub mod extractor;
pub mod processor;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use extractor::FrenchExtractor;
pub use num_bigint::BigUint;
pub use processor::FrenchLanguage;
pub use vocabulary::Vocabulary;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type FrenchConverter = NumberConverter<FrenchLanguage>;

/// Process-wide converter, configured from the environment on first use
static CONVERTER: LazyLock<FrenchConverter> =
    LazyLock::new(|| FrenchConverter::with_config(FrenchLanguage::new(), &Config::new()));

pub fn converter() -> &'static FrenchConverter {
    &CONVERTER
}

/// Convert French number words, memoized in the shared cache
pub fn convert(text: &str) -> Result<BigUint, ConvertError> {
    CONVERTER.convert(text)
}

/// Convert without touching the shared cache
pub fn convert_uncached(text: &str) -> Result<BigUint, ConvertError> {
    CONVERTER.convert_uncached(text)
}

pub fn clear_cache() {
    CONVERTER.clear_cache();
}

pub fn cache_stats() -> CacheStats {
    CONVERTER.cache_stats()
}

/// At least half of the words are French number vocabulary
pub fn is_plausible_french_number(text: &str) -> bool {
    CONVERTER.is_plausible(text)
}
