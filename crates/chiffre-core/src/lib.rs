pub mod cache;
pub mod converter;
pub mod error;
pub mod language;
pub mod preprocess;

pub use cache::{CacheStats, ConversionCache};
pub use converter::NumberConverter;
pub use error::ConvertError;
pub use language::{NumberLanguage, Token};
