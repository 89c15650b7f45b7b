use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use regex::Regex;

use crate::vocabulary::{CONJUNCTION, Vocabulary};

/// 80 and 90 are built as 4×20(+10) and need their own rule
static QUATRE_VINGT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<base>quatre[-\s]vingts?(?:[-\s]dix)?)[-\s]?(?P<suffix>[0-9A-Za-z_]*)")
        .expect("quatre-vingt pattern is valid")
});

/// A factor × magnitude term whose residual has not been consumed yet
#[derive(Debug)]
struct ExtractionDetail<'a> {
    factor: BigUint,
    magnitude: BigUint,
    residual: &'a str,
}

/// Recursive French number-word extractor.
///
/// Pure function of its input: it only reads the shared vocabulary, so one
/// instance can be used from any number of threads.
pub struct FrenchExtractor {
    vocabulary: &'static Vocabulary,
}

impl FrenchExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::shared(),
        }
    }

    /// Value of normalized text (lowercase, trimmed)
    pub fn extract(&self, text: &str) -> BigUint {
        if text.is_empty() {
            return BigUint::zero();
        }

        // Direct lookup (fast path)
        if let Some(value) = self.vocabulary.base_value(text) {
            return BigUint::from(value);
        }

        // Factor + multiplier ("cinq cents", "trois milliards ...")
        if let Some(detail) = self.factor_multiplier(text, false) {
            tracing::trace!(text, residual = detail.residual, "factor-multiplier");
            return self.extract(detail.residual) + detail.factor * detail.magnitude;
        }

        // Quatre-vingt family
        if let Some(value) = self.quatre_vingt(text) {
            return value;
        }

        self.additive_scan(text)
    }

    /// Match the first multiplier word and its factor phrase.
    ///
    /// In detail mode an empty factor stays 0 and the term is returned
    /// unfinished so the caller can scale it by a larger multiplier.
    fn factor_multiplier<'a>(&self, text: &'a str, detail: bool) -> Option<ExtractionDetail<'a>> {
        let caps = self.vocabulary.multiplier_pattern().captures(text)?;
        let phrase = caps.name("factor").map_or("", |m| m.as_str());
        let word = caps.name("multiplier")?.as_str();
        let exponent = self.vocabulary.exponent(word).unwrap_or(0);
        let mut residual = &text[caps.get(0)?.end()..];

        let mut factor = match self.vocabulary.base_value(phrase) {
            Some(value) => BigUint::from(value),
            None => self.additive_scan(phrase),
        };
        // A bare multiplier means one of it ("cent" = 100)
        if factor.is_zero() && !detail {
            factor = BigUint::one();
        }
        let mut magnitude = pow10(exponent);

        // "cinq cents millions": fold the hundreds into the millions factor
        if self.vocabulary.has_higher_multiplier(exponent, residual) {
            if let Some(inner) = self.factor_multiplier(residual, true) {
                factor = factor * magnitude + inner.factor;
                magnitude = inner.magnitude;
                residual = inner.residual;
            }
        }

        Some(ExtractionDetail {
            factor,
            magnitude,
            residual,
        })
    }

    fn quatre_vingt(&self, text: &str) -> Option<BigUint> {
        let caps = QUATRE_VINGT_PATTERN.captures(text)?;
        let span = caps.get(0)?;

        let canonical = caps
            .name("base")?
            .as_str()
            .replace(char::is_whitespace, "-");
        let canonical = canonical.strip_suffix('s').unwrap_or(&canonical);
        let base = self.vocabulary.base_value(canonical).unwrap_or(0);

        let suffix = caps.name("suffix").map_or("", |m| m.as_str());
        let unit = self.vocabulary.base_value(suffix).unwrap_or(0);

        tracing::trace!(text, canonical, suffix, "quatre-vingt");

        let residual = format!("{}{}", &text[..span.start()], &text[span.end()..]);
        Some(self.extract(&residual) + base + unit)
    }

    /// Sum of word values, splitting on hyphens and whitespace.
    ///
    /// "et" and unknown words are worth 0. A bare scale word is worth
    /// `10 * exponent`, not `10^exponent`: "cent" alone here gives 20.
    pub fn additive_scan(&self, text: &str) -> BigUint {
        let total: u64 = text
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(|word| self.word_value(word))
            .sum();

        BigUint::from(total)
    }

    fn word_value(&self, word: &str) -> u64 {
        if word == CONJUNCTION {
            return 0;
        }

        match self.vocabulary.base_value(word) {
            Some(value) => u64::from(value),
            None => self
                .vocabulary
                .exponent(word)
                .map_or(0, |exponent| 10 * u64::from(exponent)),
        }
    }
}

impl Default for FrenchExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> BigUint {
        FrenchExtractor::new().extract(text)
    }

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(extract(""), n(0));
    }

    #[test]
    fn test_direct_lookup() {
        assert_eq!(extract("un"), n(1));
        assert_eq!(extract("dix-sept"), n(17));
        assert_eq!(extract("quatre-vingts"), n(80));
    }

    #[test]
    fn test_bare_multiplier_is_one_of_it() {
        assert_eq!(extract("cent"), n(100));
        assert_eq!(extract("mille"), n(1000));
        assert_eq!(extract("milles"), n(1000));
        assert_eq!(extract("million"), n(1_000_000));
    }

    #[test]
    fn test_factor_and_additive_remainder() {
        assert_eq!(extract("deux cent cinquante"), n(250));
        assert_eq!(extract("mille cent onze"), n(1111));
        assert_eq!(extract("deux cent et un"), n(201));
        assert_eq!(extract("vingt-deux mille"), n(22_000));
    }

    #[test]
    fn test_lower_magnitude_compounds_into_higher() {
        assert_eq!(extract("cinq cents millions"), n(500_000_000));
        assert_eq!(extract("deux cent mille"), n(200_000));
        assert_eq!(extract("cent mille"), n(100_000));
        assert_eq!(extract("trois milliards cinq cents millions"), n(3_500_000_000));
    }

    #[test]
    fn test_detail_mode_keeps_zero_factor() {
        let extractor = FrenchExtractor::new();

        let detail = extractor.factor_multiplier(" millions", true).unwrap();
        assert_eq!(detail.factor, n(0));
        assert_eq!(detail.magnitude, n(1_000_000));
        assert_eq!(detail.residual, "");

        let detail = extractor.factor_multiplier(" millions", false).unwrap();
        assert_eq!(detail.factor, n(1));
    }

    #[test]
    fn test_detail_combines_chain() {
        let detail = FrenchExtractor::new()
            .factor_multiplier("cinq cents millions trois", false)
            .unwrap();
        assert_eq!(detail.factor, n(500));
        assert_eq!(detail.magnitude, n(1_000_000));
        assert_eq!(detail.residual, " trois");
    }

    #[test]
    fn test_quatre_vingt_family() {
        assert_eq!(extract("quatre-vingt-cinq"), n(85));
        assert_eq!(extract("quatre-vingt-dix-neuf"), n(99));
        assert_eq!(extract("quatre vingt dix neuf"), n(99));
        assert_eq!(extract("quatre-vingts-un"), n(81));
        assert_eq!(extract("quatre vingts"), n(80));
        assert_eq!(extract("quatre-vingt-onze"), n(91));
    }

    #[test]
    fn test_quatre_vingt_keeps_surrounding_text() {
        // the matched span is removed, the rest is still summed
        assert_eq!(extract("trois quatre-vingts"), n(83));
    }

    #[test]
    fn test_additive_scan() {
        let extractor = FrenchExtractor::new();
        assert_eq!(extractor.additive_scan("vingt et un"), n(21));
        assert_eq!(extractor.additive_scan("soixante-dix-sept"), n(77));
        assert_eq!(extractor.additive_scan("vingt invalid"), n(20));
        assert_eq!(extractor.additive_scan(" "), n(0));
        assert_eq!(extractor.additive_scan("123"), n(0));
    }

    #[test]
    fn test_additive_scan_bare_scale_word_is_ten_times_exponent() {
        let extractor = FrenchExtractor::new();
        assert_eq!(extractor.additive_scan("cent"), n(20));
        assert_eq!(extractor.additive_scan("mille"), n(30));
        assert_eq!(extractor.additive_scan("millions"), n(60));
        assert_eq!(extractor.additive_scan("googol"), n(1000));
        // base words take precedence over their scale entry
        assert_eq!(extractor.additive_scan("un"), n(1));
        assert_eq!(extractor.additive_scan("dix"), n(10));
    }

    #[test]
    fn test_googol() {
        assert_eq!(extract("googol"), BigUint::from(10u32).pow(100));
        assert_eq!(extract("deux googol"), BigUint::from(2u32) * BigUint::from(10u32).pow(100));
    }

    #[test]
    fn test_residual_strictly_shrinks_on_repeated_words() {
        // Terminates and removes only the matched span each time
        assert_eq!(extract("cent cent"), n(200));
    }
}
