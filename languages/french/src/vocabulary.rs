use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Words with a direct value, including compounds ("dix-sept"), regional
/// forms (Belgian/Swiss "septante", "huitante", "nonante") and the feminine "une".
const BASE_WORDS: &[(&str, u32)] = &[
    ("zéro", 0),
    ("zero", 0),
    ("un", 1),
    ("une", 1),
    ("deux", 2),
    ("trois", 3),
    ("quatre", 4),
    ("cinq", 5),
    ("six", 6),
    ("sept", 7),
    ("huit", 8),
    ("neuf", 9),
    ("dix", 10),
    ("onze", 11),
    ("douze", 12),
    ("treize", 13),
    ("quatorze", 14),
    ("quinze", 15),
    ("seize", 16),
    ("dix-sept", 17),
    ("dix-huit", 18),
    ("dix-neuf", 19),
    ("vingt", 20),
    ("trente", 30),
    ("quarante", 40),
    ("cinquante", 50),
    ("soixante", 60),
    ("soixante-dix", 70),
    ("septante", 70),
    ("quatre-vingts", 80),
    ("quatre-vingt", 80),
    ("huitante", 80),
    ("quatre-vingt-dix", 90),
    ("quatre-vingts-dix", 90),
    ("nonante", 90),
];

/// Scale words and their power of ten. Long scale: "billion" is 10^12.
const MULTIPLIER_WORDS: &[(&str, u32)] = &[
    ("un", 0),
    ("dix", 1),
    ("cent", 2),
    ("cents", 2),
    ("mille", 3),
    ("milles", 3),
    ("million", 6),
    ("millions", 6),
    ("milliard", 9),
    ("milliards", 9),
    ("billion", 12),
    ("billions", 12),
    ("trillion", 15),
    ("trillions", 15),
    ("quadrillion", 15),
    ("quintillion", 18),
    ("sextillion", 21),
    ("septillion", 24),
    ("octillion", 27),
    ("nonillion", 30),
    ("decillion", 33),
    ("undecillion", 36),
    ("duodecillion", 39),
    ("tredecillion", 42),
    ("quattuordecillion", 45),
    ("quindecillion", 48),
    ("sexdecillion", 51),
    ("septendecillion", 54),
    ("octodecillion", 57),
    ("novemdecillion", 60),
    ("vigintillion", 63),
    ("unvigintillion", 66),
    ("duovigintillion", 69),
    ("trevigintillion", 72),
    ("quattuorvigintillion", 75),
    ("quinvigintillion", 78),
    ("sexvigintillion", 81),
    ("septenvigintillion", 84),
    ("octovigintillion", 87),
    ("novemvigintillion", 90),
    ("trigintillion", 93),
    ("untrigintillion", 96),
    ("duotrigintillion", 99),
    ("googol", 100),
];

/// Scale entries that are read as base words, never as multipliers
const BASE_ONLY_SCALES: &[&str] = &["un", "dix"];

pub const CONJUNCTION: &str = "et";

static VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(|| {
    Vocabulary::build()
        .unwrap_or_else(|e| panic!("FATAL: invalid multiplier pattern built from vocabulary: {e}"))
});

/// French number vocabulary, built once per process
pub struct Vocabulary {
    base_words: HashMap<&'static str, u32>,
    multipliers: HashMap<&'static str, u32>,
    /// Multiplier words used by the pattern, longest first
    matching_words: Vec<&'static str>,
    multiplier_pattern: Regex,
}

impl Vocabulary {
    /// Shared process-wide tables
    pub fn shared() -> &'static Vocabulary {
        &VOCABULARY
    }

    pub fn build() -> Result<Self, regex::Error> {
        let base_words: HashMap<_, _> = BASE_WORDS.iter().copied().collect();
        let multipliers: HashMap<_, _> = MULTIPLIER_WORDS.iter().copied().collect();

        let mut matching_words: Vec<&'static str> = MULTIPLIER_WORDS
            .iter()
            .map(|(word, _)| *word)
            .filter(|word| !BASE_ONLY_SCALES.contains(word))
            .collect();
        // "cents" must win over "cent", "milliards" over "milliard", ...
        matching_words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = matching_words
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        // (?s): the factor phrase may span line breaks, so a match always starts at 0
        let multiplier_pattern =
            Regex::new(&format!(r"(?s)(?P<factor>.*?)\s?(?P<multiplier>{alternation})"))?;

        tracing::info!(
            "Built French vocabulary: {} base words, {} multiplier words",
            base_words.len(),
            matching_words.len()
        );

        Ok(Self {
            base_words,
            multipliers,
            matching_words,
            multiplier_pattern,
        })
    }

    pub fn base_value(&self, word: &str) -> Option<u32> {
        self.base_words.get(word).copied()
    }

    /// Power of ten for a scale word, "un" and "dix" included
    pub fn exponent(&self, word: &str) -> Option<u32> {
        self.multipliers.get(word).copied()
    }

    /// Base word, scale word or the conjunction "et"
    pub fn is_known(&self, word: &str) -> bool {
        word == CONJUNCTION || self.base_words.contains_key(word) || self.multipliers.contains_key(word)
    }

    pub fn matching_words(&self) -> &[&'static str] {
        &self.matching_words
    }

    /// Lazy factor phrase, optional space, then the first multiplier word
    pub fn multiplier_pattern(&self) -> &Regex {
        &self.multiplier_pattern
    }

    /// Whether `text` contains a scale word of a strictly larger power than `exponent`
    pub fn has_higher_multiplier(&self, exponent: u32, text: &str) -> bool {
        self.multipliers
            .iter()
            .any(|(word, power)| *power > exponent && text.contains(word))
    }
}
