//! The four KPI calculators
//!
//! Each calculator takes the reflection text and its `FeatureVector` and
//! returns its sub-signals plus a raw score on the 0-10 scale. Rounding and
//! clamping to [1,10] happens once, in `KpiScores::clamped`.

pub mod actionable;
pub mod coherence;
pub mod depth;
pub mod metacognition;

pub use actionable::ActionableCalculator;
pub use coherence::CoherenceCalculator;
pub use depth::DepthCalculator;
pub use metacognition::MetacognitionCalculator;

use crate::types::FeatureVector;
use crate::{MIN_SENTENCE_COUNT, MIN_TEXT_CHARS, MIN_TOKEN_COUNT};

/// Character length (not bytes) of the text
pub fn char_len(content: &str) -> usize {
    content.chars().count()
}

/// Length gate shared by all calculators and by pattern-only scoring
pub fn is_text_too_short(content: &str, token_count: usize, sentence_count: usize) -> bool {
    char_len(content) < MIN_TEXT_CHARS
        || token_count < MIN_TOKEN_COUNT
        || sentence_count < MIN_SENTENCE_COUNT
}

/// Length gate evaluated on NLP features
pub fn features_too_short(content: &str, features: &FeatureVector) -> bool {
    is_text_too_short(content, features.token_count, features.sentence_count)
}

/// Expected match count for a category, growing with sqrt(tokens)
pub(crate) fn length_scaled_expectation(floor: f64, coefficient: f64, token_count: usize) -> f64 {
    floor.max(coefficient * (token_count as f64).sqrt() / 15.0)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::LanguageVariantDetector;
    use crate::types::{Entity, FeatureVector, Sentiment, SyntaxAnalysis};

    /// Build features from `word/TAG` notation (one sentence per line)
    pub fn features(content: &str, tagged: &str, magnitude: f64, entities: Vec<Entity>) -> FeatureVector {
        let variant = LanguageVariantDetector::new().detect(content);
        FeatureVector::from_analysis(
            SyntaxAnalysis::parse_tagged(tagged),
            Sentiment { score: 0.0, magnitude },
            entities,
            variant,
        )
    }

    /// Reflection used across calculator tests: six sentences, 68 tokens
    pub const PROJECT_TEXT: &str = "Heute habe ich über mein Projekt nachgedacht, weil die Präsentation nicht gut lief. \
Ich denke, das Projekt braucht deshalb eine klare Struktur. \
Die Struktur fehlte, daher war die Präsentation unklar. \
Jedoch habe ich aus dem Feedback viel gelernt. \
Mein Ziel ist eine bessere Präsentation. \
Ich werde nächste Woche die Struktur üben, weil ich das Projekt sicher präsentieren will.";

    pub const PROJECT_TAGGED: &str = "
Heute/ADV habe/VERB:PRESENT ich/PRON über/ADP mein/DET Projekt/NOUN nachgedacht/VERB:PAST ,/PUNCT weil/SCONJ die/DET Präsentation/NOUN nicht/ADV gut/ADJ lief/VERB:PAST ./PUNCT
Ich/PRON denke/VERB:PRESENT ,/PUNCT das/PRON Projekt/NOUN braucht/VERB:PRESENT deshalb/ADV eine/DET klare/ADJ Struktur/NOUN ./PUNCT
Die/DET Struktur/NOUN fehlte/VERB:PAST ,/PUNCT daher/ADV war/VERB:PAST die/DET Präsentation/NOUN unklar/ADJ ./PUNCT
Jedoch/ADV habe/VERB:PRESENT ich/PRON aus/ADP dem/DET Feedback/NOUN viel/ADJ gelernt/VERB:PAST ./PUNCT
Mein/DET Ziel/NOUN ist/VERB:PRESENT eine/DET bessere/ADJ Präsentation/NOUN ./PUNCT
Ich/PRON werde/VERB:FUTURE nächste/ADJ Woche/NOUN die/DET Struktur/NOUN üben/VERB ,/PUNCT weil/SCONJ ich/PRON das/DET Projekt/NOUN sicher/ADV präsentieren/VERB will/VERB:PRESENT ./PUNCT
";

    pub fn project() -> FeatureVector {
        features(
            PROJECT_TEXT,
            PROJECT_TAGGED,
            2.4,
            vec![Entity::new("Projekt", "OTHER"), Entity::new("Präsentation", "EVENT")],
        )
    }
}
