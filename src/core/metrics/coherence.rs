//! Coherence: how well the reflection hangs together
//!
//! Four cohesion signals, each in [0,1]:
//! - lexical: repetition of content words, against a length-adaptive threshold
//! - referential: pronoun density near 8% of tokens
//! - connective: connectives per sentence, saturating at 0.8
//! - paragraph: enough sentences to show structure

use std::collections::HashMap;

use crate::core::lexicon::{Lexicon, TermCategory};
use crate::core::metrics::char_len;
use crate::types::{CoherenceSignals, FeatureVector, PosTag};
use crate::{
    BASE_REPETITION_FACTOR, COHERENCE_WEIGHT_CONNECTIVE, COHERENCE_WEIGHT_LEXICAL,
    COHERENCE_WEIGHT_PARAGRAPH, COHERENCE_WEIGHT_REFERENTIAL, IDEAL_PRONOUN_DENSITY,
    MAX_CONNECTIVES_PER_SENTENCE, SHORT_TEXT_CAP,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct CoherenceCalculator {
    lexicon: Lexicon,
}

impl CoherenceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(&self, content: &str, features: &FeatureVector, too_short: bool) -> CoherenceSignals {
        if too_short {
            return CoherenceSignals {
                raw: SHORT_TEXT_CAP.min((features.sentence_count as f64 / 2.0).round()),
                ..CoherenceSignals::default()
            };
        }

        let lexical = lexical_cohesion(content, features);
        let referential = referential_cohesion(features);
        let connective = self.connective_cohesion(content, features);
        let paragraph = (features.sentence_count as f64 / 3.0).min(1.0);

        let raw = (lexical * COHERENCE_WEIGHT_LEXICAL
            + referential * COHERENCE_WEIGHT_REFERENTIAL
            + connective * COHERENCE_WEIGHT_CONNECTIVE
            + paragraph * COHERENCE_WEIGHT_PARAGRAPH)
            * 10.0;

        CoherenceSignals {
            lexical,
            referential,
            connective,
            paragraph,
            raw,
        }
    }

    fn connective_cohesion(&self, content: &str, features: &FeatureVector) -> f64 {
        if features.sentence_count == 0 {
            return 0.0;
        }
        let count = self.lexicon.count(
            TermCategory::Connective,
            features.detected_language_variant,
            content,
        );
        let per_sentence = count as f64 / features.sentence_count as f64;
        (per_sentence / MAX_CONNECTIVES_PER_SENTENCE).min(1.0)
    }
}

/// Share of distinct content words used at least twice, against the
/// repetition a text of this length should show
fn lexical_cohesion(content: &str, features: &FeatureVector) -> f64 {
    let mut frequency: HashMap<String, usize> = HashMap::new();
    for token in features.tokens.iter().filter(|t| t.tag.is_content_word()) {
        *frequency.entry(token.text.to_lowercase()).or_insert(0) += 1;
    }
    if frequency.is_empty() {
        return 0.0;
    }

    let repeated = frequency.values().filter(|count| **count >= 2).count();
    let ratio = repeated as f64 / frequency.len() as f64;

    // Shorter texts must repeat more densely to score the same
    let len = char_len(content).max(100) as f64;
    let required = BASE_REPETITION_FACTOR * (1.0 + (500.0 / len).min(1.0));

    (ratio / required).min(1.0)
}

fn referential_cohesion(features: &FeatureVector) -> f64 {
    if features.token_count == 0 {
        return 0.0;
    }
    let density = features.tag_count(PosTag::Pron) as f64 / features.token_count as f64;
    1.0 - ((density - IDEAL_PRONOUN_DENSITY).abs() / IDEAL_PRONOUN_DENSITY).min(1.0)
}
