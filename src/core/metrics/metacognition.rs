//! Metacognition: thinking about one's own thinking

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::lexicon::{Lexicon, TermCategory};
use crate::core::metrics::length_scaled_expectation;
use crate::types::{FeatureVector, MetacognitionSignals};
use crate::{
    META_WEIGHT_COGNITIVE, META_WEIGHT_COMPLEXITY, META_WEIGHT_ENTITY, META_WEIGHT_KNOWLEDGE,
    META_WEIGHT_SELF_REFERENCE, SHORT_TEXT_CAP,
};

lazy_static! {
    static ref RE_ICH: Regex = Regex::new(r"(?i)\bich\b").unwrap();
}

/// Entity types that tend to name ideas rather than people or places
const COGNITIVE_ENTITY_TYPES: &[&str] = &["WORK_OF_ART", "EVENT", "OTHER"];

#[derive(Debug, Default, Clone, Copy)]
pub struct MetacognitionCalculator {
    lexicon: Lexicon,
}

impl MetacognitionCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(&self, content: &str, features: &FeatureVector, too_short: bool) -> MetacognitionSignals {
        if too_short {
            let raw = if RE_ICH.is_match(content) { 2.0 } else { 1.0 };
            return MetacognitionSignals {
                raw: SHORT_TEXT_CAP.min(raw),
                ..MetacognitionSignals::default()
            };
        }

        let variant = features.detected_language_variant;
        let tokens = features.token_count;
        let count = |category| self.lexicon.count(category, variant, content) as f64;

        let self_reference = (count(TermCategory::SelfReference)
            / length_scaled_expectation(2.0, 3.0, tokens))
        .min(1.0);
        let cognitive_process = (count(TermCategory::CognitiveProcess)
            / length_scaled_expectation(1.5, 2.0, tokens))
        .min(1.0);
        let knowledge_regulation = (count(TermCategory::KnowledgeRegulation)
            / length_scaled_expectation(1.0, 1.5, tokens))
        .min(1.0);
        let entity_based = self.entity_score(features);
        let sentence_complexity = conjunction_density(features);

        let raw = (self_reference * META_WEIGHT_SELF_REFERENCE
            + cognitive_process * META_WEIGHT_COGNITIVE
            + knowledge_regulation * META_WEIGHT_KNOWLEDGE
            + entity_based * META_WEIGHT_ENTITY
            + sentence_complexity * META_WEIGHT_COMPLEXITY)
            * 10.0;

        MetacognitionSignals {
            self_reference,
            cognitive_process,
            knowledge_regulation,
            entity_based,
            sentence_complexity,
            raw,
        }
    }

    /// Cognition-related entities over sqrt(all entities)
    fn entity_score(&self, features: &FeatureVector) -> f64 {
        if features.entity_count == 0 {
            return 0.0;
        }
        let cognitive = features
            .entities
            .iter()
            .filter(|e| {
                COGNITIVE_ENTITY_TYPES.contains(&e.entity_type.as_str())
                    || self.lexicon.is_cognition_name(&e.name)
            })
            .count();
        (cognitive as f64 / (features.entity_count as f64).sqrt()).min(1.0)
    }
}

/// Conjunction tokens per sentence, expecting two per sentence
fn conjunction_density(features: &FeatureVector) -> f64 {
    if features.sentence_count == 0 {
        return 0.0;
    }
    let conjunctions: usize = features
        .pos_tag_counts
        .iter()
        .filter(|(tag, _)| tag.is_conjunction())
        .map(|(_, count)| *count)
        .sum();
    (conjunctions as f64 / (features.sentence_count as f64 * 2.0)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::fixtures;
    use crate::types::{Entity, LanguageVariant};

    #[test]
    fn test_short_text_with_ich() {
        let text = "Heute habe ich ein Meeting gehabt.";
        let fv = fixtures::features(text, "Heute/ADV habe/VERB ich/PRON ./PUNCT", 0.0, vec![]);
        assert_eq!(MetacognitionCalculator::new().calculate(text, &fv, true).raw, 2.0);
    }

    #[test]
    fn test_short_text_without_ich() {
        let text = "Das Wetter war schön.";
        let fv = fixtures::features(text, "Das/DET Wetter/NOUN ./PUNCT", 0.0, vec![]);
        assert_eq!(MetacognitionCalculator::new().calculate(text, &fv, true).raw, 1.0);
        // "Ichthyologie" does not contain the word "ich"
        assert_eq!(
            MetacognitionCalculator::new().calculate("Ichthyologie", &fv, true).raw,
            1.0
        );
    }

    #[test]
    fn test_project_signals() {
        let fv = fixtures::project();
        let s = MetacognitionCalculator::new().calculate(fixtures::PROJECT_TEXT, &fv, false);
        // "ich denke" once, expectation max(2, 3*sqrt(68)/15) = 2
        assert!((s.self_reference - 0.5).abs() < 1e-9, "{:?}", s);
        // "denke" once, expectation 1.5
        assert!((s.cognitive_process - 1.0 / 1.5).abs() < 1e-9, "{:?}", s);
        // Both entities are OTHER/EVENT: 2 / sqrt(2) caps at 1
        assert_eq!(s.entity_based, 1.0);
        // two SCONJ over 6 sentences * 2
        assert!((s.sentence_complexity - 2.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_entity_score_by_name_and_type() {
        let calc = MetacognitionCalculator::new();
        let mut fv = fixtures::project();
        fv.entities = vec![
            Entity::new("Anna", "PERSON"),
            Entity::new("Lernjournal", "CONSUMER_GOOD"),
            Entity::new("Bern", "LOCATION"),
            Entity::new("Zürich", "LOCATION"),
        ];
        fv.entity_count = 4;
        // one cognitive entity over sqrt(4)
        assert_eq!(calc.entity_score(&fv), 0.5);
    }

    #[test]
    fn test_dialect_terms_counted_for_swiss() {
        let calc = MetacognitionCalculator::new();
        let standard = fixtures::project();
        let mut swiss = fixtures::project();
        swiss.detected_language_variant = LanguageVariant::SwissGerman;

        let text = format!("{} Ich dänke, das isch mer klar worde.", fixtures::PROJECT_TEXT);
        let s_standard = calc.calculate(&text, &standard, false);
        let s_swiss = calc.calculate(&text, &swiss, false);
        assert!(s_swiss.self_reference > s_standard.self_reference);
        assert!(s_swiss.cognitive_process >= s_standard.cognitive_process);
    }
}
