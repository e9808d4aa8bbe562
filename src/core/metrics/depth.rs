//! Depth: lexical, syntactic and semantic richness, normalized for length

use std::collections::HashSet;

use crate::types::{DepthSignals, FeatureVector, PosTag};
use crate::{
    DEPTH_REFERENCE_TOKENS, DEPTH_WEIGHT_ELABORATION, DEPTH_WEIGHT_LEXICAL,
    DEPTH_WEIGHT_SEMANTIC, DEPTH_WEIGHT_SYNTACTIC, ELABORATION_SCALE, SHORT_TEXT_CAP,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct DepthCalculator;

impl DepthCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, features: &FeatureVector, too_short: bool) -> DepthSignals {
        if too_short {
            return DepthSignals {
                raw: SHORT_TEXT_CAP.min((features.token_count as f64 / 10.0).round()),
                ..DepthSignals::default()
            };
        }

        let tokens = features.token_count as f64;
        let length_factor = normalized_length_factor(features.token_count);

        let lexical = (type_token_ratio(features) * length_factor.sqrt() * 1.5).min(1.0);
        let syntactic = sentence_length_variation(&features.sentence_lengths).min(1.0);
        let semantic = (features.entity_count as f64 / (tokens.powf(0.8) / 10.0)).min(1.0);
        let elaboration = (features.sentiment_magnitude / tokens.sqrt() * ELABORATION_SCALE).min(1.0);

        let raw = (lexical * DEPTH_WEIGHT_LEXICAL
            + syntactic * DEPTH_WEIGHT_SYNTACTIC
            + semantic * DEPTH_WEIGHT_SEMANTIC
            + elaboration * DEPTH_WEIGHT_ELABORATION)
            * 10.0;

        DepthSignals {
            lexical,
            syntactic,
            semantic,
            elaboration,
            raw,
        }
    }
}

/// log10(tokens) / log10(200), held within [0.5, 1]
pub fn normalized_length_factor(token_count: usize) -> f64 {
    let tokens = (token_count as f64).max(1.0);
    (tokens.log10() / DEPTH_REFERENCE_TOKENS.log10()).clamp(0.5, 1.0)
}

/// Distinct / total over non-punctuation tokens, case-folded
fn type_token_ratio(features: &FeatureVector) -> f64 {
    let words: Vec<String> = features
        .tokens
        .iter()
        .filter(|t| t.tag != PosTag::Punct)
        .map(|t| t.text.to_lowercase())
        .collect();
    if words.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&String> = words.iter().collect();
    distinct.len() as f64 / words.len() as f64
}

/// Coefficient of variation of sentence lengths (population stddev / mean)
fn sentence_length_variation(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = lengths
        .iter()
        .map(|len| (*len as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::fixtures;

    #[test]
    fn test_short_text_uses_token_count() {
        let fv = fixtures::features("", "Heute/ADV habe/VERB ich/PRON ein/DET Meeting/NOUN gehabt/VERB ./PUNCT", 0.0, vec![]);
        // round(7 / 10) = 1
        assert_eq!(DepthCalculator::new().calculate(&fv, true).raw, 1.0);
    }

    #[test]
    fn test_length_factor_bounds() {
        assert_eq!(normalized_length_factor(0), 0.5);
        assert_eq!(normalized_length_factor(5), 0.5);
        assert_eq!(normalized_length_factor(200), 1.0);
        assert_eq!(normalized_length_factor(5000), 1.0);
        let mid = normalized_length_factor(50);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn test_uniform_sentences_have_no_variation() {
        assert_eq!(sentence_length_variation(&[5, 5, 5]), 0.0);
        assert_eq!(sentence_length_variation(&[]), 0.0);
        assert_eq!(sentence_length_variation(&[0, 0]), 0.0);
        // mean 5, stddev 3
        assert!((sentence_length_variation(&[2, 8]) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_project_signals_in_range() {
        let fv = fixtures::project();
        let s = DepthCalculator::new().calculate(&fv, false);
        for v in [s.lexical, s.syntactic, s.semantic, s.elaboration] {
            assert!((0.0..=1.0).contains(&v), "{:?}", s);
        }
        assert!(s.raw > 0.0 && s.raw <= 10.0);
    }

    #[test]
    fn test_entities_raise_depth() {
        let without = fixtures::features(fixtures::PROJECT_TEXT, fixtures::PROJECT_TAGGED, 2.4, vec![]);
        let with = fixtures::project();
        let calc = DepthCalculator::new();
        assert!(calc.calculate(&with, false).raw > calc.calculate(&without, false).raw);
        assert_eq!(calc.calculate(&without, false).semantic, 0.0);
    }
}
