//! Feature vector derived from NLP output

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{Entity, LanguageVariant, NlpToken, PosTag, Sentiment, SyntaxAnalysis};

/// Immutable linguistic features for one reflection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub token_count: usize,
    pub sentence_count: usize,
    pub sentiment_magnitude: f64,
    pub sentiment_score: f64,
    pub entity_count: usize,
    pub entity_types: BTreeSet<String>,
    pub pos_tag_counts: BTreeMap<PosTag, usize>,
    pub detected_language_variant: LanguageVariant,
    /// Tokens per sentence, in sentence order
    pub sentence_lengths: Vec<usize>,
    pub tokens: Vec<NlpToken>,
    pub entities: Vec<Entity>,
}

impl FeatureVector {
    /// Merge the three provider results into one vector
    pub fn from_analysis(
        syntax: SyntaxAnalysis,
        sentiment: Sentiment,
        entities: Vec<Entity>,
        variant: LanguageVariant,
    ) -> Self {
        let mut pos_tag_counts = BTreeMap::new();
        for token in &syntax.tokens {
            *pos_tag_counts.entry(token.tag).or_insert(0) += 1;
        }

        let mut sentence_lengths = vec![0usize; syntax.sentences.len()];
        for token in &syntax.tokens {
            if let Some(len) = sentence_lengths.get_mut(token.sentence) {
                *len += 1;
            }
        }

        let entity_types = entities.iter().map(|e| e.entity_type.clone()).collect();

        Self {
            token_count: syntax.tokens.len(),
            sentence_count: syntax.sentences.len(),
            sentiment_magnitude: sentiment.magnitude,
            sentiment_score: sentiment.score,
            entity_count: entities.len(),
            entity_types,
            pos_tag_counts,
            detected_language_variant: variant,
            sentence_lengths,
            tokens: syntax.tokens,
            entities,
        }
    }

    /// Number of tokens carrying the given tag
    pub fn tag_count(&self, tag: PosTag) -> usize {
        self.pos_tag_counts.get(&tag).copied().unwrap_or(0)
    }
}
