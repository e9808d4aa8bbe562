//! Degraded scoring tiers used when NLP features are unavailable
//!
//! - Pattern-only: lexical diversity, sentence count and two small term
//!   lists; every KPI capped at 5 (2 for short text)
//! - Minimal: fixed scores from text length alone

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::lexicon::{Lexicon, TermCategory};
use crate::core::metrics::{char_len, is_text_too_short};
use crate::core::LanguageVariantDetector;
use crate::types::{KpiScores, ScoringError};
use crate::{MIN_TEXT_CHARS, PATTERN_ONLY_CAP, SHORT_TEXT_CAP};

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();
    static ref RE_SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Result of pattern-only scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternScores {
    pub kpis: KpiScores,
    pub text_too_short: bool,
}

/// Tier 2: scoring from surface patterns only
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternScorer {
    lexicon: Lexicon,
    detector: LanguageVariantDetector,
}

impl PatternScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, content: &str) -> Result<PatternScores, ScoringError> {
        let words: Vec<String> = RE_WORD
            .find_iter(content)
            .map(|m| m.as_str().to_lowercase())
            .collect();
        let word_count = words.len();
        let sentence_count = count_sentences(content);
        let text_too_short = is_text_too_short(content, word_count, sentence_count);

        let lexical_diversity = if word_count == 0 {
            0.0
        } else {
            words.iter().collect::<HashSet<_>>().len() as f64 / word_count as f64
        };

        let variant = self.detector.detect(content);
        let meta_matches = self.lexicon.count(TermCategory::PatternMetacognition, variant, content) as f64;
        let action_matches = self.lexicon.count(TermCategory::PatternAction, variant, content) as f64;

        let cap = if text_too_short { SHORT_TEXT_CAP } else { PATTERN_ONLY_CAP };
        let sentences = sentence_count as f64;

        let depth = cap.min(lexical_diversity * 4.0 + (word_count as f64 / 150.0).min(1.0));
        let coherence = cap.min((sentences / 5.0).min(1.0) * 3.0 + lexical_diversity * 2.0);
        let metacognition = cap.min(1.0 + meta_matches);
        let actionable = cap.min(1.0 + action_matches);

        // Guard only; the formulas above stay finite for any input
        for (name, value) in [
            ("depth", depth),
            ("coherence", coherence),
            ("metacognition", metacognition),
            ("actionable", actionable),
        ] {
            if !value.is_finite() {
                return Err(ScoringError::analysis(format!("non-finite {} score", name)));
            }
        }

        Ok(PatternScores {
            kpis: KpiScores::clamped(depth, coherence, metacognition, actionable),
            text_too_short,
        })
    }
}

/// Non-empty segments between sentence terminators
pub fn count_sentences(content: &str) -> usize {
    RE_SENTENCE_END
        .split(content)
        .filter(|segment| RE_WORD.is_match(segment))
        .count()
}

/// Tier 3: 1 for text under 100 characters, otherwise 2
pub fn minimal_scores(content: &str) -> KpiScores {
    if char_len(content) < MIN_TEXT_CHARS {
        KpiScores::uniform(1.0)
    } else {
        KpiScores::uniform(2.0)
    }
}
