//! Actionable: concrete intentions, goals and plans
//!
//! Combines term density, future/imperative verb share and three structural
//! bonuses. The bonus also scales the whole score, rewarding texts that pair
//! intention terms with goal, timeframe or step structure.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::lexicon::{Lexicon, TermCategory};
use crate::core::metrics::length_scaled_expectation;
use crate::types::{ActionableSignals, FeatureVector, LanguageVariant};
use crate::{
    ACTION_BLEND_CONTEXT, ACTION_BLEND_PATTERN, ACTION_BLEND_VERB, ACTION_WEIGHT_ACTION_VERB,
    ACTION_WEIGHT_FUTURE_INTENTION, ACTION_WEIGHT_GOAL, ACTION_WEIGHT_STRATEGIC,
    BONUS_ENUMERATED_STEPS, BONUS_GOAL_STATEMENT, BONUS_TIMEFRAME, SHORT_TEXT_CAP,
};

lazy_static! {
    static ref RE_GOAL_STATEMENT: Regex = Regex::new(
        r"(?i)\b(mein\s+ziel\s+ist|meine\s+ziele\s+sind|ich\s+habe\s+mir\s+vorgenommen|ich\s+nehme\s+mir\s+vor|mis\s+ziel\s+isch|ich\s+ha\s+mer\s+vorgno|ich\s+nimm\s+mer\s+vor)\b"
    ).unwrap();

    static ref RE_TIMEFRAME: Regex = Regex::new(
        r"(?i)\b(morgen|übermorgen|heute\s+abend|nächste[nmrs]?\s+(woche|monat|jahr|mal)|nächscht[ie]?\s+(wuche|monet|johr|mal)|bis\s+(ende|zum|morgen|montag|freitag)|in\s+(\d+|einer|einem|zwei|drei|vier)\s+(tag|tagen|woche|wochen|monat|monaten)|ab\s+sofort|täglich|wöchentlich|jede\s+woche)\b"
    ).unwrap();

    static ref RE_ENUMERATED_STEPS: Regex = Regex::new(
        r"(?im)(^\s*(\d+[.)]|[-*•])\s+\S)|\b(erstens|zweitens|drittens|zuerst|anschließend|anschliessend|zum\s+schluss)\b"
    ).unwrap();
}

/// Action term categories and their per-match weights
const WEIGHTED_CATEGORIES: [(TermCategory, f64); 4] = [
    (TermCategory::FutureIntention, ACTION_WEIGHT_FUTURE_INTENTION),
    (TermCategory::Goal, ACTION_WEIGHT_GOAL),
    (TermCategory::ActionVerb, ACTION_WEIGHT_ACTION_VERB),
    (TermCategory::Strategic, ACTION_WEIGHT_STRATEGIC),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ActionableCalculator {
    lexicon: Lexicon,
}

impl ActionableCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of category matches times category weight
    pub fn weighted_matches(&self, content: &str, variant: LanguageVariant) -> f64 {
        WEIGHTED_CATEGORIES
            .iter()
            .map(|(category, weight)| self.lexicon.count(*category, variant, content) as f64 * weight)
            .sum()
    }

    pub fn calculate(&self, content: &str, features: &FeatureVector, too_short: bool) -> ActionableSignals {
        let weighted_matches = self.weighted_matches(content, features.detected_language_variant);

        if too_short {
            return ActionableSignals {
                weighted_matches,
                raw: SHORT_TEXT_CAP.min(weighted_matches.round()),
                ..ActionableSignals::default()
            };
        }

        let density = weighted_matches / length_scaled_expectation(2.0, 2.5, features.token_count);
        let verb_density = future_verb_ratio(features);
        let context_bonus = context_bonus(content);

        let pattern_score = (density * 8.0).min(8.0);
        let verb_score = (verb_density * 4.0).min(6.0);
        let context_score = context_bonus.min(4.0);

        let blended = ACTION_BLEND_PATTERN * pattern_score
            + ACTION_BLEND_VERB * verb_score
            + ACTION_BLEND_CONTEXT * context_score;
        let raw = blended * (1.0 + 0.2 * (context_bonus / 2.0).min(1.0));

        ActionableSignals {
            weighted_matches,
            density,
            verb_density,
            context_bonus,
            raw,
        }
    }
}

/// Future or imperative verbs relative to present-tense verbs
fn future_verb_ratio(features: &FeatureVector) -> f64 {
    let future = features.tokens.iter().filter(|t| t.is_future_or_imperative()).count();
    let present = features.tokens.iter().filter(|t| t.is_present_verb()).count();
    future as f64 / present.max(1) as f64
}

/// 1.5 goal statement + 1.3 timeframe + 1.2 enumerated steps
pub fn context_bonus(content: &str) -> f64 {
    let mut bonus = 0.0;
    if RE_GOAL_STATEMENT.is_match(content) {
        bonus += BONUS_GOAL_STATEMENT;
    }
    if RE_TIMEFRAME.is_match(content) {
        bonus += BONUS_TIMEFRAME;
    }
    if RE_ENUMERATED_STEPS.is_match(content) {
        bonus += BONUS_ENUMERATED_STEPS;
    }
    bonus
}
