//! Reflectify: reflection-quality scoring for German journal entries
//!
//! text → language detection → NLP features → four KPI calculators → fallback chain → output

pub mod config;
pub mod core;
pub mod logging;
pub mod types;

pub use logging::init_logging;

// =============================================================================
// SHORT-TEXT GATE
// =============================================================================

/// Minimum character count for full linguistic scoring
pub const MIN_TEXT_CHARS: usize = 100;

/// Minimum token count for full linguistic scoring
pub const MIN_TOKEN_COUNT: usize = 20;

/// Minimum sentence count for full linguistic scoring
pub const MIN_SENTENCE_COUNT: usize = 3;

/// Ceiling for any KPI computed on short text
pub const SHORT_TEXT_CAP: f64 = 2.0;

// =============================================================================
// KPI RANGE
// =============================================================================

pub const KPI_MIN: u8 = 1;
pub const KPI_MAX: u8 = 10;

/// Ceiling for pattern-only scoring (reduced confidence)
pub const PATTERN_ONLY_CAP: f64 = 5.0;

// =============================================================================
// COHERENCE WEIGHTS (sum = 1.0)
// =============================================================================

pub const COHERENCE_WEIGHT_LEXICAL: f64 = 0.35;
pub const COHERENCE_WEIGHT_REFERENTIAL: f64 = 0.25;
pub const COHERENCE_WEIGHT_CONNECTIVE: f64 = 0.30;
pub const COHERENCE_WEIGHT_PARAGRAPH: f64 = 0.10;

/// Pronoun share of all tokens that scores full referential cohesion
pub const IDEAL_PRONOUN_DENSITY: f64 = 0.08;

/// Connectives per sentence treated as saturation
pub const MAX_CONNECTIVES_PER_SENTENCE: f64 = 0.8;

/// Base share of content words expected to repeat
pub const BASE_REPETITION_FACTOR: f64 = 0.3;

// =============================================================================
// DEPTH WEIGHTS (sum = 1.0)
// =============================================================================

pub const DEPTH_WEIGHT_LEXICAL: f64 = 0.25;
pub const DEPTH_WEIGHT_SYNTACTIC: f64 = 0.20;
pub const DEPTH_WEIGHT_SEMANTIC: f64 = 0.30;
pub const DEPTH_WEIGHT_ELABORATION: f64 = 0.25;

/// Token count at which the length factor saturates
pub const DEPTH_REFERENCE_TOKENS: f64 = 200.0;

/// Scale applied to sentiment magnitude per sqrt(token)
pub const ELABORATION_SCALE: f64 = 5.0;

// =============================================================================
// METACOGNITION WEIGHTS (sum = 1.0)
// =============================================================================

pub const META_WEIGHT_SELF_REFERENCE: f64 = 0.35;
pub const META_WEIGHT_COGNITIVE: f64 = 0.25;
pub const META_WEIGHT_KNOWLEDGE: f64 = 0.20;
pub const META_WEIGHT_ENTITY: f64 = 0.10;
pub const META_WEIGHT_COMPLEXITY: f64 = 0.10;

// =============================================================================
// ACTIONABLE WEIGHTS
// =============================================================================

/// Per-match weights of the action term categories
pub const ACTION_WEIGHT_FUTURE_INTENTION: f64 = 1.5;
pub const ACTION_WEIGHT_GOAL: f64 = 1.0;
pub const ACTION_WEIGHT_ACTION_VERB: f64 = 1.0;
pub const ACTION_WEIGHT_STRATEGIC: f64 = 0.8;

/// Structural bonuses
pub const BONUS_GOAL_STATEMENT: f64 = 1.5;
pub const BONUS_TIMEFRAME: f64 = 1.3;
pub const BONUS_ENUMERATED_STEPS: f64 = 1.2;

/// Final blend of the three actionable sub-scores
pub const ACTION_BLEND_PATTERN: f64 = 0.5;
pub const ACTION_BLEND_VERB: f64 = 0.3;
pub const ACTION_BLEND_CONTEXT: f64 = 0.2;

// =============================================================================
// REFLECTION LEVEL THRESHOLDS (average KPI)
// =============================================================================

pub const LEVEL_THRESHOLD_CRITICAL: f64 = 8.0;
pub const LEVEL_THRESHOLD_ANALYTICAL: f64 = 6.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
