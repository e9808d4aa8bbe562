//! Core types for Reflectify

mod error;
mod features;
mod kpi;
mod language;
mod nlp;
mod output;
mod reason;

pub use error::{ConfigError, ConfigResult, NlpError, NlpResult, ScoringError};
pub use features::FeatureVector;
pub use kpi::{
    clamp_kpi, ActionableSignals, CoherenceSignals, DepthSignals, KpiScores, MetacognitionSignals,
    MetricBreakdown, ReflectionLevel,
};
pub use language::LanguageVariant;
pub use nlp::{Entity, Mood, NlpToken, PosTag, Sentiment, SyntaxAnalysis, Tense};
pub use output::ScoreOutput;
pub use reason::{ScoreReason, ScoringTier};
