//! Reason codes explaining which scoring tier produced a result

use serde::{Deserialize, Serialize};

/// Why a score came out of the tier it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ScoreReason {
    // =========================================================================
    // S001: Full analysis
    // =========================================================================
    /// NLP features available, full formulas applied
    S001_FULL_ANALYSIS,
    /// NLP features available, text below the length gate
    S001_SHORT_TEXT_GATE,

    // =========================================================================
    // S002: Pattern-only fallback
    // =========================================================================
    /// No NLP provider configured
    S002_NLP_UNAVAILABLE,
    /// NLP provider call failed
    S002_NLP_FAILED,
    /// Full formulas produced non-finite values
    S002_FULL_ANALYSIS_FAILED,

    // =========================================================================
    // S003: Minimal fallback
    // =========================================================================
    /// Pattern-only scoring failed, fixed scores used
    S003_PATTERN_FAILED,
}

impl ScoreReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::S001_FULL_ANALYSIS => "S001_FULL_ANALYSIS",
            Self::S001_SHORT_TEXT_GATE => "S001_SHORT_TEXT_GATE",
            Self::S002_NLP_UNAVAILABLE => "S002_NLP_UNAVAILABLE",
            Self::S002_NLP_FAILED => "S002_NLP_FAILED",
            Self::S002_FULL_ANALYSIS_FAILED => "S002_FULL_ANALYSIS_FAILED",
            Self::S003_PATTERN_FAILED => "S003_PATTERN_FAILED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::S001_FULL_ANALYSIS => "Full linguistic analysis",
            Self::S001_SHORT_TEXT_GATE => "Text too short, scores capped at 2",
            Self::S002_NLP_UNAVAILABLE => "NLP service not configured, pattern scoring",
            Self::S002_NLP_FAILED => "NLP service failed, pattern scoring",
            Self::S002_FULL_ANALYSIS_FAILED => "Full analysis failed, pattern scoring",
            Self::S003_PATTERN_FAILED => "Pattern scoring failed, minimal scores",
        }
    }
}

impl std::fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Tier of the fallback chain that produced the scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringTier {
    /// NLP features and full formulas
    Full,
    /// Lexical patterns only, capped at 5
    PatternOnly,
    /// Fixed scores
    Minimal,
}

impl ScoringTier {
    /// Get color name for terminal display
    pub fn color(&self) -> &'static str {
        match self {
            ScoringTier::Full => "green",
            ScoringTier::PatternOnly => "yellow",
            ScoringTier::Minimal => "red",
        }
    }
}

impl std::fmt::Display for ScoringTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScoringTier::Full => "FULL",
            ScoringTier::PatternOnly => "PATTERN_ONLY",
            ScoringTier::Minimal => "MINIMAL",
        };
        write!(f, "{}", name)
    }
}
