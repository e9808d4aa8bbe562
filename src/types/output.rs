//! Output structures for a scored reflection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{KpiScores, LanguageVariant, MetricBreakdown, ReflectionLevel, ScoreReason, ScoringTier};

/// Result of one scoring invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// The four KPIs, flattened into kpi_* fields
    #[serde(flatten)]
    pub kpis: KpiScores,
    /// Level derived from the KPI average
    pub reflection_level: ReflectionLevel,
    /// Fallback tier that produced the KPIs
    pub tier: ScoringTier,
    /// Detected German variant
    pub language_variant: LanguageVariant,
    /// Length gate result (false when unknown)
    pub text_too_short: bool,
    /// Reason for the tier
    pub reason: ScoreReason,
    /// Raw metric signals, only for the full tier
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breakdown: Option<MetricBreakdown>,
}

impl ScoreOutput {
    /// Create new output; the level is derived from the KPIs
    pub fn new(
        kpis: KpiScores,
        tier: ScoringTier,
        language_variant: LanguageVariant,
        text_too_short: bool,
        reason: ScoreReason,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            kpis,
            reflection_level: kpis.level(),
            tier,
            language_variant,
            text_too_short,
            reason,
            breakdown: None,
        }
    }

    pub fn with_breakdown(mut self, breakdown: MetricBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    /// Same KPIs, tier and reason; ignores timestamp and breakdown
    pub fn same_scores(&self, other: &ScoreOutput) -> bool {
        self.kpis == other.kpis
            && self.tier == other.tier
            && self.reason == other.reason
            && self.language_variant == other.language_variant
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "depth={} | coherence={} | metacognition={} | actionable={} | level={} | tier={} | reason={}",
            self.kpis.depth,
            self.kpis.coherence,
            self.kpis.metacognition,
            self.kpis.actionable,
            self.reflection_level,
            self.tier,
            self.reason.code()
        )
    }
}
