//! KPI scores and reflection level

use serde::{Deserialize, Serialize};

use crate::{KPI_MAX, KPI_MIN, LEVEL_THRESHOLD_ANALYTICAL, LEVEL_THRESHOLD_CRITICAL};

/// The four reflection KPIs, each always in [1,10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiScores {
    #[serde(rename = "kpi_depth")]
    pub depth: u8,
    #[serde(rename = "kpi_coherence")]
    pub coherence: u8,
    #[serde(rename = "kpi_metacognition")]
    pub metacognition: u8,
    #[serde(rename = "kpi_actionable")]
    pub actionable: u8,
}

impl KpiScores {
    /// Round each raw value and clamp into [1,10]
    pub fn clamped(depth: f64, coherence: f64, metacognition: f64, actionable: f64) -> Self {
        Self {
            depth: clamp_kpi(depth),
            coherence: clamp_kpi(coherence),
            metacognition: clamp_kpi(metacognition),
            actionable: clamp_kpi(actionable),
        }
    }

    /// Same value for all four KPIs
    pub fn uniform(value: f64) -> Self {
        Self::clamped(value, value, value, value)
    }

    pub fn average(&self) -> f64 {
        (self.depth as f64 + self.coherence as f64 + self.metacognition as f64 + self.actionable as f64)
            / 4.0
    }

    pub fn max(&self) -> u8 {
        self.depth
            .max(self.coherence)
            .max(self.metacognition)
            .max(self.actionable)
    }

    pub fn level(&self) -> ReflectionLevel {
        ReflectionLevel::from_average(self.average())
    }
}

/// Round half away from zero and clamp into the KPI range
pub fn clamp_kpi(raw: f64) -> u8 {
    if !raw.is_finite() {
        return KPI_MIN;
    }
    raw.round().clamp(KPI_MIN as f64, KPI_MAX as f64) as u8
}

/// Ordinal reflection level derived from the KPI average
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionLevel {
    /// Recounts events
    Descriptive,
    /// Explains causes and connections
    Analytical,
    /// Questions assumptions and derives consequences
    Critical,
}

impl ReflectionLevel {
    /// avg >= 8 → Critical, avg >= 6 → Analytical, else Descriptive
    pub fn from_average(avg: f64) -> Self {
        if avg >= LEVEL_THRESHOLD_CRITICAL {
            Self::Critical
        } else if avg >= LEVEL_THRESHOLD_ANALYTICAL {
            Self::Analytical
        } else {
            Self::Descriptive
        }
    }
}

impl std::fmt::Display for ReflectionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Descriptive => "DESCRIPTIVE",
            Self::Analytical => "ANALYTICAL",
            Self::Critical => "CRITICAL",
        };
        write!(f, "{}", name)
    }
}

/// Raw (pre-rounding) metric values and their sub-signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBreakdown {
    pub coherence: CoherenceSignals,
    pub depth: DepthSignals,
    pub metacognition: MetacognitionSignals,
    pub actionable: ActionableSignals,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoherenceSignals {
    pub lexical: f64,
    pub referential: f64,
    pub connective: f64,
    pub paragraph: f64,
    pub raw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthSignals {
    pub lexical: f64,
    pub syntactic: f64,
    pub semantic: f64,
    pub elaboration: f64,
    pub raw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetacognitionSignals {
    pub self_reference: f64,
    pub cognitive_process: f64,
    pub knowledge_regulation: f64,
    pub entity_based: f64,
    pub sentence_complexity: f64,
    pub raw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionableSignals {
    pub weighted_matches: f64,
    pub density: f64,
    pub verb_density: f64,
    pub context_bonus: f64,
    pub raw: f64,
}
