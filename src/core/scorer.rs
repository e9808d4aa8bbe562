//! ReflectionScorer: features → four calculators → fallback chain
//!
//! Tiers, entered top-down, each attempted once:
//! 1. Full: NLP features and the full formulas
//! 2. Pattern-only: surface patterns, capped at 5
//! 3. Minimal: fixed 1 or 2
//!
//! Scoring never fails; every error degrades to the next tier.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::NlpConfig;
use crate::core::fallback::{minimal_scores, PatternScorer, PatternScores};
use crate::core::metrics::{
    features_too_short, ActionableCalculator, CoherenceCalculator, DepthCalculator,
    MetacognitionCalculator,
};
use crate::core::{CloudNlpClient, LanguageVariantDetector, NlpProvider, SyntacticFeatureExtractor};
use crate::types::{
    FeatureVector, KpiScores, MetricBreakdown, NlpError, ScoreOutput, ScoreReason, ScoringError,
    ScoringTier,
};

/// Stateless reflection scorer; share it behind an `Arc`
#[derive(Debug, Clone, Default)]
pub struct ReflectionScorer {
    extractor: SyntacticFeatureExtractor,
    detector: LanguageVariantDetector,
    pattern: PatternScorer,
    coherence: CoherenceCalculator,
    depth: DepthCalculator,
    metacognition: MetacognitionCalculator,
    actionable: ActionableCalculator,
}

impl ReflectionScorer {
    pub fn new(extractor: SyntacticFeatureExtractor) -> Self {
        Self {
            extractor,
            ..Self::default()
        }
    }

    pub fn with_provider(provider: Arc<dyn NlpProvider>) -> Self {
        Self::new(SyntacticFeatureExtractor::new(provider))
    }

    /// Scorer without NLP; always pattern-only
    pub fn pattern_only() -> Self {
        Self::new(SyntacticFeatureExtractor::unavailable())
    }

    /// Scorer backed by `CloudNlpClient`, or pattern-only when it cannot be built
    pub fn from_config(config: &NlpConfig) -> Self {
        match CloudNlpClient::new(config) {
            Ok(client) => Self::with_provider(Arc::new(client)),
            Err(e) => {
                warn!(error = %e, "NLP client unavailable, scoring will use patterns only");
                Self::pattern_only()
            }
        }
    }

    pub fn nlp_configured(&self) -> bool {
        self.extractor.is_configured()
    }

    /// Score one reflection. Title and category are context only and do not
    /// affect the KPIs.
    pub async fn score_reflection(&self, content: &str, title: &str, category: Option<&str>) -> ScoreOutput {
        debug!(title, category, chars = content.chars().count(), "scoring reflection");

        let output = match self.extract(content).await {
            Ok(features) => self.score_features(content, Some(&features)),
            Err(e) => {
                let reason = match e {
                    ScoringError::Nlp(NlpError::Unavailable(_)) => ScoreReason::S002_NLP_UNAVAILABLE,
                    _ => ScoreReason::S002_NLP_FAILED,
                };
                warn!(error = %e, "feature extraction failed");
                self.fallback(content, reason, self.pattern.score(content))
            }
        };

        info!(
            depth = output.kpis.depth,
            coherence = output.kpis.coherence,
            metacognition = output.kpis.metacognition,
            actionable = output.kpis.actionable,
            tier = %output.tier,
            reason = output.reason.code(),
            "reflection scored"
        );
        output
    }

    /// Tier 1 input
    async fn extract(&self, content: &str) -> Result<FeatureVector, ScoringError> {
        Ok(self.extractor.extract(content).await?)
    }

    /// Synchronous scoring from already extracted features.
    /// `None` means no features could be obtained.
    pub fn score_features(&self, content: &str, features: Option<&FeatureVector>) -> ScoreOutput {
        let Some(features) = features else {
            return self.fallback(content, ScoreReason::S002_NLP_UNAVAILABLE, self.pattern.score(content));
        };

        match self.score_full(content, features) {
            Ok((kpis, breakdown, too_short)) => {
                let reason = if too_short {
                    ScoreReason::S001_SHORT_TEXT_GATE
                } else {
                    ScoreReason::S001_FULL_ANALYSIS
                };
                ScoreOutput::new(
                    kpis,
                    ScoringTier::Full,
                    features.detected_language_variant,
                    too_short,
                    reason,
                )
                .with_breakdown(breakdown)
            }
            Err(e) => {
                warn!(error = %e, "full analysis failed");
                self.fallback(content, ScoreReason::S002_FULL_ANALYSIS_FAILED, self.pattern.score(content))
            }
        }
    }

    /// Tier 1
    fn score_full(
        &self,
        content: &str,
        features: &FeatureVector,
    ) -> Result<(KpiScores, MetricBreakdown, bool), ScoringError> {
        if !features.sentiment_magnitude.is_finite() || !features.sentiment_score.is_finite() {
            return Err(ScoringError::analysis("sentiment is not a finite number"));
        }
        let too_short = features_too_short(content, features);

        let breakdown = MetricBreakdown {
            coherence: self.coherence.calculate(content, features, too_short),
            depth: self.depth.calculate(features, too_short),
            metacognition: self.metacognition.calculate(content, features, too_short),
            actionable: self.actionable.calculate(content, features, too_short),
        };

        let raw = [
            ("coherence", breakdown.coherence.raw),
            ("depth", breakdown.depth.raw),
            ("metacognition", breakdown.metacognition.raw),
            ("actionable", breakdown.actionable.raw),
        ];
        if let Some((name, value)) = raw.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScoringError::analysis(format!("{} produced {}", name, value)));
        }

        let kpis = KpiScores::clamped(
            breakdown.depth.raw,
            breakdown.coherence.raw,
            breakdown.metacognition.raw,
            breakdown.actionable.raw,
        );
        Ok((kpis, breakdown, too_short))
    }

    /// Tiers 2 and 3, given the outcome of pattern-only scoring
    fn fallback(
        &self,
        content: &str,
        reason: ScoreReason,
        pattern: Result<PatternScores, ScoringError>,
    ) -> ScoreOutput {
        let variant = self.detector.detect(content);
        match pattern {
            Ok(scores) => ScoreOutput::new(
                scores.kpis,
                ScoringTier::PatternOnly,
                variant,
                scores.text_too_short,
                reason,
            ),
            // Tier 3 is a last resort; pattern scoring has no failing input today
            Err(e) => {
                warn!(error = %e, "pattern scoring failed, using minimal scores");
                ScoreOutput::new(
                    minimal_scores(content),
                    ScoringTier::Minimal,
                    variant,
                    features_unknown_short(content),
                    ScoreReason::S003_PATTERN_FAILED,
                )
            }
        }
    }
}

/// Without features only the character gate is known
fn features_unknown_short(content: &str) -> bool {
    crate::core::metrics::char_len(content) < crate::MIN_TEXT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::fixtures;
    use crate::types::LanguageVariant;

    #[test]
    fn test_full_tier_on_project_text() {
        let scorer = ReflectionScorer::pattern_only();
        let fv = fixtures::project();
        let out = scorer.score_features(fixtures::PROJECT_TEXT, Some(&fv));
        assert_eq!(out.tier, ScoringTier::Full);
        assert_eq!(out.reason, ScoreReason::S001_FULL_ANALYSIS);
        assert!(!out.text_too_short);
        assert!(out.kpis.coherence >= 6);
        assert!(out.kpis.actionable >= 6);
        assert!(out.breakdown.is_some());
    }

    #[test]
    fn test_short_gate_reason() {
        let text = "Heute habe ich ein Meeting gehabt.";
        let fv = fixtures::features(
            text,
            "Heute/ADV habe/VERB:PRESENT ich/PRON ein/DET Meeting/NOUN gehabt/VERB:PAST ./PUNCT",
            0.3,
            vec![],
        );
        let out = ReflectionScorer::pattern_only().score_features(text, Some(&fv));
        assert_eq!(out.tier, ScoringTier::Full);
        assert_eq!(out.reason, ScoreReason::S001_SHORT_TEXT_GATE);
        assert_eq!(out.kpis.coherence, 1);
        assert_eq!(out.kpis.depth, 1);
        assert_eq!(out.kpis.metacognition, 2);
        assert_eq!(out.kpis.actionable, 1);
    }

    #[test]
    fn test_non_finite_features_fall_back() {
        let mut fv = fixtures::project();
        fv.sentiment_magnitude = f64::NAN;
        let out = ReflectionScorer::pattern_only().score_features(fixtures::PROJECT_TEXT, Some(&fv));
        assert_eq!(out.tier, ScoringTier::PatternOnly);
        assert_eq!(out.reason, ScoreReason::S002_FULL_ANALYSIS_FAILED);
        assert!(out.kpis.max() <= 5);
    }

    #[test]
    fn test_no_features_is_pattern_only() {
        let out = ReflectionScorer::pattern_only().score_features(fixtures::PROJECT_TEXT, None);
        assert_eq!(out.tier, ScoringTier::PatternOnly);
        assert_eq!(out.reason, ScoreReason::S002_NLP_UNAVAILABLE);
        assert_eq!(out.language_variant, LanguageVariant::Standard);
    }

    #[test]
    fn test_pattern_failure_is_minimal() {
        let scorer = ReflectionScorer::pattern_only();
        let out = scorer.fallback(
            fixtures::PROJECT_TEXT,
            ScoreReason::S002_NLP_FAILED,
            Err(ScoringError::analysis("forced")),
        );
        assert_eq!(out.tier, ScoringTier::Minimal);
        assert_eq!(out.reason, ScoreReason::S003_PATTERN_FAILED);
        assert_eq!(out.kpis, KpiScores::uniform(2.0));

        let out = scorer.fallback("kurz", ScoreReason::S002_NLP_FAILED, Err(ScoringError::analysis("forced")));
        assert_eq!(out.kpis, KpiScores::uniform(1.0));
        assert!(out.text_too_short);
    }

    #[test]
    fn test_from_config_without_key() {
        let scorer = ReflectionScorer::from_config(&NlpConfig::default());
        assert!(!scorer.nlp_configured());
    }

    #[tokio::test]
    async fn test_extract_wraps_nlp_error() {
        let err = ReflectionScorer::pattern_only().extract("Text").await.unwrap_err();
        assert!(matches!(err, ScoringError::Nlp(NlpError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_empty_text_is_total() {
        let out = ReflectionScorer::pattern_only().score_reflection("", "", None).await;
        assert_eq!(out.kpis, KpiScores::uniform(1.0));
        assert_eq!(out.reason, ScoreReason::S002_NLP_UNAVAILABLE);
    }
}
