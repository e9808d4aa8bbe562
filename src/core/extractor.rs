//! Syntactic feature extraction over an injected NLP provider

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::core::LanguageVariantDetector;
use crate::types::{Entity, FeatureVector, NlpError, NlpResult, Sentiment, SyntaxAnalysis};

/// Trait that every NLP backend must implement.
///
/// The three calls are independent and receive the same document.
#[async_trait]
pub trait NlpProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Tokens with POS tags, plus sentence boundaries.
    async fn analyze_syntax(&self, content: &str) -> NlpResult<SyntaxAnalysis>;

    /// Document-level sentiment.
    async fn analyze_sentiment(&self, content: &str) -> NlpResult<Sentiment>;

    /// Named entities.
    async fn analyze_entities(&self, content: &str) -> NlpResult<Vec<Entity>>;
}

/// Builds a `FeatureVector` from the three provider calls
#[derive(Clone, Default)]
pub struct SyntacticFeatureExtractor {
    provider: Option<Arc<dyn NlpProvider>>,
    detector: LanguageVariantDetector,
}

impl std::fmt::Debug for SyntacticFeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntacticFeatureExtractor")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}

impl SyntacticFeatureExtractor {
    /// Extractor backed by a provider
    pub fn new(provider: Arc<dyn NlpProvider>) -> Self {
        Self {
            provider: Some(provider),
            detector: LanguageVariantDetector::new(),
        }
    }

    /// Extractor with no provider; every extraction fails as unavailable
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Run syntax, sentiment and entity analysis concurrently and merge them.
    /// Any single failure fails the whole extraction.
    pub async fn extract(&self, content: &str) -> NlpResult<FeatureVector> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| NlpError::unavailable("no NLP provider configured"))?;

        let (syntax, sentiment, entities) = tokio::try_join!(
            provider.analyze_syntax(content),
            provider.analyze_sentiment(content),
            provider.analyze_entities(content),
        )?;

        let variant = self.detector.detect(content);
        let features = FeatureVector::from_analysis(syntax, sentiment, entities, variant);

        debug!(
            provider = provider.name(),
            tokens = features.token_count,
            sentences = features.sentence_count,
            entities = features.entity_count,
            variant = %variant,
            "extracted features"
        );

        Ok(features)
    }
}
