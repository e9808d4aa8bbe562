//! Core modules for Reflectify

pub mod language;
pub mod lexicon;
pub mod extractor;
pub mod nlp_client;
pub mod metrics;
pub mod fallback;
pub mod scorer;
pub mod api;

pub use language::LanguageVariantDetector;
pub use lexicon::{Lexicon, TermCategory};
pub use extractor::{NlpProvider, SyntacticFeatureExtractor};
pub use nlp_client::CloudNlpClient;
pub use metrics::{ActionableCalculator, CoherenceCalculator, DepthCalculator, MetacognitionCalculator};
pub use fallback::{count_sentences, minimal_scores, PatternScorer, PatternScores};
pub use scorer::ReflectionScorer;
pub use api::{create_router, run_server};
