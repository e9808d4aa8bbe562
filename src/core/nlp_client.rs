//! HTTP client for a Cloud-Natural-Language-style REST API
//!
//! Endpoints (relative to `NlpConfig::endpoint`):
//! - POST documents:analyzeSyntax
//! - POST documents:analyzeSentiment
//! - POST documents:analyzeEntities

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::NlpConfig;
use crate::core::NlpProvider;
use crate::types::{
    Entity, Mood, NlpError, NlpResult, NlpToken, PosTag, Sentiment, SyntaxAnalysis, Tense,
};

/// NLP provider talking to the REST API
#[derive(Debug, Clone)]
pub struct CloudNlpClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl CloudNlpClient {
    /// Build a client; fails as unavailable without an API key
    pub fn new(config: &NlpConfig) -> NlpResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| NlpError::unavailable("no NLP API key configured"))?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!(endpoint = %config.endpoint, "NLP client initialized");

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/documents:{}", self.endpoint, method)
    }

    async fn post<T: DeserializeOwned>(&self, method: &str, content: &str) -> NlpResult<T> {
        let body = AnalyzeRequest {
            document: Document {
                kind: "PLAIN_TEXT",
                language: &self.language,
                content,
            },
            encoding_type: "UTF8",
        };

        let response = self
            .http
            .post(self.url(method))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(method, status = status.as_u16(), "NLP request rejected");
            return Err(NlpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| NlpError::decode(format!("{}: {}", method, e)))
    }
}

#[async_trait]
impl NlpProvider for CloudNlpClient {
    fn name(&self) -> &'static str {
        "cloud-nlp"
    }

    async fn analyze_syntax(&self, content: &str) -> NlpResult<SyntaxAnalysis> {
        let wire: SyntaxResponse = self.post("analyzeSyntax", content).await?;
        Ok(wire.into_analysis())
    }

    async fn analyze_sentiment(&self, content: &str) -> NlpResult<Sentiment> {
        let wire: SentimentResponse = self.post("analyzeSentiment", content).await?;
        let doc = wire
            .document_sentiment
            .ok_or_else(|| NlpError::decode("missing documentSentiment"))?;
        Ok(Sentiment {
            score: doc.score,
            magnitude: doc.magnitude,
        })
    }

    async fn analyze_entities(&self, content: &str) -> NlpResult<Vec<Entity>> {
        let wire: EntitiesResponse = self.post("analyzeEntities", content).await?;
        Ok(wire
            .entities
            .into_iter()
            .map(|e| Entity::new(e.name, e.kind))
            .collect())
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    document: Document<'a>,
    encoding_type: &'static str,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    language: &'a str,
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextSpan {
    #[serde(default)]
    content: String,
    #[serde(default)]
    begin_offset: i64,
}

#[derive(Debug, Deserialize)]
struct WireSentence {
    #[serde(default)]
    text: TextSpan,
}

#[derive(Debug, Default, Deserialize)]
struct WirePartOfSpeech {
    #[serde(default)]
    tag: String,
    #[serde(default)]
    tense: String,
    #[serde(default)]
    mood: String,
}

#[derive(Debug, Default, Deserialize)]
struct WireDependencyEdge {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireToken {
    #[serde(default)]
    text: TextSpan,
    #[serde(default)]
    part_of_speech: WirePartOfSpeech,
    #[serde(default)]
    dependency_edge: WireDependencyEdge,
}

#[derive(Debug, Deserialize)]
struct SyntaxResponse {
    #[serde(default)]
    sentences: Vec<WireSentence>,
    #[serde(default)]
    tokens: Vec<WireToken>,
}

impl SyntaxResponse {
    /// Assign each token to the last sentence starting at or before it
    fn into_analysis(self) -> SyntaxAnalysis {
        let starts: Vec<i64> = self.sentences.iter().map(|s| s.text.begin_offset).collect();

        let tokens = self
            .tokens
            .into_iter()
            .map(|t| {
                let sentence = starts
                    .iter()
                    .rposition(|start| *start <= t.text.begin_offset)
                    .unwrap_or(0);
                let label = t.dependency_edge.label;
                NlpToken {
                    text: t.text.content,
                    tag: PosTag::from_tag(&t.part_of_speech.tag),
                    tense: Tense::from_tag(&t.part_of_speech.tense),
                    mood: Mood::from_tag(&t.part_of_speech.mood),
                    dependency: (!label.is_empty()).then_some(label),
                    sentence,
                }
            })
            .collect();

        SyntaxAnalysis {
            tokens,
            sentences: self.sentences.into_iter().map(|s| s.text.content).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireSentiment {
    #[serde(default)]
    magnitude: f64,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentimentResponse {
    document_sentiment: Option<WireSentiment>,
}

#[derive(Debug, Deserialize)]
struct WireEntity {
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: Vec<WireEntity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_key_is_unavailable() {
        let err = CloudNlpClient::new(&NlpConfig::default()).unwrap_err();
        assert!(matches!(err, NlpError::Unavailable(_)));

        let config = NlpConfig {
            api_key: Some("   ".into()),
            ..NlpConfig::default()
        };
        assert!(matches!(CloudNlpClient::new(&config), Err(NlpError::Unavailable(_))));
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let config = NlpConfig {
            api_key: Some("k".into()),
            endpoint: "http://localhost:9000/v1/".into(),
            ..NlpConfig::default()
        };
        let client = CloudNlpClient::new(&config).unwrap();
        assert_eq!(client.url("analyzeSyntax"), "http://localhost:9000/v1/documents:analyzeSyntax");
    }

    #[test]
    fn test_request_body_shape() {
        let body = AnalyzeRequest {
            document: Document {
                kind: "PLAIN_TEXT",
                language: "de",
                content: "Hallo",
            },
            encoding_type: "UTF8",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["document"]["type"], "PLAIN_TEXT");
        assert_eq!(json["document"]["language"], "de");
        assert_eq!(json["encodingType"], "UTF8");
    }

    #[test]
    fn test_syntax_response_assigns_sentences() {
        let wire: SyntaxResponse = serde_json::from_str(
            r#"{
                "sentences": [
                    {"text": {"content": "Ich werde üben.", "beginOffset": 0}},
                    {"text": {"content": "Gut.", "beginOffset": 17}}
                ],
                "tokens": [
                    {"text": {"content": "Ich", "beginOffset": 0},
                     "partOfSpeech": {"tag": "PRON", "tense": "TENSE_UNKNOWN"},
                     "dependencyEdge": {"label": "NSUBJ"}},
                    {"text": {"content": "werde", "beginOffset": 4},
                     "partOfSpeech": {"tag": "VERB", "tense": "FUTURE", "mood": "INDICATIVE"}},
                    {"text": {"content": "üben", "beginOffset": 10},
                     "partOfSpeech": {"tag": "VERB"}},
                    {"text": {"content": ".", "beginOffset": 15},
                     "partOfSpeech": {"tag": "PUNCT"}},
                    {"text": {"content": "Gut", "beginOffset": 17},
                     "partOfSpeech": {"tag": "ADJ"}}
                ]
            }"#,
        )
        .unwrap();

        let analysis = wire.into_analysis();
        assert_eq!(analysis.sentences.len(), 2);
        assert_eq!(analysis.tokens.len(), 5);
        assert_eq!(analysis.tokens[0].tense, None);
        assert_eq!(analysis.tokens[0].dependency.as_deref(), Some("NSUBJ"));
        assert_eq!(analysis.tokens[1].tense, Some(Tense::Future));
        assert_eq!(analysis.tokens[2].dependency, None);
        assert_eq!(analysis.tokens[3].tag, PosTag::Punct);
        assert_eq!(analysis.tokens[3].sentence, 0);
        assert_eq!(analysis.tokens[4].sentence, 1);
    }

    #[test]
    fn test_entities_response_decoding() {
        let wire: EntitiesResponse = serde_json::from_str(
            r#"{"entities": [{"name": "Zürich", "type": "LOCATION", "salience": 0.4}]}"#,
        )
        .unwrap();
        assert_eq!(wire.entities[0].kind, "LOCATION");

        let empty: EntitiesResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.entities.is_empty());
    }

    #[test]
    fn test_sentiment_response_decoding() {
        let wire: SentimentResponse = serde_json::from_str(
            r#"{"documentSentiment": {"magnitude": 2.5, "score": -0.2}, "language": "de"}"#,
        )
        .unwrap();
        let doc = wire.document_sentiment.unwrap();
        assert_eq!(doc.magnitude, 2.5);
        assert_eq!(doc.score, -0.2);
    }
}
