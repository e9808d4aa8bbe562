//! Test-only NLP providers and fixtures shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use reflectify::core::{NlpProvider, ReflectionScorer};
use reflectify::types::{Entity, NlpError, NlpResult, Sentiment, SyntaxAnalysis};

/// Returns the same scripted document for every call
pub struct ScriptedProvider {
    pub syntax: SyntaxAnalysis,
    pub sentiment: Sentiment,
    pub entities: Vec<Entity>,
}

impl ScriptedProvider {
    /// `tagged` uses `word/TAG[:FEATURE]` notation, one sentence per line
    pub fn new(tagged: &str, magnitude: f64, entities: Vec<Entity>) -> Self {
        Self {
            syntax: SyntaxAnalysis::parse_tagged(tagged),
            sentiment: Sentiment { score: 0.1, magnitude },
            entities,
        }
    }

    pub fn scorer(self) -> ReflectionScorer {
        ReflectionScorer::with_provider(Arc::new(self))
    }
}

#[async_trait]
impl NlpProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn analyze_syntax(&self, _content: &str) -> NlpResult<SyntaxAnalysis> {
        Ok(self.syntax.clone())
    }

    async fn analyze_sentiment(&self, _content: &str) -> NlpResult<Sentiment> {
        Ok(self.sentiment)
    }

    async fn analyze_entities(&self, _content: &str) -> NlpResult<Vec<Entity>> {
        Ok(self.entities.clone())
    }
}

/// Syntax succeeds, sentiment fails with an HTTP status
pub struct FailingProvider;

impl FailingProvider {
    pub fn scorer() -> ReflectionScorer {
        ReflectionScorer::with_provider(Arc::new(FailingProvider))
    }
}

#[async_trait]
impl NlpProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn analyze_syntax(&self, content: &str) -> NlpResult<SyntaxAnalysis> {
        Ok(SyntaxAnalysis::parse_tagged(content))
    }

    async fn analyze_sentiment(&self, _content: &str) -> NlpResult<Sentiment> {
        Err(NlpError::Status {
            status: 503,
            body: "backend unavailable".to_string(),
        })
    }

    async fn analyze_entities(&self, _content: &str) -> NlpResult<Vec<Entity>> {
        Ok(Vec::new())
    }
}

/// Six sentences, 68 tokens, with connectives, a goal and a timeframe
pub const PROJECT_TEXT: &str = "Heute habe ich über mein Projekt nachgedacht, weil die Präsentation nicht gut lief. \
Ich denke, das Projekt braucht deshalb eine klare Struktur. \
Die Struktur fehlte, daher war die Präsentation unklar. \
Jedoch habe ich aus dem Feedback viel gelernt. \
Mein Ziel ist eine bessere Präsentation. \
Ich werde nächste Woche die Struktur üben, weil ich das Projekt sicher präsentieren will.";

pub const PROJECT_TAGGED: &str = "
Heute/ADV habe/VERB:PRESENT ich/PRON über/ADP mein/DET Projekt/NOUN nachgedacht/VERB:PAST ,/PUNCT weil/SCONJ die/DET Präsentation/NOUN nicht/ADV gut/ADJ lief/VERB:PAST ./PUNCT
Ich/PRON denke/VERB:PRESENT ,/PUNCT das/PRON Projekt/NOUN braucht/VERB:PRESENT deshalb/ADV eine/DET klare/ADJ Struktur/NOUN ./PUNCT
Die/DET Struktur/NOUN fehlte/VERB:PAST ,/PUNCT daher/ADV war/VERB:PAST die/DET Präsentation/NOUN unklar/ADJ ./PUNCT
Jedoch/ADV habe/VERB:PRESENT ich/PRON aus/ADP dem/DET Feedback/NOUN viel/ADJ gelernt/VERB:PAST ./PUNCT
Mein/DET Ziel/NOUN ist/VERB:PRESENT eine/DET bessere/ADJ Präsentation/NOUN ./PUNCT
Ich/PRON werde/VERB:FUTURE nächste/ADJ Woche/NOUN die/DET Struktur/NOUN üben/VERB ,/PUNCT weil/SCONJ ich/PRON das/DET Projekt/NOUN sicher/ADV präsentieren/VERB will/VERB:PRESENT ./PUNCT
";

pub fn project_provider() -> ScriptedProvider {
    ScriptedProvider::new(
        PROJECT_TAGGED,
        2.4,
        vec![Entity::new("Projekt", "OTHER"), Entity::new("Präsentation", "EVENT")],
    )
}

pub const MEETING_TEXT: &str = "Heute habe ich ein Meeting gehabt.";

pub const MEETING_TAGGED: &str =
    "Heute/ADV habe/VERB:PRESENT ich/PRON ein/DET Meeting/NOUN gehabt/VERB:PAST ./PUNCT";

/// Standard paraphrase of `SWISS_TEXT`
pub const STANDARD_TEXT: &str = "Ich denke, dass mir das Projekt wichtig ist. \
Für mich war die Arbeit im Team eine gute Erfahrung. \
Ich verstehe jetzt, wie wir besser planen. \
Ich frage mich, was ich beim nächsten Mal anders mache.";

pub const STANDARD_TAGGED: &str = "
Ich/PRON denke/VERB:PRESENT ,/PUNCT dass/SCONJ mir/PRON das/DET Projekt/NOUN wichtig/ADJ ist/VERB:PRESENT ./PUNCT
Für/ADP mich/PRON war/VERB:PAST die/DET Arbeit/NOUN im/ADP Team/NOUN eine/DET gute/ADJ Erfahrung/NOUN ./PUNCT
Ich/PRON verstehe/VERB:PRESENT jetzt/ADV ,/PUNCT wie/SCONJ wir/PRON besser/ADV planen/VERB:PRESENT ./PUNCT
Ich/PRON frage/VERB:PRESENT mich/PRON ,/PUNCT was/PRON ich/PRON beim/ADP nächsten/ADJ Mal/NOUN anders/ADV mache/VERB:PRESENT ./PUNCT
";

pub const SWISS_TEXT: &str = "Ich dänke, dass mir s Projekt wichtig isch. \
Für mi isch d Arbet im Team e gueti Erfahrig gsi. \
Ich verstah jetzt, wie mer besser plane. \
Ich frög mi, was ich bim nächschte mal andersch mach.";

pub const SWISS_TAGGED: &str = "
Ich/PRON dänke/VERB:PRESENT ,/PUNCT dass/SCONJ mir/PRON s/DET Projekt/NOUN wichtig/ADJ isch/VERB:PRESENT ./PUNCT
Für/ADP mi/PRON isch/VERB:PRESENT d/DET Arbet/NOUN im/ADP Team/NOUN e/DET gueti/ADJ Erfahrig/NOUN gsi/VERB:PAST ./PUNCT
Ich/PRON verstah/VERB:PRESENT jetzt/ADV ,/PUNCT wie/SCONJ mer/PRON besser/ADV plane/VERB:PRESENT ./PUNCT
Ich/PRON frög/VERB:PRESENT mi/PRON ,/PUNCT was/PRON ich/PRON bim/ADP nächschte/ADJ mal/NOUN andersch/ADV mach/VERB:PRESENT ./PUNCT
";
