//! Raw NLP provider output: tokens, sentences, sentiment, entities

use serde::{Deserialize, Serialize};

/// Part-of-speech tag as reported by the NLP provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosTag {
    Noun,
    Verb,
    Adj,
    Adv,
    Pron,
    Conj,
    Sconj,
    Det,
    Adp,
    Num,
    Prt,
    Punct,
    Other,
}

impl PosTag {
    /// Parse a provider tag string; unknown tags map to `Other`
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "NOUN" | "PROPN" => Self::Noun,
            "VERB" | "AUX" => Self::Verb,
            "ADJ" => Self::Adj,
            "ADV" => Self::Adv,
            "PRON" => Self::Pron,
            "CONJ" | "CCONJ" => Self::Conj,
            "SCONJ" => Self::Sconj,
            "DET" => Self::Det,
            "ADP" => Self::Adp,
            "NUM" => Self::Num,
            "PRT" | "PART" => Self::Prt,
            "PUNCT" => Self::Punct,
            _ => Self::Other,
        }
    }

    /// Nouns, verbs, adjectives and adverbs carry lexical content
    pub fn is_content_word(&self) -> bool {
        matches!(self, Self::Noun | Self::Verb | Self::Adj | Self::Adv)
    }

    /// Coordinating or subordinating conjunction
    pub fn is_conjunction(&self) -> bool {
        matches!(self, Self::Conj | Self::Sconj)
    }
}

/// Grammatical tense of a verb token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tense {
    Past,
    Present,
    Future,
    Other,
}

impl Tense {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "PAST" | "PLUPERFECT" | "IMPERFECT" => Some(Self::Past),
            "PRESENT" => Some(Self::Present),
            "FUTURE" => Some(Self::Future),
            "" | "TENSE_UNKNOWN" => None,
            _ => Some(Self::Other),
        }
    }
}

/// Grammatical mood of a verb token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Indicative,
    Imperative,
    Subjunctive,
    Other,
}

impl Mood {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "INDICATIVE" => Some(Self::Indicative),
            "IMPERATIVE" => Some(Self::Imperative),
            "SUBJUNCTIVE" | "CONDITIONAL_MOOD" => Some(Self::Subjunctive),
            "" | "MOOD_UNKNOWN" => None,
            _ => Some(Self::Other),
        }
    }
}

/// One token with its syntactic annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NlpToken {
    pub text: String,
    pub tag: PosTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,
    /// Index into `SyntaxAnalysis::sentences`
    pub sentence: usize,
}

impl NlpToken {
    /// Token with only text, tag and sentence index
    pub fn new(text: impl Into<String>, tag: PosTag, sentence: usize) -> Self {
        Self {
            text: text.into(),
            tag,
            tense: None,
            mood: None,
            dependency: None,
            sentence,
        }
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Verb marked future tense or imperative mood
    pub fn is_future_or_imperative(&self) -> bool {
        self.tag == PosTag::Verb
            && (self.tense == Some(Tense::Future) || self.mood == Some(Mood::Imperative))
    }

    /// Verb marked present tense (and not imperative)
    pub fn is_present_verb(&self) -> bool {
        self.tag == PosTag::Verb
            && self.tense == Some(Tense::Present)
            && self.mood != Some(Mood::Imperative)
    }
}

/// Result of the syntax call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxAnalysis {
    pub tokens: Vec<NlpToken>,
    pub sentences: Vec<String>,
}

impl SyntaxAnalysis {
    /// Parse `word/TAG[:FEATURE]` notation, one sentence per line.
    ///
    /// FEATURE is a tense (`FUTURE`, `PRESENT`, `PAST`) or `IMPERATIVE`.
    /// Used to script provider responses in tests and demos:
    ///
    /// ```text
    /// Ich/PRON werde/VERB:FUTURE üben/VERB ./PUNCT
    /// ```
    pub fn parse_tagged(tagged: &str) -> Self {
        let mut tokens = Vec::new();
        let mut sentences = Vec::new();

        for line in tagged.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let index = sentences.len();
            let mut words = Vec::new();
            for item in line.split_whitespace() {
                let (text, spec) = item.rsplit_once('/').unwrap_or((item, "OTHER"));
                let mut parts = spec.split(':');
                let tag = PosTag::from_tag(parts.next().unwrap_or_default());
                let mut token = NlpToken::new(text, tag, index);
                for feature in parts {
                    if let Some(mood) = Mood::from_tag(feature).filter(|m| *m != Mood::Other) {
                        token.mood = Some(mood);
                    } else if let Some(tense) = Tense::from_tag(feature) {
                        token.tense = Some(tense);
                    }
                }
                words.push(token.text.clone());
                tokens.push(token);
            }
            sentences.push(words.join(" "));
        }

        Self { tokens, sentences }
    }
}

/// Document-level sentiment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// -1.0 (negative) .. 1.0 (positive)
    pub score: f64,
    /// Overall emotional strength, unbounded above
    pub magnitude: f64,
}

/// Named entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Provider entity type, e.g. PERSON, EVENT, WORK_OF_ART, OTHER
    pub entity_type: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
        }
    }
}
