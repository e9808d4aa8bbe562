//! Term lists keyed by category and dialect
//!
//! Matching is identical for every list: case-insensitive, word-boundary,
//! multi-word terms tolerate any whitespace between words. Standard German
//! terms are always searched; Swiss German terms are searched in addition
//! when the text was detected as dialect.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::LanguageVariant;

/// Category of a term list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermCategory {
    /// "ich denke", "für mich" ...
    SelfReference,
    /// Verbs of thinking and understanding
    CognitiveProcess,
    /// Nouns about knowledge and learning
    KnowledgeRegulation,
    /// "ich werde", "in Zukunft" ...
    FutureIntention,
    Goal,
    ActionVerb,
    Strategic,
    /// Discourse connectives (weil, daher, jedoch ...)
    Connective,
    /// Small metacognition list used by pattern-only scoring
    PatternMetacognition,
    /// Small action list used by pattern-only scoring
    PatternAction,
}

impl TermCategory {
    pub const ALL: [TermCategory; 10] = [
        TermCategory::SelfReference,
        TermCategory::CognitiveProcess,
        TermCategory::KnowledgeRegulation,
        TermCategory::FutureIntention,
        TermCategory::Goal,
        TermCategory::ActionVerb,
        TermCategory::Strategic,
        TermCategory::Connective,
        TermCategory::PatternMetacognition,
        TermCategory::PatternAction,
    ];
}

use LanguageVariant::{Standard, SwissGerman};
use TermCategory::*;

/// {category, dialect} -> terms
static TERM_TABLE: &[(TermCategory, LanguageVariant, &[&str])] = &[
    (SelfReference, Standard, &[
        "ich denke", "ich glaube", "ich fühle", "ich merke", "ich finde", "ich selbst",
        "mich selbst", "für mich", "mir ist", "mir wurde", "meiner meinung", "meine rolle",
        "meine art", "mein verhalten",
    ]),
    (SelfReference, SwissGerman, &[
        "ich dänke", "ich glaub", "ich fühl", "ich merk", "ich find", "ich selber",
        "mich selber", "für mi", "mir isch", "mir isch worde", "mini meinig", "mini rolle",
        "mini art", "mis verhalte",
    ]),
    (CognitiveProcess, Standard, &[
        "denke", "nachdenken", "überlege", "überlegt", "reflektiere", "reflektiert",
        "verstehe", "verstanden", "erkenne", "erkannt", "bemerke", "bemerkt", "analysiere",
        "hinterfrage", "hinterfragt", "bewerte", "vergleiche", "begreife", "realisiere",
        "realisiert", "frage mich", "wurde mir klar", "ist mir bewusst",
    ]),
    (CognitiveProcess, SwissGerman, &[
        "dänke", "nachedänke", "überleg", "überleit", "reflektier", "verstah", "verstande",
        "erkänn", "erkännt", "gmerkt", "merk", "analysier", "hinterfrög", "hinterfrögt",
        "bewärt", "vergliich", "begriif", "realisier", "frög mi", "isch mer klar worde",
        "isch mer bewusst",
    ]),
    (KnowledgeRegulation, Standard, &[
        "erkenntnis", "erkenntnisse", "einsicht", "einsichten", "wissen", "verständnis",
        "strategie", "lernprozess", "lernziel", "fehler", "stärken", "schwächen", "lektion",
        "erfahrung", "erfahrungen", "annahme", "annahmen", "perspektive",
    ]),
    (KnowledgeRegulation, SwissGerman, &[
        "erkänntnis", "iisicht", "iisichte", "wüsse", "verständniss", "strategii", "lernprozäss",
        "fähler", "stärchi", "schwächi", "lektione", "erfahrig", "erfahrige", "aanahm",
        "aanahme", "perspektiv",
    ]),
    (FutureIntention, Standard, &[
        "ich werde", "werde ich", "ich will", "ich möchte", "ich plane", "ich nehme mir vor",
        "in zukunft", "künftig", "zukünftig", "das nächste mal", "beim nächsten mal",
        "von nun an", "ab jetzt",
    ]),
    (FutureIntention, SwissGerman, &[
        "ich wirde", "wirde ich", "ich wott", "ich möcht", "ich plan", "ich nimm mer vor",
        "in zuekunft", "s nächscht mal", "bim nächschte mal", "vo jetzt a",
    ]),
    (Goal, Standard, &[
        "ziel", "ziele", "vorsatz", "vorsätze", "vorhaben", "absicht", "erreichen",
        "verbessern", "verbesserung",
    ]),
    (Goal, SwissGerman, &[
        "zieli", "vorsätz", "erreiche", "verbessere", "verbesserig",
    ]),
    (ActionVerb, Standard, &[
        "umsetzen", "anwenden", "üben", "ausprobieren", "beginnen", "anfangen", "einplanen",
        "vorbereiten", "ändern", "organisieren", "nachfragen", "besprechen",
    ]),
    (ActionVerb, SwissGerman, &[
        "umsetze", "aawände", "übe", "usprobiere", "aafange", "iiplane", "vorbereite",
        "ändere", "organisiere", "nachefroge", "bespräche",
    ]),
    (Strategic, Standard, &[
        "schritt", "schritte", "plan", "planung", "priorität", "prioritäten", "methode",
        "routine", "zeitplan", "checkliste", "reihenfolge",
    ]),
    (Strategic, SwissGerman, &[
        "schrittli", "planig", "prioritäte", "methodä", "zitplan", "reihefolg",
    ]),
    (Connective, Standard, &[
        "weil", "daher", "deshalb", "deswegen", "jedoch", "trotzdem", "dennoch", "allerdings",
        "außerdem", "ausserdem", "zudem", "folglich", "somit", "dadurch", "obwohl",
        "einerseits", "andererseits", "zum beispiel", "denn", "aber", "also",
        "schließlich", "schliesslich",
    ]),
    (Connective, SwissGerman, &[
        "wil", "drum", "desshalb", "wäge dem", "dänn", "usserdem", "glich", "einersiits",
        "anderersiits", "zum bispiil",
    ]),
    (PatternMetacognition, Standard, &[
        "ich denke", "ich glaube", "mir ist bewusst", "ich habe gelernt", "ich frage mich",
        "mir wurde klar", "ich verstehe",
    ]),
    (PatternMetacognition, SwissGerman, &[
        "ich dänke", "ich glaub", "mir isch bewusst", "ich ha glernt", "ich frög mi",
        "mir isch klar worde", "ich verstah",
    ]),
    (PatternAction, Standard, &[
        "ich werde", "ich will", "ich möchte", "nächste woche", "nächstes mal", "mein ziel",
        "ich plane",
    ]),
    (PatternAction, SwissGerman, &[
        "ich wirde", "ich wott", "ich möcht", "nächscht wuche", "nächscht mal", "mis ziel",
        "ich plan",
    ]),
];

/// Substrings of entity names that mark them as cognition-related
pub const COGNITION_STEMS: &[&str] = &[
    "lern", "denk", "wissen", "erkenntnis", "reflexion", "verständnis", "bewusst", "kognit",
    "gedanke", "dänk", "wüsse",
];

lazy_static! {
    static ref TERM_REGEXES: HashMap<(TermCategory, LanguageVariant), Regex> = TERM_TABLE
        .iter()
        .map(|(category, variant, terms)| ((*category, *variant), build_term_regex(terms)))
        .collect();
}

/// Compile one alternation with word boundaries around each term
fn build_term_regex(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|term| {
            term.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

/// Lookup and counting over the term table
#[derive(Debug, Default, Clone, Copy)]
pub struct Lexicon;

impl Lexicon {
    pub fn new() -> Self {
        Self
    }

    /// Dialects searched for a text of the given variant, in order
    fn searched_variants(variant: LanguageVariant) -> &'static [LanguageVariant] {
        match variant {
            Standard => &[Standard],
            SwissGerman => &[Standard, SwissGerman],
        }
    }

    /// Count word-boundary matches of the category's terms in text
    pub fn count(&self, category: TermCategory, variant: LanguageVariant, text: &str) -> usize {
        Self::searched_variants(variant)
            .iter()
            .filter_map(|v| TERM_REGEXES.get(&(category, *v)))
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    /// True if the entity name contains a cognition stem
    pub fn is_cognition_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        COGNITION_STEMS.iter().any(|stem| lower.contains(stem))
    }
}
