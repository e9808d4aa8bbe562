//! Language variant definitions

use serde::{Deserialize, Serialize};

/// German variant a reflection is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageVariant {
    /// Standard German (default)
    #[default]
    Standard,
    /// Swiss German dialect
    SwissGerman,
}

impl std::fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LanguageVariant::Standard => "STANDARD",
            LanguageVariant::SwissGerman => "SWISS_GERMAN",
        };
        write!(f, "{}", name)
    }
}
