//! Language variant detection: Standard German vs. Swiss German dialect

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::LanguageVariant;

lazy_static! {
    // Dialect forms that do not occur in written Standard German
    static ref RE_SWISS_MARKERS: Regex = Regex::new(
        r"(?i)\b(chli|nöd|nüt|isch|gsi|uf|öppis|hüt|hüür|dänke|dänk|gmerkt|gseh|gmacht|ich\s+ha|hät|händ|mer|mängisch|eifach|wänn|wott|möcht|chan|cha|chönd|gäge|zwüsche|gäll|merci vilmal|vill)\b"
    ).unwrap();

    // Standard German forms that the dialect always writes differently.
    // Words shared by both (will, viel, einfach, wenn, heute) stay out.
    static ref RE_STANDARD_MARKERS: Regex = Regex::new(
        r"(?i)\b(nicht|ist|auf|habe|hat|haben|nichts|gewesen|etwas|zwischen)\b"
    ).unwrap();
}

/// Detects whether a reflection is written in Swiss German dialect
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageVariantDetector;

impl LanguageVariantDetector {
    /// Create new detector
    pub fn new() -> Self {
        Self
    }

    /// Swiss German only when dialect markers appear and no Standard markers do
    pub fn detect(&self, content: &str) -> LanguageVariant {
        let swiss = RE_SWISS_MARKERS.is_match(content);
        let standard = RE_STANDARD_MARKERS.is_match(content);

        if swiss && !standard {
            LanguageVariant::SwissGerman
        } else {
            LanguageVariant::Standard
        }
    }
}
