// Centralized abbreviation handling for sentence boundary detection.
// A title abbreviation followed by a proper noun ("Dr. Smith") must not
// produce a sentence boundary at its trailing period.

use std::collections::HashSet;

/// Title abbreviations that precede proper nouns and never end a sentence
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St.", "Rev.", "Capt.", "Lt.", "Sgt.",
];

/// O(1) lookup over the configured title-abbreviation set
#[derive(Debug, Clone)]
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<String>,
}

impl AbbreviationChecker {
    /// Create a checker with the default title-abbreviation set
    pub fn new() -> Self {
        Self::from_titles(TITLE_ABBREVIATIONS.iter().map(|s| s.to_string()))
    }

    /// Create a checker from a configured abbreviation list
    pub fn from_titles<I: IntoIterator<Item = String>>(titles: I) -> Self {
        Self {
            title_abbreviations: titles.into_iter().collect(),
        }
    }

    /// Check if a token (quotes stripped) is a configured title abbreviation
    pub fn is_title_abbreviation(&self, token: &str) -> bool {
        self.title_abbreviations.contains(strip_quotes(token))
    }

    /// Check if a token (quotes stripped) is a bare initial such as "J."
    /// Applies to periods only; "A!" is a one-word sentence, not an initial.
    pub fn is_initial(&self, token: &str) -> bool {
        let mut chars = strip_quotes(token).chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(c), Some('.'), None) if c.is_uppercase()
        )
    }

    /// Check whether the token ending at a period suppresses the boundary
    pub fn suppresses_period(&self, token: &str) -> bool {
        self.is_title_abbreviation(token) || self.is_initial(token)
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip surrounding quote characters so "'Dr.'" matches "Dr."
fn strip_quotes(token: &str) -> &str {
    token.trim_matches(|c: char| {
        matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}')
    })
}
