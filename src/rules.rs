use crate::sentence_tokenizer::abbreviations::TITLE_ABBREVIATIONS;

/// Configuration for block classification and sentence boundary detection
#[derive(Debug, Clone)]
pub struct FormatRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// Closing quote characters attached to a sentence after its end punctuation
    pub closing_quotes: Vec<char>,
    /// Characters that open a dialogue paragraph or a quoted sentence start
    pub opening_quotes: Vec<char>,
    /// Maximum sentences a description paragraph may hold before reflow splits it
    pub max_sentences_per_paragraph: usize,
    /// Title abbreviations whose trailing period never ends a sentence
    pub title_abbreviations: Vec<String>,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!'],
            closing_quotes: vec!['"', '\'', '\u{201D}', '\u{2019}'],
            opening_quotes: vec!['"', '\'', '\u{201C}', '\u{2018}'],
            max_sentences_per_paragraph: 3,
            title_abbreviations: TITLE_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
