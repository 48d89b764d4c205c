// Sentence boundary detection over description paragraph text.
// Explicit forward scanner: one pass, no backtracking. The start of the
// token preceding a candidate mark is tracked during the scan, so
// abbreviation and initial checks are O(1) per candidate.

use tracing::debug;

pub mod abbreviations;

pub use abbreviations::AbbreviationChecker;

use crate::rules::FormatRules;

/// A detected sentence span borrowed from the scanned text
///
/// `text` is the trimmed sentence content, including its terminal mark and
/// any closing quotes attached to it; `start`/`end` are byte offsets into
/// the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'t> {
    pub index: usize,
    pub text: &'t str,
    pub start: usize,
    pub end: usize,
}

/// Abbreviation-aware sentence tokenizer
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    end_punctuation: Vec<char>,
    closing_quotes: Vec<char>,
    opening_quotes: Vec<char>,
    abbreviations: AbbreviationChecker,
}

impl SentenceTokenizer {
    /// Create a tokenizer from the given rules
    pub fn new(rules: &FormatRules) -> Self {
        Self {
            end_punctuation: rules.end_punctuation.clone(),
            closing_quotes: rules.closing_quotes.clone(),
            opening_quotes: rules.opening_quotes.clone(),
            abbreviations: AbbreviationChecker::from_titles(rules.title_abbreviations.clone()),
        }
    }

    /// Create a tokenizer with the default ruleset
    pub fn with_default_rules() -> Self {
        Self::new(&FormatRules::default())
    }

    /// Lazily scan `text` for sentences
    ///
    /// The returned iterator borrows the input and never mutates it; it is
    /// finite and restartable (call `sentences` again for a fresh scan).
    pub fn sentences<'d, 't>(&'d self, text: &'t str) -> SentenceIter<'d, 't> {
        SentenceIter {
            tokenizer: self,
            text,
            pos: 0,
            index: 0,
        }
    }

    /// Collect all sentences of `text`
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<Sentence<'t>> {
        let sentences: Vec<Sentence<'t>> = self.sentences(text).collect();
        debug!("Detected {} sentences in {} bytes", sentences.len(), text.len());
        sentences
    }

    /// Count sentences without collecting them
    pub fn count_sentences(&self, text: &str) -> usize {
        self.sentences(text).count()
    }

    /// Byte offset where the sentence ends, if the mark ending at
    /// `after_mark` is an accepted boundary
    ///
    /// A run of closing quotes after the mark attaches to the sentence; the
    /// scanner must then see end-of-text, or whitespace followed by an
    /// uppercase letter or an opening quote.
    fn boundary_end(&self, text: &str, after_mark: usize) -> Option<usize> {
        let mut end = after_mark;
        for ch in text[end..].chars() {
            if self.closing_quotes.contains(&ch) {
                end += ch.len_utf8();
            } else {
                break;
            }
        }

        let mut rest = text[end..].chars();
        match rest.next() {
            None => return Some(end),
            Some(first) if !first.is_whitespace() => return None,
            Some(_) => {}
        }
        for ch in rest {
            if ch.is_whitespace() {
                continue;
            }
            if ch.is_uppercase() || self.opening_quotes.contains(&ch) {
                return Some(end);
            }
            return None;
        }
        // Only trailing whitespace remains after the mark.
        Some(end)
    }
}

/// Lazy forward scan over a text span, yielding one sentence per step
#[derive(Debug, Clone)]
pub struct SentenceIter<'d, 't> {
    tokenizer: &'d SentenceTokenizer,
    text: &'t str,
    pos: usize,
    index: usize,
}

impl<'d, 't> Iterator for SentenceIter<'d, 't> {
    type Item = Sentence<'t>;

    fn next(&mut self) -> Option<Sentence<'t>> {
        let text = self.text;

        // Skip inter-sentence whitespace.
        let mut start = self.pos;
        for ch in text[start..].chars() {
            if !ch.is_whitespace() {
                break;
            }
            start += ch.len_utf8();
        }
        if start >= text.len() {
            self.pos = text.len();
            return None;
        }

        let mut token_start = start;
        for (offset, ch) in text[start..].char_indices() {
            let at = start + offset;
            if ch.is_whitespace() {
                token_start = at + ch.len_utf8();
                continue;
            }
            if !self.tokenizer.end_punctuation.contains(&ch) {
                continue;
            }

            let after_mark = at + ch.len_utf8();
            let token = &text[token_start..after_mark];
            if ch == '.' && self.tokenizer.abbreviations.suppresses_period(token) {
                continue;
            }
            if let Some(end) = self.tokenizer.boundary_end(text, after_mark) {
                self.pos = end;
                let sentence = Sentence {
                    index: self.index,
                    text: &text[start..end],
                    start,
                    end,
                };
                self.index += 1;
                return Some(sentence);
            }
        }

        // Trailing fragment without an accepted terminal mark.
        self.pos = text.len();
        let tail = text[start..].trim_end();
        if tail.is_empty() {
            return None;
        }
        let end = start + tail.len();
        let sentence = Sentence {
            index: self.index,
            text: &text[start..end],
            start,
            end,
        };
        self.index += 1;
        Some(sentence)
    }
}
