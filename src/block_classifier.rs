// Paragraph block classification over raw scene text.
// Splits on blank-line separators, tags blocks Dialogue or Description, and
// keeps merging blank-line-delimited segments into an open dialogue block
// until its quote style balances or input ends.

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::Serialize;
use tracing::debug;

use crate::rules::FormatRules;
use crate::sentence_tokenizer::SentenceTokenizer;
use crate::spacing::BLOCK_SEPARATOR;

/// Paragraph classification, exhaustive by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Dialogue,
    Description,
}

/// One classified paragraph of the scene
///
/// Dialogue blocks are opaque to sentence rules: `sentence_count` is 0 and
/// they are never split. Description blocks carry the derived count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphBlock {
    pub kind: BlockKind,
    pub text: String,
    pub sentence_count: usize,
    pub source_order: usize,
}

/// Classified blocks plus the spacing deviations found while segmenting
pub(crate) struct ClassifiedScene {
    pub blocks: Vec<ParagraphBlock>,
    pub spacing_deviations: Vec<SpacingDeviation>,
}

/// A spot where the raw spacing differed from the canonical blank line
pub(crate) struct SpacingDeviation {
    /// Index into the classified block sequence
    pub block_index: usize,
    pub detail: String,
}

/// Splits raw text into ordered paragraph blocks
pub struct BlockClassifier {
    separator: Regex,
    tokenizer: SentenceTokenizer,
    opening_quotes: Vec<char>,
}

impl BlockClassifier {
    /// Create a classifier from the given rules
    pub fn new(rules: &FormatRules) -> Result<Self> {
        // A blank line may carry spaces or tabs; CRLF input is tolerated.
        // The pattern is compiled once and matches in linear time.
        let separator = Regex::new(r"\r?\n(?:[ \t]*\r?\n)+")?;
        Ok(Self {
            separator,
            tokenizer: SentenceTokenizer::new(rules),
            opening_quotes: rules.opening_quotes.clone(),
        })
    }

    /// Create a classifier with the default ruleset
    pub fn with_default_rules() -> Result<Self> {
        Self::new(&FormatRules::default())
    }

    /// Classify `text` into ordered paragraph blocks
    pub fn classify(&self, text: &str) -> Vec<ParagraphBlock> {
        self.classify_with_spacing(text).blocks
    }

    /// Classify and record every deviation from canonical spacing
    pub(crate) fn classify_with_spacing(&self, text: &str) -> ClassifiedScene {
        let mut blocks: Vec<ParagraphBlock> = Vec::new();
        let mut deviations: Vec<SpacingDeviation> = Vec::new();

        let core = text.trim();
        if core.is_empty() {
            return ClassifiedScene {
                blocks,
                spacing_deviations: deviations,
            };
        }
        let core_start = text.len() - text.trim_start().len();
        if core_start > 0 {
            deviations.push(SpacingDeviation {
                block_index: 0,
                detail: "leading whitespace removed".to_string(),
            });
        }
        let has_trailing = core_start + core.len() < text.len();

        // Segment the core on blank-line separator runs. The core is
        // trimmed, so segments are never empty or whitespace-only.
        let mut segments: Vec<(usize, usize)> = Vec::new();
        let mut separators: Vec<(usize, usize)> = Vec::new();
        let mut last = 0;
        for m in self.separator.find_iter(core) {
            segments.push((last, m.start()));
            separators.push((m.start(), m.end()));
            last = m.end();
        }
        segments.push((last, core.len()));

        let mut open_balance: Option<QuoteBalance> = None;
        for (i, &(seg_start, seg_end)) in segments.iter().enumerate() {
            let segment = &core[seg_start..seg_end];
            let separator = if i > 0 {
                let (s, e) = separators[i - 1];
                Some(&core[s..e])
            } else {
                None
            };
            let canonical = separator.map_or(true, |s| s == BLOCK_SEPARATOR);

            if let Some(mut balance) = open_balance.take() {
                if let Some(block) = blocks.last_mut() {
                    if !canonical {
                        let sep = separator.unwrap_or_default();
                        deviations.push(SpacingDeviation {
                            block_index: block.source_order,
                            detail: format!(
                                "dialogue continuation separator {sep:?} replaced with a blank line"
                            ),
                        });
                    }
                    block.text.push_str(BLOCK_SEPARATOR);
                    block.text.push_str(segment);
                    balance.scan(segment);
                    if !balance.is_closed() {
                        open_balance = Some(balance);
                    }
                    continue;
                }
            }

            if !canonical {
                let sep = separator.unwrap_or_default();
                deviations.push(SpacingDeviation {
                    block_index: blocks.len(),
                    detail: format!("separator {sep:?} replaced with a blank line"),
                });
            }

            let first = segment.trim_start().chars().next();
            let block = match first {
                Some(quote) if self.opening_quotes.contains(&quote) => {
                    let mut balance = QuoteBalance::for_opening(quote);
                    balance.scan(segment);
                    if !balance.is_closed() {
                        open_balance = Some(balance);
                    }
                    ParagraphBlock {
                        kind: BlockKind::Dialogue,
                        text: segment.to_string(),
                        sentence_count: 0,
                        source_order: blocks.len(),
                    }
                }
                _ => ParagraphBlock {
                    kind: BlockKind::Description,
                    text: segment.to_string(),
                    sentence_count: self.tokenizer.count_sentences(segment),
                    source_order: blocks.len(),
                },
            };
            blocks.push(block);
        }

        if has_trailing {
            deviations.push(SpacingDeviation {
                block_index: blocks.len().saturating_sub(1),
                detail: "trailing whitespace removed".to_string(),
            });
        }

        debug!(
            "Classified {} blocks with {} spacing deviations",
            blocks.len(),
            deviations.len()
        );
        ClassifiedScene {
            blocks,
            spacing_deviations: deviations,
        }
    }
}

/// Quote-style balance for multi-line dialogue continuation
#[derive(Debug, Clone)]
struct QuoteBalance {
    style: QuoteStyle,
    depth: usize,
}

#[derive(Debug, Clone, Copy)]
enum QuoteStyle {
    /// The same character opens and closes; balance is parity
    Parity { mark: char, apostrophe_aware: bool },
    /// Distinct open/close characters; balance is nesting depth
    Paired {
        open: char,
        close: char,
        apostrophe_aware: bool,
    },
}

impl QuoteBalance {
    fn for_opening(ch: char) -> Self {
        let style = match ch {
            '"' => QuoteStyle::Parity {
                mark: '"',
                apostrophe_aware: false,
            },
            '\'' => QuoteStyle::Parity {
                mark: '\'',
                apostrophe_aware: true,
            },
            '\u{201C}' => QuoteStyle::Paired {
                open: '\u{201C}',
                close: '\u{201D}',
                apostrophe_aware: false,
            },
            '\u{2018}' => QuoteStyle::Paired {
                open: '\u{2018}',
                close: '\u{2019}',
                apostrophe_aware: true,
            },
            other => QuoteStyle::Parity {
                mark: other,
                apostrophe_aware: false,
            },
        };
        Self { style, depth: 0 }
    }

    /// Fold one segment into the balance
    ///
    /// Segment boundaries are whitespace contexts, so apostrophe flanking
    /// state does not carry across segments.
    fn scan(&mut self, segment: &str) {
        let mut prev: Option<char> = None;
        let mut chars = segment.chars().peekable();
        while let Some(ch) = chars.next() {
            let next = chars.peek().copied();
            self.step(ch, prev, next);
            prev = Some(ch);
        }
    }

    fn step(&mut self, ch: char, prev: Option<char>, next: Option<char>) {
        match self.style {
            QuoteStyle::Parity {
                mark,
                apostrophe_aware,
            } if ch == mark => {
                if apostrophe_aware && is_apostrophe(prev, next) {
                    return;
                }
                self.depth ^= 1;
            }
            QuoteStyle::Paired {
                open,
                close,
                apostrophe_aware,
            } => {
                if ch == open {
                    self.depth += 1;
                } else if ch == close {
                    if apostrophe_aware && is_apostrophe(prev, next) {
                        return;
                    }
                    self.depth = self.depth.saturating_sub(1);
                }
            }
            _ => {}
        }
    }

    fn is_closed(&self) -> bool {
        self.depth == 0
    }
}

/// A quote character flanked by alphanumerics on both sides is an apostrophe
fn is_apostrophe(prev: Option<char>, next: Option<char>) -> bool {
    matches!((prev, next), (Some(p), Some(n)) if p.is_alphanumeric() && n.is_alphanumeric())
}
