// Aggregate paragraph and sentence metrics over a classified block sequence.

use serde::Serialize;

use crate::block_classifier::{BlockKind, ParagraphBlock};

/// Scene-level formatting statistics
///
/// Sentence metrics cover description blocks only; dialogue blocks are
/// opaque to sentence rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattingStats {
    pub total_paragraphs: usize,
    pub description_paragraphs: usize,
    pub dialogue_paragraphs: usize,
    /// Adjacent block pairs whose kinds differ
    pub block_transitions: usize,
    /// Mean sentence count over description blocks, 0.0 if none
    pub average_sentences_per_description: f64,
    /// Maximum sentence count over description blocks, 0 if none
    pub longest_description_sentences: usize,
    /// Paragraph count formatting produces once oversized blocks are split
    pub formatted_paragraphs: usize,
}

/// Statistics attached to a format result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatStats {
    /// Paragraph breaks introduced by reflow
    pub sentences_split: usize,
    #[serde(flatten)]
    pub formatting: FormattingStats,
}

/// Collect metrics over a classified (pre-reflow) block sequence
pub(crate) fn collect(blocks: &[ParagraphBlock], max_sentences: usize) -> FormattingStats {
    let max_sentences = max_sentences.max(1);
    let total_paragraphs = blocks.len();
    let description_paragraphs = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Description)
        .count();
    let dialogue_paragraphs = total_paragraphs - description_paragraphs;
    let block_transitions = blocks
        .windows(2)
        .filter(|pair| pair[0].kind != pair[1].kind)
        .count();

    let sentence_sum: usize = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Description)
        .map(|b| b.sentence_count)
        .sum();
    let average_sentences_per_description = if description_paragraphs == 0 {
        0.0
    } else {
        sentence_sum as f64 / description_paragraphs as f64
    };
    let longest_description_sentences = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Description)
        .map(|b| b.sentence_count)
        .max()
        .unwrap_or(0);

    let formatted_paragraphs = blocks
        .iter()
        .map(|b| match b.kind {
            BlockKind::Dialogue => 1,
            BlockKind::Description => {
                ((b.sentence_count + max_sentences - 1) / max_sentences).max(1)
            }
        })
        .sum();

    FormattingStats {
        total_paragraphs,
        description_paragraphs,
        dialogue_paragraphs,
        block_transitions,
        average_sentences_per_description,
        longest_description_sentences,
        formatted_paragraphs,
    }
}
