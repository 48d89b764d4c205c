// Paragraph reflow: re-splits description blocks that exceed the sentence
// cap, preserving sentence order and content.

use tracing::debug;

use crate::block_classifier::{BlockKind, ParagraphBlock};
use crate::formatter::{Change, ChangeKind};
use crate::sentence_tokenizer::SentenceTokenizer;

/// Reflowed block sequence plus the audit of introduced breaks
pub struct ReflowOutcome {
    pub blocks: Vec<ParagraphBlock>,
    pub changes: Vec<Change>,
    /// Number of paragraph breaks introduced across all blocks
    pub sentences_split: usize,
}

/// Re-split description blocks holding more than `max_sentences` sentences
///
/// Oversized blocks are partitioned into consecutive groups of at most
/// `max_sentences` sentences, in original order; sentences within a group
/// are joined by single spaces. Dialogue blocks and blocks within the cap
/// pass through byte-identical. One `ParagraphSplit` change is emitted per
/// introduced break, carrying the pre-reflow block index.
pub fn reflow_blocks(
    tokenizer: &SentenceTokenizer,
    blocks: Vec<ParagraphBlock>,
    max_sentences: usize,
) -> ReflowOutcome {
    let max_sentences = max_sentences.max(1);
    let mut out: Vec<ParagraphBlock> = Vec::with_capacity(blocks.len());
    let mut changes: Vec<Change> = Vec::new();
    let mut affected = 0usize;

    for block in blocks {
        if block.kind != BlockKind::Description || block.sentence_count <= max_sentences {
            out.push(ParagraphBlock {
                source_order: out.len(),
                ..block
            });
            continue;
        }

        affected += 1;
        let sentences = tokenizer.tokenize(&block.text);
        for (group_index, group) in sentences.chunks(max_sentences).enumerate() {
            if group_index > 0 {
                changes.push(Change {
                    kind: ChangeKind::ParagraphSplit,
                    block_index: block.source_order,
                    detail: format!(
                        "paragraph break inserted after sentence {}",
                        group_index * max_sentences
                    ),
                });
            }
            let capacity = group.iter().map(|s| s.text.len()).sum::<usize>()
                + group.len().saturating_sub(1);
            let mut text = String::with_capacity(capacity);
            for (i, sentence) in group.iter().enumerate() {
                if i > 0 {
                    text.push(' ');
                }
                text.push_str(sentence.text);
            }
            out.push(ParagraphBlock {
                kind: BlockKind::Description,
                text,
                sentence_count: group.len(),
                source_order: out.len(),
            });
        }
    }

    let sentences_split = changes.len();
    if affected > 0 {
        debug!(
            "Reflow split {} oversized blocks, introducing {} paragraph breaks",
            affected, sentences_split
        );
    }
    ReflowOutcome {
        blocks: out,
        changes,
        sentences_split,
    }
}
