// Canonical inter-block spacing for the final block sequence.

use crate::block_classifier::ParagraphBlock;

/// Exactly one blank line between adjacent blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Join blocks with canonical spacing
///
/// Block-internal newlines (multi-line dialogue) are emitted unchanged.
/// Joining an already-canonical sequence reproduces it byte for byte.
pub fn join_blocks(blocks: &[ParagraphBlock]) -> String {
    let capacity = blocks.iter().map(|b| b.text.len()).sum::<usize>()
        + BLOCK_SEPARATOR.len() * blocks.len().saturating_sub(1);
    let mut out = String::with_capacity(capacity);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        out.push_str(&block.text);
    }
    out
}
