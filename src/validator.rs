// Rule-violation reporting over a classified block sequence, with no
// rewriting.

use serde::Serialize;
use tracing::debug;

use crate::block_classifier::{BlockKind, ParagraphBlock};

/// Formatting rules a scene can violate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    MaxSentences,
}

/// One rule violation found in a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: ViolationRule,
    /// Index into the classified block sequence
    pub block_index: usize,
    pub detail: String,
}

/// Validation outcome for a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

/// Check every description block against the sentence cap
pub(crate) fn check_blocks(blocks: &[ParagraphBlock], max_sentences: usize) -> ValidationReport {
    let violations: Vec<Violation> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Description && b.sentence_count > max_sentences)
        .map(|b| Violation {
            rule: ViolationRule::MaxSentences,
            block_index: b.source_order,
            detail: format!(
                "{} sentences exceeds the maximum of {} per paragraph",
                b.sentence_count, max_sentences
            ),
        })
        .collect();
    debug!(
        "Validation found {} violations across {} blocks",
        violations.len(),
        blocks.len()
    );
    ValidationReport {
        is_valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: BlockKind, sentence_count: usize, source_order: usize) -> ParagraphBlock {
        ParagraphBlock {
            kind,
            text: String::new(),
            sentence_count,
            source_order,
        }
    }

    #[test]
    fn test_oversized_description_violates() {
        let blocks = vec![
            block(BlockKind::Description, 4, 0),
            block(BlockKind::Description, 3, 1),
        ];
        let report = check_blocks(&blocks, 3);
        assert!(!report.is_valid);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, ViolationRule::MaxSentences);
        assert_eq!(report.violations[0].block_index, 0);
        assert!(report.violations[0].detail.contains("4 sentences"));
    }

    #[test]
    fn test_dialogue_never_violates() {
        let blocks = vec![block(BlockKind::Dialogue, 0, 0)];
        let report = check_blocks(&blocks, 3);
        assert!(report.is_valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_rule_serializes_to_wire_name() {
        let violation = Violation {
            rule: ViolationRule::MaxSentences,
            block_index: 2,
            detail: "5 sentences exceeds the maximum of 3 per paragraph".to_string(),
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["rule"], "max_sentences");
        assert_eq!(json["block_index"], 2);
    }
}
