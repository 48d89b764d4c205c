// Formatter orchestration: classify, reflow, rejoin, and assemble the
// change audit and statistics.

use std::sync::OnceLock;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::block_classifier::BlockClassifier;
use crate::reflow::reflow_blocks;
use crate::rules::FormatRules;
use crate::sentence_tokenizer::SentenceTokenizer;
use crate::spacing::join_blocks;
use crate::stats::{self, FormatStats, FormattingStats};
use crate::validator::{self, ValidationReport};

/// Audit record of one structural rewrite performed by the formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// Index into the classified, pre-reflow block sequence
    pub block_index: usize,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    ParagraphSplit,
    SpacingAdjusted,
}

/// Outcome of formatting one scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatResult {
    pub formatted: String,
    pub changes: Vec<Change>,
    pub stats: FormatStats,
}

/// Scene prose formatter
///
/// Holds the compiled classifier and tokenizer for a ruleset. All methods
/// are pure over their input; a formatter is freely shared across threads.
pub struct SceneFormatter {
    rules: FormatRules,
    classifier: BlockClassifier,
    tokenizer: SentenceTokenizer,
}

impl SceneFormatter {
    /// Create a formatter from the given rules
    pub fn new(rules: FormatRules) -> Result<Self> {
        let classifier = BlockClassifier::new(&rules)?;
        let tokenizer = SentenceTokenizer::new(&rules);
        Ok(Self {
            rules,
            classifier,
            tokenizer,
        })
    }

    /// Create a formatter with the default ruleset
    pub fn with_default_rules() -> Result<Self> {
        Self::new(FormatRules::default())
    }

    /// The rules this formatter was built with
    pub fn rules(&self) -> &FormatRules {
        &self.rules
    }

    /// Format raw scene text into canonical paragraph structure
    ///
    /// Classifies blocks, splits oversized description paragraphs, and
    /// rejoins everything with single blank lines. Input that already
    /// satisfies the rules comes back byte-identical with no changes.
    pub fn format(&self, raw: &str) -> FormatResult {
        debug!("Formatting {} bytes of scene text", raw.len());
        let scene = self.classifier.classify_with_spacing(raw);
        let max = self.rules.max_sentences_per_paragraph;

        // Sentence metrics reflect the original structure; the formatted
        // paragraph count reflects the reflowed one.
        let pre_stats = stats::collect(&scene.blocks, max);
        let outcome = reflow_blocks(&self.tokenizer, scene.blocks, max);
        let formatted = join_blocks(&outcome.blocks);

        let mut changes = outcome.changes;
        changes.extend(scene.spacing_deviations.into_iter().map(|d| Change {
            kind: ChangeKind::SpacingAdjusted,
            block_index: d.block_index,
            detail: d.detail,
        }));

        let stats = FormatStats {
            sentences_split: outcome.sentences_split,
            formatting: FormattingStats {
                formatted_paragraphs: outcome.blocks.len(),
                ..pre_stats
            },
        };
        info!(
            "Formatted scene into {} paragraphs with {} changes",
            stats.formatting.formatted_paragraphs,
            changes.len()
        );
        FormatResult {
            formatted,
            changes,
            stats,
        }
    }

    /// Report rule violations without rewriting the content
    pub fn validate(&self, content: &str) -> ValidationReport {
        let blocks = self.classifier.classify(content);
        validator::check_blocks(&blocks, self.rules.max_sentences_per_paragraph)
    }

    /// Compute aggregate formatting statistics for the content
    pub fn stats(&self, content: &str) -> FormattingStats {
        let blocks = self.classifier.classify(content);
        stats::collect(&blocks, self.rules.max_sentences_per_paragraph)
    }
}

static DEFAULT_FORMATTER: OnceLock<SceneFormatter> = OnceLock::new();

fn default_formatter() -> &'static SceneFormatter {
    // The default separator pattern is a fixed literal; compiling it cannot
    // fail at runtime.
    DEFAULT_FORMATTER
        .get_or_init(|| SceneFormatter::with_default_rules().expect("default rules compile"))
}

/// Format raw scene text with the default rules
pub fn format_scene_content(raw: &str) -> FormatResult {
    default_formatter().format(raw)
}

/// Validate scene formatting with the default rules
pub fn validate_scene_formatting(content: &str) -> ValidationReport {
    default_formatter().validate(content)
}

/// Compute formatting statistics with the default rules
pub fn get_formatting_stats(content: &str) -> FormattingStats {
    default_formatter().stats(content)
}
