//! Rule-based prose formatter for machine-generated narrative scene text.
//!
//! Normalizes raw scene prose into a canonical paragraph structure:
//! dialogue paragraphs are detected (including multi-line dialogue spanning
//! blank lines) and kept intact, description paragraphs are reflowed when
//! they exceed the sentence cap, and blocks are rejoined with exactly one
//! blank line between them. Formatting is idempotent, conserves sentence
//! content, and scans the input in a single forward pass.

pub mod block_classifier;
pub mod formatter;
pub mod reflow;
pub mod rules;
pub mod sentence_tokenizer;
pub mod spacing;
pub mod stats;
pub mod validator;

// Re-export main types for convenient access
pub use block_classifier::{BlockClassifier, BlockKind, ParagraphBlock};
pub use formatter::{
    format_scene_content, get_formatting_stats, validate_scene_formatting, Change, ChangeKind,
    FormatResult, SceneFormatter,
};
pub use reflow::{reflow_blocks, ReflowOutcome};
pub use rules::FormatRules;
pub use sentence_tokenizer::{AbbreviationChecker, Sentence, SentenceIter, SentenceTokenizer};
pub use spacing::{join_blocks, BLOCK_SEPARATOR};
pub use stats::{FormatStats, FormattingStats};
pub use validator::{ValidationReport, Violation, ViolationRule};
