// Tests for the three public entry points as consumed by the upstream
// content-generation and editorial-review collaborators.

use scene_reflow::{
    format_scene_content, get_formatting_stats, validate_scene_formatting, ChangeKind,
    ViolationRule,
};

#[test]
fn test_format_splits_oversized_description() {
    let text = "Sarah walked in. The walls were gray. Papers were everywhere. Outside, rain fell.";
    let result = format_scene_content(text);

    assert_eq!(
        result.formatted,
        "Sarah walked in. The walls were gray. Papers were everywhere.\n\nOutside, rain fell."
    );
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].kind, ChangeKind::ParagraphSplit);
    assert_eq!(result.changes[0].block_index, 0);
    assert_eq!(result.stats.sentences_split, 1);
    assert_eq!(result.stats.formatting.formatted_paragraphs, 2);
    assert_eq!(result.stats.formatting.longest_description_sentences, 4);
}

#[test]
fn test_validate_reports_max_sentences() {
    let text = "Sarah walked in. The walls were gray. Papers were everywhere. Outside, rain fell.";
    let report = validate_scene_formatting(text);

    assert!(!report.is_valid);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule, ViolationRule::MaxSentences);
    assert_eq!(report.violations[0].block_index, 0);
}

#[test]
fn test_abbreviations_keep_sentence_count_low() {
    let text =
        "Dr. Smith walked in. Mrs. Johnson followed. Mr. Davis stayed outside.\n\n\"Good morning.\"";
    assert!(validate_scene_formatting(text).is_valid);

    let stats = get_formatting_stats(text);
    assert_eq!(stats.total_paragraphs, 2);
    assert_eq!(stats.description_paragraphs, 1);
    assert_eq!(stats.dialogue_paragraphs, 1);
    assert_eq!(stats.longest_description_sentences, 3);

    let result = format_scene_content(text);
    assert_eq!(result.formatted, text);
    assert!(result.changes.is_empty());
}

#[test]
fn test_stats_for_alternating_blocks() {
    let text = "A description. Here.\n\n\"Speech.\"\n\nMore description.\n\n\"More speech.\"";
    let stats = get_formatting_stats(text);

    assert_eq!(stats.total_paragraphs, 4);
    assert_eq!(stats.block_transitions, 3);
    assert_eq!(stats.description_paragraphs, 2);
    assert_eq!(stats.dialogue_paragraphs, 2);
    assert_eq!(stats.average_sentences_per_description, 1.5);
}

#[test]
fn test_empty_input() {
    let result = format_scene_content("");
    assert_eq!(result.formatted, "");
    assert_eq!(result.changes.len(), 0);

    assert!(validate_scene_formatting("").is_valid);

    let stats = get_formatting_stats("");
    assert_eq!(stats.total_paragraphs, 0);
    assert_eq!(stats.average_sentences_per_description, 0.0);
    assert_eq!(stats.longest_description_sentences, 0);
}

#[test]
fn test_spacing_normalization_is_audited() {
    let result = format_scene_content("First paragraph.\n\n\n\nSecond paragraph.");
    assert_eq!(result.formatted, "First paragraph.\n\nSecond paragraph.");
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].kind, ChangeKind::SpacingAdjusted);
    assert_eq!(result.changes[0].block_index, 1);
}

#[test]
fn test_windows_line_endings_normalize() {
    let result = format_scene_content("First block.\r\n\r\nSecond block.");
    assert_eq!(result.formatted, "First block.\n\nSecond block.");
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].kind, ChangeKind::SpacingAdjusted);
}

#[test]
fn test_result_serializes_with_wire_names() {
    let result = format_scene_content("One. Two. Three. Four.");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["changes"][0]["type"], "paragraph_split");
    assert!(json["stats"]["sentences_split"].is_u64());
    // The scene metrics flatten alongside sentences_split.
    assert!(json["stats"]["formatted_paragraphs"].is_u64());
    assert!(json["stats"]["block_transitions"].is_u64());

    let report = validate_scene_formatting("One. Two. Three. Four.");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["violations"][0]["rule"], "max_sentences");
}

#[test]
fn test_stats_prediction_matches_format_output() {
    let text = "A one. A two. A three. A four. A five. A six. A seven.\n\n\"Unchanged speech.\"";
    let predicted = get_formatting_stats(text).formatted_paragraphs;
    let actual = format_scene_content(text).stats.formatting.formatted_paragraphs;
    assert_eq!(predicted, actual);
    assert_eq!(actual, 4);
}

#[test]
fn test_entry_points_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| format_scene_content("One. Two. Three. Four.").formatted))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "One. Two. Three.\n\nFour.");
    }
}
