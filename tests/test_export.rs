mod helpers;

use frogmemo::application::ExportDocument;
use frogmemo::domain::MemoBlock;
use helpers::{alpha_beta, TestStore};
use serde_json::Value;
use std::collections::BTreeSet;

fn keys(value: &Value) -> BTreeSet<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

#[test]
fn given_two_blocks_when_exporting_then_json_parses_back_with_identical_field_sets() {
    // Arrange
    let blocks = alpha_beta();

    // Act
    let json = ExportDocument::from_blocks(&blocks).to_json().unwrap();

    // Assert
    let parsed: Value = serde_json::from_str(&json).unwrap();
    let exported = parsed["memoBlocks"].as_array().unwrap();
    assert_eq!(exported.len(), 2);
    for (exported, original) in exported.iter().zip(&blocks) {
        let original = serde_json::to_value(original).unwrap();
        assert_eq!(keys(exported), keys(&original));
    }
    let restored: Vec<MemoBlock> = serde_json::from_value(parsed["memoBlocks"].clone()).unwrap();
    assert_eq!(restored, blocks);
}

#[test]
fn given_export_when_reading_field_names_then_uses_camel_case() {
    let json = ExportDocument::from_blocks(&alpha_beta()).to_json().unwrap();

    let parsed: Value = serde_json::from_str(&json).unwrap();

    let expected: BTreeSet<String> = [
        "id",
        "title",
        "content",
        "tags",
        "format",
        "showLineNumbers",
        "height",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(keys(&parsed["memoBlocks"][0]), expected);
    assert_eq!(parsed["availableTags"], serde_json::json!(["personal", "work"]));
}

#[test]
fn given_output_path_when_writing_export_then_file_round_trips() {
    // Arrange
    let store = TestStore::with_blocks(&alpha_beta()).unwrap();
    let book = store.open_book().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("store.json");

    // Act
    book.export_document().write_to(&out_path).unwrap();

    // Assert
    let raw = std::fs::read_to_string(&out_path).unwrap();
    let doc: ExportDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc.memo_blocks, alpha_beta());
    assert!(raw.contains("\n  \"memoBlocks\""));
}
