//! Pipeline module tests.

#![cfg(test)]

use super::*;
use crate::errors::{ErrorCode, ErrorKind, Field, OrderError};
use crate::types::ItemCounts;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// FILE ERROR TESTS
// ============================================================================

#[test]
fn test_invalid_file_extension() {
    let err = fetch_top_three_ordered_items("log").unwrap_err();
    assert_eq!(err.code(), ErrorCode::INVALID_FILE);
    assert_eq!(err.kind(), ErrorKind::Unknown);
}

#[test]
fn test_invalid_extension_checked_before_io() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "orders.csv", "1, 1\n");
    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::INVALID_FILE);
}

#[test]
fn test_file_not_found() {
    let temp = TempDir::new().unwrap();
    let err = fetch_top_three_ordered_items(temp.path().join("text.txt")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FILE_NOT_FOUND);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_uppercase_extension_accepted() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "LOG.TXT", "1, 1\n");
    let (ranked, counts) = fetch_top_three_ordered_items(&path).unwrap();
    assert_eq!(ranked, vec![1]);
    assert_eq!(counts, ItemCounts::from([(1, 1)]));
}

// ============================================================================
// INVALID LOG DATA TESTS
// ============================================================================

#[test]
fn test_invalid_order_log_entry() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log_test.txt", "1,1\n2 2\n");
    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::INCORRECT_INPUT);
    assert!(matches!(err, OrderError::MalformedLine { line: 2, .. }));
}

#[test]
fn test_invalid_eater_id() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log_test.txt", "A,1\n2 2\n");
    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::INCORRECT_INPUT);
    assert!(matches!(
        err,
        OrderError::InvalidField {
            field: Field::EaterId,
            line: 1,
            ..
        }
    ));
}

#[test]
fn test_invalid_food_menu_id() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log_test.txt", "1, 1\n2, A\n");
    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::INCORRECT_INPUT);
    assert!(matches!(
        err,
        OrderError::InvalidField {
            field: Field::FoodMenuId,
            line: 2,
            ..
        }
    ));
}

#[test]
fn test_duplicate_entry() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log_test.txt", "1,1\n2, 2\n1, 1\n");
    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::INCORRECT_INPUT);
    assert_eq!(
        err,
        OrderError::DuplicateEntry {
            eater_id: 1,
            food_menu_id: 1,
            line: 3
        }
    );
}

#[test]
fn test_non_utf8_field_is_incorrect_input() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("log.txt");
    std::fs::write(&path, b"1, 1\n2, \xe9\n").unwrap();

    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncorrectInput);
    assert_eq!(err.code(), ErrorCode::INCORRECT_INPUT);
    assert!(matches!(
        err,
        OrderError::InvalidField {
            field: Field::FoodMenuId,
            line: 2,
            ..
        }
    ));
}

#[test]
fn test_directory_with_txt_name_is_not_found() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("x.txt");
    std::fs::create_dir(&dir).unwrap();

    let err = fetch_top_three_ordered_items(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.code(), ErrorCode::FILE_NOT_FOUND);
}

#[test]
fn test_parse_error_reported_before_duplicate() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log_test.txt", "1,1\n1,1\nbad\n");
    let err = fetch_top_three_ordered_items(&path).unwrap_err();
    assert!(matches!(err, OrderError::MalformedLine { line: 3, .. }));
}

// ============================================================================
// SUCCESS TESTS
// ============================================================================

#[test]
fn test_success() {
    let temp = TempDir::new().unwrap();
    let path = write_log(
        &temp,
        "log_test.txt",
        "1, 1\n2, 2\n3, 3\n4, 1\n5, 1\n6, 2\n7, 2\n8, 3\n9, 2\n10, 2\n",
    );

    let (ranked, counts) = fetch_top_three_ordered_items(&path).unwrap();
    assert_eq!(ranked, vec![2, 1, 3]);
    assert_eq!(counts, ItemCounts::from([(1, 3), (2, 5), (3, 2)]));
}

#[test]
fn test_empty_log() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log.txt", "");
    let (ranked, counts) = fetch_top_three_ordered_items(&path).unwrap();
    assert!(ranked.is_empty());
    assert!(counts.is_empty());
}

#[test]
fn test_idempotent() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log.txt", "1, 4\n2, 5\n3, 4\n4, 6\n5, 5\n");
    let first = fetch_top_three_ordered_items(&path).unwrap();
    let second = fetch_top_three_ordered_items(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pipeline_output_totals() {
    let temp = TempDir::new().unwrap();
    let path = write_log(&temp, "log.txt", "1, 4\n2, 5\n3, 4\n");
    let output = OrderPipeline::standard().run(&path).unwrap();
    assert_eq!(output.total_orders, 3);
    assert_eq!(output.distinct_items(), 2);
    assert_eq!(output.top(1)[0].menu_id, 4);
}

// ============================================================================
// PIPELINE COMPOSITION TESTS
// ============================================================================

#[test]
fn test_standard_pipeline_stage_order() {
    let pipeline = OrderPipeline::standard();
    let names: Vec<&str> = pipeline.stages.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["FileGate", "Parse", "Aggregate", "Rank"]);
}

#[test]
fn test_default_is_standard() {
    assert_eq!(OrderPipeline::default().stages.len(), 4);
}

#[test]
fn test_empty_pipeline_returns_empty_output() {
    let output = OrderPipeline::new().run(Path::new("anything")).unwrap();
    assert!(output.ranked.is_empty());
    assert_eq!(output.total_orders, 0);
}

struct FailingStage;

impl PipelineStage for FailingStage {
    fn name(&self) -> &str {
        "Failing"
    }

    fn execute(&self, ctx: PipelineContext) -> Result<PipelineContext, OrderError> {
        Err(OrderError::InvalidFile {
            path: ctx.input_path,
        })
    }
}

struct PanicStage;

impl PipelineStage for PanicStage {
    fn name(&self) -> &str {
        "Panic"
    }

    fn execute(&self, _ctx: PipelineContext) -> Result<PipelineContext, OrderError> {
        panic!("stage after a failure must not run");
    }
}

#[test]
fn test_stops_at_first_failure() {
    let pipeline = OrderPipeline::new()
        .add_stage(Box::new(FailingStage))
        .add_stage(Box::new(PanicStage));
    let err = pipeline.run(Path::new("log.txt")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::INVALID_FILE);
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_non_txt_extension_is_invalid_file(ext in "[a-z]{1,4}") {
            prop_assume!(!ext.eq_ignore_ascii_case("txt"));
            let path = format!("/nonexistent/log.{}", ext);
            let err = fetch_top_three_ordered_items(path).unwrap_err();
            prop_assert_eq!(err.code(), ErrorCode::INVALID_FILE);
        }

        #[test]
        fn prop_counts_match_orders(items in proptest::collection::vec(0i64..5, 0..40)) {
            // Distinct eaters can never produce a duplicate.
            let content: String = items
                .iter()
                .enumerate()
                .map(|(eater, item)| format!("{}, {}\n", eater, item))
                .collect();
            let temp = TempDir::new().unwrap();
            let path = write_log(&temp, "log.txt", &content);

            let (ranked, counts) = fetch_top_three_ordered_items(&path).unwrap();
            prop_assert_eq!(counts.values().sum::<u64>(), items.len() as u64);
            prop_assert_eq!(ranked.len(), counts.len());
            for pair in ranked.windows(2) {
                prop_assert!(counts[&pair[0]] >= counts[&pair[1]]);
            }
        }
    }
}
