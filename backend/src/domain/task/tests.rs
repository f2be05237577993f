//! Tests for task identifiers, names, and drafts.

use super::*;
use rstest::rstest;

#[rstest]
#[case("1", 1)]
#[case("42", 42)]
#[case("+7", 7)]
fn task_id_parses_positive_integers(#[case] raw: &str, #[case] expected: u64) {
    let id: TaskId = raw.parse().expect("valid id");
    assert_eq!(id.get(), expected);
}

#[rstest]
#[case("0")]
#[case("-1")]
#[case("abc")]
#[case("")]
#[case(" 5")]
#[case("1.5")]
#[case("99999999999999999999")]
fn task_id_rejects_invalid_input(#[case] raw: &str) {
    assert_eq!(raw.parse::<TaskId>(), Err(TaskValidationError::InvalidId));
}

#[rstest]
fn task_id_rejects_values_beyond_bigint() {
    let result = TaskId::try_from(u64::MAX);
    assert_eq!(result, Err(TaskValidationError::InvalidId));
}

#[rstest]
fn task_id_round_trips_storage_representation() {
    let id = TaskId::new(9).expect("valid id");
    assert_eq!(id.as_i64(), 9);
    assert_eq!(id.to_string(), "9");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_name_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskName::new(raw), Err(TaskValidationError::EmptyName));
}

#[rstest]
fn task_name_keeps_surrounding_whitespace() {
    let name = TaskName::new(" Buy milk ").expect("valid name");
    assert_eq!(name.as_str(), " Buy milk ");
}

#[rstest]
fn draft_into_task_attaches_identifier() {
    let draft = TaskDraft::new(TaskName::new("Buy milk").expect("valid name"), true);
    let task = draft.into_task(TaskId::new(3).expect("valid id"));

    assert_eq!(task.id().get(), 3);
    assert_eq!(task.name().as_str(), "Buy milk");
    assert!(task.done());
}

#[rstest]
fn validation_messages_are_client_readable() {
    assert_eq!(TaskValidationError::EmptyName.to_string(), "name is required");
    assert_eq!(
        TaskValidationError::InvalidId.to_string(),
        "task id must be a positive integer"
    );
}
