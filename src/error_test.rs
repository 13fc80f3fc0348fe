//! Tests for todo error types.

use crate::error::{TodoError, TodoResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = TodoError::list_not_found(3);
    assert_eq!(err.to_string(), "List with id 3 not found");

    let err = TodoError::item_not_found(7);
    assert_eq!(err.to_string(), "Item with id 7 not found");
}

#[test]
fn validation_error_lists_every_problem() {
    let err = TodoError::Validation {
        tool: "create_item".to_string(),
        problems: vec![
            "listId: missing required field".to_string(),
            "description: expected string, got number".to_string(),
        ],
    };
    assert_eq!(
        err.to_string(),
        "Invalid arguments for 'create_item': listId: missing required field; description: expected string, got number"
    );
}

#[test]
fn upstream_error_carries_status_and_body() {
    let err = TodoError::Upstream {
        status: 404,
        status_text: "Not Found".to_string(),
        body: r#"{"error":"List with id 9 not found"}"#.to_string(),
    };
    assert_eq!(
        err.to_string(),
        r#"Upstream error: 404 Not Found - {"error":"List with id 9 not found"}"#
    );
}

#[test]
fn unknown_operation_error_displays_correctly() {
    let err = TodoError::UnknownOperation {
        name: "launch_rocket".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown operation: launch_rocket");
}

#[test]
fn is_not_found_covers_store_and_upstream_404() {
    assert!(TodoError::item_not_found(1).is_not_found());
    assert!(
        TodoError::Upstream {
            status: 404,
            status_text: "Not Found".to_string(),
            body: String::new(),
        }
        .is_not_found()
    );
    assert!(
        !TodoError::Upstream {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: String::new(),
        }
        .is_not_found()
    );
    assert!(
        !TodoError::UnknownOperation {
            name: "x".to_string()
        }
        .is_not_found()
    );
}

#[test]
fn serde_errors_become_invalid_response() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: TodoError = parse_err.into();
    assert!(matches!(err, TodoError::InvalidResponse { .. }));
}

#[test]
fn result_type_alias_works() {
    fn returns_ok() -> TodoResult<u64> {
        Ok(42)
    }

    fn returns_err() -> TodoResult<u64> {
        Err(TodoError::list_not_found(42))
    }

    assert_eq!(returns_ok().unwrap(), 42);
    assert!(returns_err().is_err());
}
