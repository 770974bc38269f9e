//! Tests for `src/api/envelope.rs` — wire shape of the response wrapper.

use serde_json::json;

use rolodex::api::envelope::ApiResponse;

#[test]
fn success_carries_data_and_message() {
    let response = ApiResponse::success(vec!["x"], "done");
    let value = serde_json::to_value(&response).expect("should serialize");

    assert_eq!(
        value,
        json!({
            "success": true,
            "data": ["x"],
            "message": "done",
            "errors": null,
        })
    );
}

#[test]
fn success_empty_has_null_data() {
    let response = ApiResponse::success_empty("Contact deleted successfully");
    let value = serde_json::to_value(&response).expect("should serialize");

    assert_eq!(
        value,
        json!({
            "success": true,
            "data": null,
            "message": "Contact deleted successfully",
            "errors": null,
        })
    );
}

#[test]
fn error_has_message_and_no_errors_list() {
    let response = ApiResponse::<()>::error("Contact with ID 7 was not found");
    let value = serde_json::to_value(&response).expect("should serialize");

    assert_eq!(
        value,
        json!({
            "success": false,
            "data": null,
            "message": "Contact with ID 7 was not found",
            "errors": null,
        })
    );
}

#[test]
fn validation_error_lists_messages_in_order() {
    let response = ApiResponse::<()>::validation_error(vec![
        "First name is required".to_owned(),
        "First name must be between 1 and 64 characters".to_owned(),
    ]);
    let value = serde_json::to_value(&response).expect("should serialize");

    assert_eq!(
        value,
        json!({
            "success": false,
            "data": null,
            "message": "Validation failed",
            "errors": [
                "First name is required",
                "First name must be between 1 and 64 characters",
            ],
        })
    );
}
