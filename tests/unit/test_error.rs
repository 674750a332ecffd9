use itemplatform_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_remote_error_uses_remote_message() {
    let error = AppError::from_response(StatusCode::NOT_FOUND, r#"{"message":"not found"}"#);
    assert_eq!(error.to_string(), "not found");
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_remote_error_without_body_uses_status_code() {
    let error = AppError::from_response(StatusCode::NOT_FOUND, "");
    assert_eq!(error.to_string(), "404");
}

#[test]
fn test_remote_error_with_non_json_body_uses_status_code() {
    let error = AppError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert_eq!(error.to_string(), "502");
}

#[test]
fn test_remote_error_with_non_string_message_uses_status_code() {
    let error = AppError::from_response(StatusCode::BAD_REQUEST, r#"{"message":{"code":3}}"#);
    assert_eq!(error.to_string(), "400");
}

#[test]
fn test_remote_error_fields() {
    match AppError::from_response(StatusCode::FORBIDDEN, r#"{"message":"no access","code":7}"#) {
        AppError::Remote { status, message } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "no access");
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[test]
fn test_app_error_display_decode() {
    let error = AppError::Decode("expected value at line 1 column 1".to_string());
    assert_eq!(
        error.to_string(),
        "could not handle webhook: expected value at line 1 column 1"
    );
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("id must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: id must not be empty");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
    assert!(std::error::Error::source(&app_error).is_some());
}
