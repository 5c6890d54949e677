use super::*;
use std::error::Error as StdError;

#[test]
fn test_api_error() {
    let error = Error::ApiError("Bad credentials".to_string());

    assert_eq!(error.to_string(), "API request failed: Bad credentials");
    assert!(error.source().is_none());
}

#[test]
fn test_auth_error() {
    let error = Error::AuthError("Invalid base URI".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: Invalid base URI"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_deserialization_error_has_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error = Error::from(json_error);

    assert!(error
        .to_string()
        .starts_with("Failed to deserialize GitHub response:"));
    assert!(error.source().is_some());
}

#[test]
fn test_graphql_error_joins_messages() {
    let error = Error::GraphQl(vec![
        "Resource not accessible by integration".to_string(),
        "Could not resolve to a node".to_string(),
    ]);

    assert_eq!(
        error.to_string(),
        "GraphQL request failed: Resource not accessible by integration; Could not resolve to a node"
    );
}

#[test]
fn test_invalid_response_error() {
    let error = Error::InvalidResponse;

    assert_eq!(error.to_string(), "Invalid response format");
    assert!(error.source().is_none());
}

#[test]
fn test_not_found_error() {
    assert_eq!(Error::NotFound.to_string(), "Resource not found");
}

#[test]
fn test_rate_limit_exceeded_error() {
    let error = Error::RateLimitExceeded;

    assert_eq!(error.to_string(), "Rate limit exceeded");
    assert!(error.source().is_none());
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
