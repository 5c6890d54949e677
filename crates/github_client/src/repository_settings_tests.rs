use super::*;
use serde_json::{json, to_value};

#[test]
fn test_default_update_serializes_to_empty_object() {
    let parsed = to_value(RepositorySettingsUpdate::default()).unwrap();

    assert_eq!(parsed, json!({}));
}

#[test]
fn test_update_serializes_only_set_fields() {
    let update = RepositorySettingsUpdate {
        has_wiki: Some(false),
        allow_auto_merge: Some(true),
        ..Default::default()
    };

    let parsed = to_value(&update).unwrap();

    assert_eq!(parsed, json!({ "has_wiki": false, "allow_auto_merge": true }));
}

#[test]
fn test_secret_scanning_serializes_nested_status() {
    let update = RepositorySettingsUpdate {
        security_and_analysis: Some(SecurityAndAnalysis {
            secret_scanning: Some(SecurityFeature::enabled()),
        }),
        ..Default::default()
    };

    let parsed = to_value(&update).unwrap();

    assert_eq!(
        parsed,
        json!({ "security_and_analysis": { "secret_scanning": { "status": "enabled" } } })
    );
}

#[test]
fn test_empty_security_and_analysis_is_omitted() {
    let update = RepositorySettingsUpdate {
        has_issues: Some(true),
        security_and_analysis: Some(SecurityAndAnalysis::default()),
        ..Default::default()
    };

    let parsed = to_value(&update).unwrap();

    assert!(parsed.get("security_and_analysis").is_none());
    assert_eq!(parsed["has_issues"], true);
}

#[test]
fn test_security_feature_status_lowercase() {
    assert_eq!(
        to_value(SecurityFeatureStatus::Disabled).unwrap(),
        json!("disabled")
    );
}
