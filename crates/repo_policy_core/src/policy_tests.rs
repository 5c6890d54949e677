use super::*;
use github_client::SecurityFeatureStatus;
use serde_json::json;

fn repository(language: Option<&str>) -> RepositoryDescriptor {
    RepositoryDescriptor::new("test-owner", "test-repo", "R_kgDOTest").with_language(language)
}

#[test]
fn test_default_policy_creates_only_for_javascript() {
    let policy = DesiredPolicy::default();

    assert!(policy.allows_rule_creation(&repository(Some("javascript"))));
    assert!(policy.allows_rule_creation(&repository(Some("JavaScript"))));
    assert!(policy.allows_rule_creation(&repository(Some("JAVASCRIPT"))));
    assert!(!policy.allows_rule_creation(&repository(Some("TypeScript"))));
    assert!(!policy.allows_rule_creation(&repository(Some("Rust"))));
}

#[test]
fn test_rule_creation_never_allowed_without_language() {
    let policy = DesiredPolicy::default();

    assert!(!policy.allows_rule_creation(&repository(None)));
}

#[test]
fn test_configured_creation_languages_are_case_insensitive() {
    let policy = DesiredPolicy {
        creation_languages: vec!["TypeScript".to_string(), "rust".to_string()],
        ..Default::default()
    };

    assert!(policy.allows_rule_creation(&repository(Some("typescript"))));
    assert!(policy.allows_rule_creation(&repository(Some("Rust"))));
    assert!(!policy.allows_rule_creation(&repository(Some("JavaScript"))));
}

#[test]
fn test_updatable_patterns() {
    assert!(DesiredPolicy::is_updatable_pattern("main"));
    assert!(DesiredPolicy::is_updatable_pattern("master"));
    assert!(!DesiredPolicy::is_updatable_pattern("release-1"));
    assert!(!DesiredPolicy::is_updatable_pattern("Main"));
    assert!(!DesiredPolicy::is_updatable_pattern("main*"));
}

#[test]
fn test_branch_protection_has_fixed_values() {
    let input = DesiredPolicy::default().branch_protection("master");

    assert_eq!(input.pattern, "master");
    assert!(input.requires_approving_reviews);
    assert_eq!(input.required_approving_review_count, 1);
    assert!(input.requires_code_owner_reviews);
    assert!(!input.restricts_review_dismissals);
    assert!(input.requires_status_checks);
    assert!(input.requires_strict_status_checks);
    assert_eq!(
        input.required_status_checks,
        vec![RequiredStatusCheckInput {
            app_id: "MDM6QXBwMTUzNjg=".to_string(),
            context: "test / test".to_string(),
        }]
    );
    assert!(input.requires_conversation_resolution);
    assert!(input.requires_linear_history);
    assert!(input.requires_commit_signatures);
    assert!(!input.is_admin_enforced);
    assert!(!input.restricts_pushes);
    assert!(!input.allows_deletions);
    assert!(!input.allows_force_pushes);
}

#[test]
fn test_branch_protection_uses_configured_status_check() {
    let policy = DesiredPolicy {
        required_status_check: StatusCheckPolicy {
            app_id: "APP_CUSTOM".to_string(),
            context: "ci / build".to_string(),
        },
        ..Default::default()
    };

    let input = policy.branch_protection("main");

    assert_eq!(input.required_status_checks[0].app_id, "APP_CUSTOM");
    assert_eq!(input.required_status_checks[0].context, "ci / build");
}

#[test]
fn test_private_repository_settings_enable_secret_scanning() {
    let repo = repository(None).with_private(true);

    let settings = DesiredPolicy::default().repository_settings(&repo);

    let security = settings
        .security_and_analysis
        .expect("Private repositories should request secret scanning");
    assert_eq!(
        security.secret_scanning.map(|s| s.status),
        Some(SecurityFeatureStatus::Enabled)
    );
}

#[test]
fn test_public_repository_settings_omit_security_and_analysis() {
    let settings = DesiredPolicy::default().repository_settings(&repository(None));

    assert!(settings.security_and_analysis.is_none());

    let body = serde_json::to_value(&settings).unwrap();
    assert!(body.get("security_and_analysis").is_none());
}

#[test]
fn test_repository_settings_payload() {
    let settings = DesiredPolicy::default().repository_settings(&repository(None).with_private(true));

    assert_eq!(
        serde_json::to_value(&settings).unwrap(),
        json!({
            "name": "test-repo",
            "has_issues": true,
            "has_projects": false,
            "has_wiki": false,
            "allow_squash_merge": true,
            "allow_merge_commit": false,
            "allow_rebase_merge": false,
            "allow_auto_merge": true,
            "delete_branch_on_merge": true,
            "security_and_analysis": { "secret_scanning": { "status": "enabled" } }
        })
    );
}

#[test]
fn test_policy_deserializes_partial_toml() {
    let policy: DesiredPolicy = toml::from_str(
        r#"
        creation_languages = ["javascript", "typescript"]
        "#,
    )
    .expect("Failed to parse policy");

    assert_eq!(policy.creation_languages, vec!["javascript", "typescript"]);
    assert_eq!(policy.required_status_check, StatusCheckPolicy::default());
}

#[test]
fn test_policy_deserializes_empty_toml_to_default() {
    let policy: DesiredPolicy = toml::from_str("").expect("Failed to parse policy");

    assert_eq!(policy, DesiredPolicy::default());
}

#[test]
fn test_status_check_keeps_default_app_when_only_context_given() {
    let policy: DesiredPolicy = toml::from_str(
        r#"
[required_status_check]
context = "ci / build"
"#,
    )
    .expect("Failed to parse policy");

    assert_eq!(policy.required_status_check.context, "ci / build");
    assert_eq!(policy.required_status_check.app_id, GITHUB_ACTIONS_APP_ID);
}
