use super::*;
use serde_json::json;

#[test]
fn test_repository_descriptor_new_defaults() {
    let repo = RepositoryDescriptor::new("test-owner", "test-repo", "R_kgDOTest");

    assert_eq!(repo.owner(), "test-owner");
    assert_eq!(repo.name(), "test-repo");
    assert_eq!(repo.node_id(), "R_kgDOTest");
    assert_eq!(repo.full_name(), "test-owner/test-repo");
    assert_eq!(repo.language(), None);
    assert!(!repo.is_archived());
    assert!(!repo.is_fork());
    assert!(!repo.is_private());
}

#[test]
fn test_repository_descriptor_builders() {
    let repo = RepositoryDescriptor::new("o", "r", "id")
        .with_language(Some("Rust"))
        .with_archived(true)
        .with_fork(true)
        .with_private(true);

    assert_eq!(repo.language(), Some("Rust"));
    assert!(repo.is_archived());
    assert!(repo.is_fork());
    assert!(repo.is_private());
}

#[test]
fn test_normalized_language_is_lower_case() {
    let repo = RepositoryDescriptor::new("o", "r", "id").with_language(Some("JavaScript"));

    assert_eq!(repo.normalized_language().as_deref(), Some("javascript"));
}

#[test]
fn test_normalized_language_none_when_not_detected() {
    let repo = RepositoryDescriptor::new("o", "r", "id");

    assert_eq!(repo.normalized_language(), None);
}

#[test]
fn test_repository_descriptor_deserializes_rest_schema() {
    let value = json!({
        "id": 123456,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjM0NTY=",
        "name": "test-repo",
        "full_name": "test-owner/test-repo",
        "owner": {
            "login": "test-owner",
            "id": 78910,
            "type": "Organization"
        },
        "private": true,
        "fork": false,
        "archived": false,
        "language": "TypeScript",
        "default_branch": "main"
    });

    let repo: RepositoryDescriptor =
        serde_json::from_value(value).expect("Failed to deserialize repository");

    assert_eq!(repo.owner(), "test-owner");
    assert_eq!(repo.name(), "test-repo");
    assert_eq!(repo.node_id(), "MDEwOlJlcG9zaXRvcnkxMjM0NTY=");
    assert_eq!(repo.language(), Some("TypeScript"));
    assert!(repo.is_private());
    assert!(!repo.is_fork());
    assert!(!repo.is_archived());
}

#[test]
fn test_repository_descriptor_deserializes_null_language_and_missing_flags() {
    let value = json!({
        "node_id": "R_kgDOTest",
        "name": "docs",
        "owner": { "login": "test-owner" },
        "language": null
    });

    let repo: RepositoryDescriptor =
        serde_json::from_value(value).expect("Failed to deserialize repository");

    assert_eq!(repo.language(), None);
    assert!(!repo.is_private());
    assert!(!repo.is_fork());
    assert!(!repo.is_archived());
}
