use super::*;
use repo_policy_core::StatusCheckPolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_app_config_default_uses_built_in_policy() {
    let config = AppConfig::default();

    assert_eq!(config.policy, DesiredPolicy::default());
    assert_eq!(config.policy.creation_languages, vec!["javascript"]);
}

#[test]
fn test_app_config_load_full_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("repo-policy.toml");

    fs::write(
        &config_path,
        r#"
[policy]
creation_languages = ["javascript", "typescript"]

[policy.required_status_check]
app_id = "APP_CUSTOM"
context = "ci / build"
"#,
    )
    .expect("Failed to write config");

    let config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(
        config.policy.creation_languages,
        vec!["javascript", "typescript"]
    );
    assert_eq!(
        config.policy.required_status_check,
        StatusCheckPolicy {
            app_id: "APP_CUSTOM".to_string(),
            context: "ci / build".to_string(),
        }
    );
}

#[test]
fn test_app_config_load_empty_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "").expect("Failed to write config");

    let config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_app_config_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid_config.toml");

    // Write invalid TOML content
    fs::write(&config_path, "invalid = toml = syntax").expect("Failed to write invalid TOML");

    let result = AppConfig::load(&config_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Failed to parse configuration file"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_load_nonexistent_file() {
    let nonexistent_path = PathBuf::from("nonexistent_config.toml");
    let result = AppConfig::load(&nonexistent_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Configuration file not found"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_resolve_explicit_missing_path_is_error() {
    let result = AppConfig::resolve(Some(Path::new("does/not/exist.toml")));

    assert!(matches!(result, Err(Error::Config(_))));
}
