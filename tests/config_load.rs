use mistral_ai::config::{normalize_address, parse_flag};
use mistral_ai::{ClientConfig, Config, MistralError, RequestOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_drops_unknown_request_options() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
credentials:
  api_key: secret
options:
  server_sent_events: true
  connection:
    request:
      timeout: 120
      open_timeout: 5
      proxy: http://ignored
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.credentials.api_key.as_deref(), Some("secret"));
    assert_eq!(config.options.server_sent_events, Some(true));
    assert_eq!(
        config.options.connection.request,
        RequestOptions {
            timeout: Some(120),
            open_timeout: Some(5),
            read_timeout: None,
            write_timeout: None,
        }
    );
}

#[test]
fn test_load_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"credentials": {"address": "http://localhost:8080"}, "options": {"connection": {"request": {"read_timeout": 30}}}}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.credentials.api_key, None);
    assert_eq!(config.options.connection.request.read_timeout, Some(30));

    let resolved = ClientConfig::new(config).unwrap();
    assert_eq!(resolved.address, "http://localhost:8080/");
    assert!(!resolved.server_sent_events);
}

#[test]
fn test_load_expands_env_references() {
    std::env::set_var("MISTRAL_AI_TEST_KEY", "from-env");

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(
        &path,
        "credentials:\n  api_key: ${MISTRAL_AI_TEST_KEY}\n  address: ${MISTRAL_AI_TEST_UNSET}\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.credentials.api_key.as_deref(), Some("from-env"));
    assert_eq!(
        config.credentials.address.as_deref(),
        Some("${MISTRAL_AI_TEST_UNSET}")
    );
}

#[test]
fn test_load_invalid_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse JSON config file"));
}

#[test]
fn test_client_config_defaults() {
    let resolved = ClientConfig::new(Config::new().api_key("k")).unwrap();
    assert_eq!(resolved.address, "https://api.mistral.ai/");
    assert!(!resolved.server_sent_events);
    assert_eq!(resolved.request_options, RequestOptions::default());
}

#[test]
fn test_client_config_requires_key_for_public_address() {
    let err = ClientConfig::new(Config::new().address("https://api.mistral.ai")).unwrap_err();
    assert!(matches!(err, MistralError::MissingCredential(_)));
}

#[test]
fn test_normalize_address() {
    assert_eq!(normalize_address("http://localhost:8080"), "http://localhost:8080/");
    assert_eq!(normalize_address("http://localhost:8080/"), "http://localhost:8080/");
    assert_eq!(normalize_address("http://host/api/"), "http://host/api/");
}

#[test]
fn test_parse_flag() {
    assert_eq!(parse_flag("true"), Some(true));
    assert_eq!(parse_flag("YES"), Some(true));
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_config_paths_prefer_local_files() {
    let paths = Config::get_config_paths();
    assert_eq!(paths[0].to_str(), Some(".mistral-ai.yaml"));
    assert!(paths.iter().any(|p| p.ends_with("mistral-ai/config.yaml")));
}

#[test]
fn test_env_overrides_win_over_file_values() {
    std::env::set_var("MISTRAL_API_KEY", "env-key");
    std::env::set_var("MISTRAL_ADDRESS", "http://127.0.0.1:9000/");
    std::env::set_var("MISTRAL_SSE", "yes");

    let config = Config::new()
        .api_key("file-key")
        .server_sent_events(false)
        .with_env_overrides();

    std::env::remove_var("MISTRAL_API_KEY");
    std::env::remove_var("MISTRAL_ADDRESS");
    std::env::remove_var("MISTRAL_SSE");

    assert_eq!(config.credentials.api_key.as_deref(), Some("env-key"));
    assert_eq!(
        config.credentials.address.as_deref(),
        Some("http://127.0.0.1:9000/")
    );
    assert_eq!(config.options.server_sent_events, Some(true));
}
