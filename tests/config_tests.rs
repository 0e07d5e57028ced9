use rentalboost_chatbot::config::{Config, ConfigError, DEFAULT_BASE_URL, DEFAULT_PORT};
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn missing_api_key_is_fatal() {
    assert!(matches!(load(&[]), Err(ConfigError::MissingApiKey)));
    assert!(matches!(
        load(&[("OPENAI_API_KEY", "   ")]),
        Err(ConfigError::MissingApiKey)
    ));
}

#[test]
fn defaults_apply() {
    let config = load(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 5000);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn port_and_base_url_overrides() {
    let config = load(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("PORT", "8080"),
        ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
    ])
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.base_url, "http://localhost:9000/v1");
}

#[test]
fn invalid_port_is_rejected() {
    let err = load(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));

    let err = load(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "70000")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn debug_output_hides_api_key() {
    let config = load(&[("OPENAI_API_KEY", "sk-very-secret")]).unwrap();
    let printed = format!("{config:?}");
    assert!(!printed.contains("sk-very-secret"));
    assert!(printed.contains("redacted"));
}
