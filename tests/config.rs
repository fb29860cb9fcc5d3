use std::path::PathBuf;
use folder2rss::cli::Args;
use folder2rss::config::{Config, ConfigError, ConfigLayer};

fn env(vars: &[(&str, &str)]) -> ConfigLayer {
    ConfigLayer::from_env_vars(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, ConfigLayer::default(), &Args::default()).unwrap();
    assert_eq!(config.scheme, "http");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8000);
    assert_eq!(config.directory, PathBuf::from("podcasts"));
    assert_eq!(config.subfolder, "");
    assert_eq!(config.loglevel, "INFO");
}

#[test]
fn test_file_overrides_default() {
    let file = ConfigLayer { port: Some(7777), ..Default::default() };
    let config = Config::resolve(Some(file), ConfigLayer::default(), &Args::default()).unwrap();
    assert_eq!(config.port, 7777);
}

#[test]
fn test_env_overrides_file() {
    let file = ConfigLayer {
        port: Some(7777),
        host: Some("file.example".to_string()),
        ..Default::default()
    };
    let config = Config::resolve(Some(file), env(&[("RSS_SERVER_PORT", "9000")]), &Args::default())
        .unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "file.example"); // untouched by env
}

#[test]
fn test_cli_overrides_env() {
    let args = Args { port: Some(9100), ..Default::default() };
    let config = Config::resolve(None, env(&[("RSS_SERVER_PORT", "9000")]), &args).unwrap();
    assert_eq!(config.port, 9100);
}

#[test]
fn test_env_keys_are_case_insensitive_after_prefix() {
    let layer = env(&[("RSS_SERVER_SubFolder", "feeds"), ("RSS_SERVER_HOST", "example.com")]);
    assert_eq!(layer.subfolder.as_deref(), Some("feeds"));
    assert_eq!(layer.host.as_deref(), Some("example.com"));
}

#[test]
fn test_env_ignores_unprefixed_and_unknown_keys() {
    let layer = env(&[("PORT", "1"), ("RSS_SERVER_COLOR", "blue"), ("HOME", "/root")]);
    assert!(layer.port.is_none());
    assert!(layer.host.is_none());
}

#[test]
fn test_env_invalid_port_is_an_error() {
    let result = ConfigLayer::from_env_vars(vec![(
        "RSS_SERVER_PORT".to_string(),
        "eighty".to_string(),
    )]);
    assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
}

#[test]
fn test_subfolder_slashes_are_trimmed() {
    let args = Args { subfolder: Some("/feeds/private/".to_string()), ..Default::default() };
    let config = Config::resolve(None, ConfigLayer::default(), &args).unwrap();
    assert_eq!(config.subfolder, "feeds/private");
}

#[test]
fn test_unsupported_scheme_rejected() {
    let args = Args { scheme: Some("ftp".to_string()), ..Default::default() };
    let result = Config::resolve(None, ConfigLayer::default(), &args);
    assert!(matches!(result, Err(ConfigError::UnsupportedScheme(_))));
}

#[test]
fn test_log_directive_is_lowercase() {
    let config = Config::resolve(None, env(&[("RSS_SERVER_LOGLEVEL", "DEBUG")]), &Args::default())
        .unwrap();
    assert_eq!(config.log_directive(), "debug");
}

#[test]
fn test_toml_parse() {
    let toml_str = "port = 9000\nhost = \"example.com\"\nsubfolder = \"feeds\"\n";
    let parsed: ConfigLayer = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.port, Some(9000));
    assert_eq!(parsed.host.as_deref(), Some("example.com"));
    assert_eq!(parsed.subfolder.as_deref(), Some("feeds"));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<ConfigLayer, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}
