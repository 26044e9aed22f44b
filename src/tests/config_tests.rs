//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    CommandMatching, ConfigLoader, LogConfig, ShellSettings, TrieShellConfig, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = TrieShellConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.shell.prompt, "trie> ");
    assert_eq!(config.shell.error_prefix, "Error! ");
    assert_eq!(config.shell.command_matching, CommandMatching::Exact);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = TrieShellConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.shell.max_name_length = Some(0);
    assert!(config.validate().is_err());

    config.shell.max_name_length = Some(16);
    config.shell.prompt = "two\nlines".to_string();
    assert!(config.validate().is_err());

    config.shell.prompt = "> ".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [shell]
    prompt = "> "
    command_matching = "first-letter"
    max_name_length = 12

    [log]
    level = "debug"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.shell.prompt, "> ");
    assert_eq!(config.shell.command_matching, CommandMatching::FirstLetter);
    assert_eq!(config.shell.max_name_length, Some(12));
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.shell.error_prefix, "Error! ");
    assert!(config.shell.show_prompt);
}

/// Test loading a JSON configuration.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "shell": { "show_prompt": false } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert!(!config.shell.show_prompt);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[shell]\nprompt = \"file> \"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__SHELL__PROMPT", "env>");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.shell.prompt, "env>");
    assert!(config.log.json);
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&str>, "TEST_NO_FILE").load().unwrap();
    assert_eq!(config, TrieShellConfig::default());
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[shell\nprompt = oops\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that values failing validation are rejected at load time.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_LEVEL");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test the error cases for the file path itself.
#[test]
fn test_missing_and_unsupported_files() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let unsupported = fixture.create_file("config.ini", "prompt=x").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_INI").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that the generated TOML loads back to the defaults.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = TrieShellConfig::default().to_toml().unwrap();
    assert!(toml.contains("[shell]"));
    assert!(toml.contains("[log]"));

    let path = fixture.create_file("generated.toml", toml).unwrap();
    let config = ConfigLoader::new(Some(&path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config, TrieShellConfig::default());
}

/// Test that validation fails for the individual sections.
#[test]
fn test_specific_validation_rules() {
    let mut shell = ShellSettings::default();
    shell.error_prefix = "bad\n".to_string();
    assert!(shell.validate().is_err());

    let log = LogConfig {
        level: String::new(),
        ..LogConfig::default()
    };
    assert!(log.validate().is_err());
}
