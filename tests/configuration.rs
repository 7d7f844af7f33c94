//! Tests for configuration loading

use recipehub::Config;
use recipehub::config::LogFormat;
use temp_dir::TempDir;

mod helpers;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(Some("config/default.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.recommendation.recommended_limit, 8);
    assert_eq!(config.recommendation.popular_limit, 4);
    assert_eq!(config.recommendation.newest_limit, 4);
    assert_eq!(config.recommendation.favorite_food_limit, 4);
    assert_eq!(config.recommendation.scoring.image, 20);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert_eq!(config.recommendation.recommended_limit, 8);
    assert_eq!(config.observability.format().unwrap(), LogFormat::Pretty);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = helpers::write_file(
        &dir,
        "recipehub.toml",
        r#"
[recommendation]
popular_limit = 6

[recommendation.scoring]
image = 30
manual_bonus = 0

[observability]
log_format = "json"
"#,
    );

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert_eq!(config.recommendation.popular_limit, 6);
    assert_eq!(config.recommendation.newest_limit, 4);
    assert_eq!(config.recommendation.scoring.image, 30);
    assert_eq!(config.recommendation.scoring.manual_bonus, 0);
    assert_eq!(config.recommendation.scoring.title, 10);
    assert_eq!(config.observability.format().unwrap(), LogFormat::Json);
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = helpers::write_file(
        &dir,
        "recipehub.toml",
        "[recommendation]\nrecommended_limit = 0\n",
    );

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert!(config.validate().is_err());
}
