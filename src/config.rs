use std::env;
use std::str::FromStr;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use recipehub_recommendation::RecommendationConfig;
use serde::Deserialize;
use strum::{Display, EnumString, VariantArray};

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` for terminals, `json` for log shippers
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl ObservabilityConfig {
    pub fn format(&self) -> Result<LogFormat, AppError> {
        LogFormat::from_str(self.log_format.trim()).map_err(|_| {
            let known: Vec<String> = LogFormat::VARIANTS.iter().map(LogFormat::to_string).collect();
            AppError::ValidationError(format!(
                "Unknown log format '{}', expected one of: {}",
                self.log_format,
                known.join(", ")
            ))
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    LogFormat::Pretty.to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (RECIPEHUB__RECOMMENDATION__POPULAR_LIMIT, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let defaults = RecommendationConfig::default();

        let limits = [
            ("recommended_limit", defaults.recommended_limit),
            ("popular_limit", defaults.popular_limit),
            ("newest_limit", defaults.newest_limit),
            ("favorite_food_limit", defaults.favorite_food_limit),
        ];

        let mut builder = ConfigBuilder::builder();
        for (key, value) in limits {
            builder = builder.set_default(format!("recommendation.{key}"), value as u64)?;
        }

        builder = builder
            .set_default("recommendation.placeholder_image", defaults.placeholder_image)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.log_format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, a missing one leaves the defaults in place
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RECIPEHUB")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.recommendation.recommended_limit == 0 {
            return Err(AppError::ValidationError(
                "recommendation.recommended_limit must be at least 1".to_string(),
            ));
        }
        if self.recommendation.placeholder_image.trim().is_empty() {
            return Err(AppError::ValidationError(
                "recommendation.placeholder_image must not be empty".to_string(),
            ));
        }
        self.observability.format()?;

        Ok(())
    }
}
