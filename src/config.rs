use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BUNDLED_SCHEMA: &str = include_str!("../amenable.schema.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_logging_filter() -> String {
    "warn".to_string()
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    #[default]
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LoggingFormat,
    /// Directory for rolling JSON log files; stderr only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub rotation: LoggingRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_logging_filter(),
            format: LoggingFormat::default(),
            dir: None,
            rotation: LoggingRotation::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_enabled_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&config_content, config_base)
            .with_context(|| format!("invalid config {}", config_path.display()))
    }

    /// Loads `config_path` when given, else `./amenable.jsonc` if present, else defaults.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load(path);
        }

        let fallback = PathBuf::from("amenable.jsonc");
        if fallback.exists() {
            return Self::load(&fallback);
        }
        Ok(Self::default())
    }

    pub fn parse(config_content: &str, config_base: &Path) -> Result<Self> {
        let config_value: Value =
            json5::from_str(config_content).context("failed to parse config as JSONC")?;

        let schema = load_schema(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;
        if let Some(dir) = config.logging.dir.take() {
            config.logging.dir = Some(if dir.is_absolute() {
                dir
            } else {
                config_base.join(dir)
            });
        }

        Ok(config)
    }
}

fn load_schema(config_base: &Path, config_value: &Value) -> Result<Value> {
    let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) else {
        return serde_json::from_str(BUNDLED_SCHEMA).context("bundled schema is not valid JSON");
    };

    let configured = PathBuf::from(path_text);
    let schema_path = if configured.is_absolute() {
        configured
    } else {
        config_base.join(configured)
    };
    let schema_content = fs::read_to_string(&schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))
}

fn validate_against_schema(config_value: &Value, schema: &Value) -> Result<()> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
