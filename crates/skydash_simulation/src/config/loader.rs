//! RON loader: SkydashConfig из файла или строки
//!
//! Любая ошибка загрузки сводится к `ConfigError`.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{ControllerTuning, WeaponConfig};

/// Ошибка загрузки / валидации конфига (симуляция не стартует с битым tuning)
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { file: String, message: String },
    Parse { file: String, message: String },
    Negative { field: &'static str, value: f32 },
    NonPositive { field: &'static str, value: f32 },
    NonFinite { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { file, message } => write!(f, "Failed to read {}: {}", file, message),
            ConfigError::Parse { file, message } => {
                write!(f, "Failed to parse {}: {}", file, message)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "'{}' must be non-negative (got {})", field, value)
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "'{}' must be positive (got {})", field, value)
            }
            ConfigError::NonFinite { field, value } => {
                write!(f, "'{}' must be finite (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Один RON документ: tuning + экипированное оружие
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkydashConfig {
    pub tuning: ControllerTuning,
    pub weapon: WeaponConfig,
}

impl SkydashConfig {
    /// Parse + validate (для тестов и встроенных конфигов)
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        parse_validated(source, "<inline>")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        self.weapon.validate()
    }
}

impl ControllerTuning {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let tuning: ControllerTuning = parse(source, "<inline>")?;
        tuning.validate()?;
        Ok(tuning)
    }
}

/// IMPLICIT_SOME: Option поля без `Some(..)` в файле
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn parse<T>(source: &str, file: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    ron_options()
        .from_str(source)
        .map_err(|e| ConfigError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
}

fn parse_validated(source: &str, file: &str) -> Result<SkydashConfig, ConfigError> {
    let config: SkydashConfig = parse(source, file)?;
    config.validate()?;
    Ok(config)
}

/// Загрузка конфига с диска (с валидацией)
pub fn load_config(path: &Path) -> Result<SkydashConfig, ConfigError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: file_name.clone(),
        message: e.to_string(),
    })?;

    let config = parse_validated(&contents, &file_name)?;
    crate::logger::log_info(&format!(
        "⚙️ Config loaded from {} (weapon: {})",
        file_name, config.weapon.name
    ));
    Ok(config)
}
