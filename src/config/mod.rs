use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::period::PeriodType,
    errors::FinanceError,
    utils::{
        paths::{app_data_dir, config_file_in, data_dir_in, ensure_dir},
        persistence::write_json_atomic,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Passed through to the display layer; formatting happens there.
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub default_period_type: PeriodType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub storage_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_period_type: PeriodType::Month,
            storage_dir: None,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, FinanceError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FinanceError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, FinanceError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            FinanceError::Config(format!("{} is not valid: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, config)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    /// Directory the JSON store should use under `config`.
    pub fn storage_dir(&self, config: &Config) -> PathBuf {
        config
            .storage_dir
            .clone()
            .unwrap_or_else(|| data_dir_in(&self.base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
        assert_eq!(manager.storage_dir(&Config::default()), temp.path().join("data"));
    }

    #[test]
    fn save_then_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            currency: "EUR".into(),
            default_period_type: PeriodType::Quarter,
            storage_dir: Some(temp.path().join("elsewhere")),
            ..Config::default()
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(manager.storage_dir(&loaded), temp.path().join("elsewhere"));
    }

    #[test]
    fn invalid_file_reports_config_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{\"locale\": 3}").unwrap();
        assert!(matches!(manager.load(), Err(FinanceError::Config(_))));
    }

    #[test]
    fn older_files_without_period_type_still_load() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"locale":"pt-PT","currency":"EUR"}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.default_period_type, PeriodType::Month);
        assert_eq!(loaded.locale, "pt-PT");
    }
}
