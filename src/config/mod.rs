use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::errors::ForecastError;

const DEFAULT_DIR_NAME: &str = ".forecast_core";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "FORECAST_CORE_HOME";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for forecast output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub horizon_months: i32,
    pub top_categories: usize,
    pub currency: String,
    pub locale: String,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_months: 6,
            top_categories: crate::forecast::DEFAULT_TOP_CATEGORIES,
            currency: "BRL".into(),
            locale: "pt-BR".into(),
        }
    }
}

/// Loads and saves [`ForecastConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager for `config.json` in the application data directory.
    pub fn from_env() -> Self {
        Self::new(app_data_dir().join(CONFIG_FILE))
    }

    pub fn load(&self) -> Result<ForecastConfig, ForecastError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(ForecastConfig::default())
        }
    }

    pub fn save(&self, config: &ForecastConfig) -> Result<(), ForecastError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Returns the application data directory, defaulting to `~/.forecast_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
