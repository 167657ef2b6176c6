use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_position")]
    pub default_position: String,
    #[serde(default = "default_salary")]
    pub default_salary: f64,
    #[serde(default = "default_hours")]
    pub default_hours: f64,
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_position() -> String {
    "Employee".to_string()
}
fn default_salary() -> f64 {
    100_000.0
}
fn default_hours() -> f64 {
    8.0
}
fn default_projects() -> Vec<String> {
    [
        "Company website",
        "Mobile app",
        "Database",
        "Analytics",
        "Testing",
        "Administration",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}
fn default_chart_width() -> usize {
    40
}
fn default_currency() -> String {
    "RUB".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            default_position: default_position(),
            default_salary: default_salary(),
            default_hours: default_hours(),
            projects: default_projects(),
            chart_width: default_chart_width(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstaffhours")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rstaffhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstaffhours.conf")
    }

    /// Return the default path of the employees file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("employees.csv")
    }

    /// Employees file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Keys of a full configuration that are absent from the YAML file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let present: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let full = serde_yaml::to_value(Self::default())
            .map_err(|e| AppError::Config(e.to_string()))?;

        let mut missing = Vec::new();
        if let Some(map) = full.as_mapping() {
            for key in map.keys() {
                let found = present.as_mapping().is_some_and(|m| m.contains_key(key));
                if !found && let Some(k) = key.as_str() {
                    missing.push(k.to_string());
                }
            }
        }

        Ok(missing)
    }

    /// Initialize the configuration file, keeping any existing settings.
    ///
    /// In test mode the configuration file is neither read nor written.
    pub fn init_all(custom_data: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(p) = custom_data {
            config.data_file = expand_tilde(p).to_string_lossy().to_string();
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
