use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the three city CSV files.
    pub data_dir: String,

    #[serde(default = "default_chicago_file")]
    pub chicago_file: String,
    #[serde(default = "default_new_york_city_file")]
    pub new_york_city_file: String,
    #[serde(default = "default_washington_file")]
    pub washington_file: String,
}

fn default_chicago_file() -> String {
    "chicago.csv".to_string()
}
fn default_new_york_city_file() -> String {
    "new_york_city.csv".to_string()
}
fn default_washington_file() -> String {
    "washington.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            chicago_file: default_chicago_file(),
            new_york_city_file: default_new_york_city_file(),
            washington_file: default_washington_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikestats")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".bikestats")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikestats.conf")
    }

    fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Full path of the CSV file for a city.
    pub fn path_for(&self, city: City) -> PathBuf {
        let file = match city {
            City::Chicago => &self.chicago_file,
            City::NewYorkCity => &self.new_york_city_file,
            City::Washington => &self.washington_file,
        };
        PathBuf::from(&self.data_dir).join(file)
    }
}
