use crate::errors::{AppError, AppResult};
use crate::repository::{DEFAULT_EXPORT_FILE, DEFAULT_TABLE};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (used by tests and portable setups).
pub const CONFIG_DIR_ENV: &str = "BOOKHOLDER_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "bookholder.conf";
const DATABASE_FILE_NAME: &str = "library.sqlite3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}
fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            table: default_table(),
            export_file: default_export_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$BOOKHOLDER_CONFIG_DIR` when set,
    /// otherwise `~/.bookholder`.
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bookholder")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE_NAME)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|err| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), err))
        })
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|err| AppError::Config(format!("failed to serialize configuration: {err}")))
    }

    /// Write the configuration file (creating its directory).
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }

    /// Build the configuration written by `init`.
    ///
    /// A relative custom database name is placed inside the config directory.
    pub fn for_init(custom_db: Option<&str>) -> Self {
        let database = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => Self::config_dir().join(name),
            None => Self::database_file(),
        };

        Self {
            database: database.to_string_lossy().to_string(),
            ..Self::default()
        }
    }
}
