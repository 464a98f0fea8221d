use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database: String,

    /// Owning identity for every record. All queries are scoped to this
    /// value; it is passed explicitly into the logic layer, never read
    /// from a global.
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Currency symbol used for display and export.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_currency() -> String {
    "£".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            profile: default_profile(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shiftledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftledger")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftledger.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftledger.sqlite")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write the config file to disk.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database paths.
    ///
    /// `is_test` skips writing the config file so test runs never touch
    /// the user's real configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            profile: default_profile(),
            currency: default_currency(),
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    /// Sanity-check the loaded configuration; returns human-readable
    /// problems, empty when everything looks fine.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.database.trim().is_empty() {
            problems.push("`database` is empty".to_string());
        }
        if self.profile.trim().is_empty() {
            problems.push("`profile` is empty".to_string());
        }
        if self.currency.trim().is_empty() {
            problems.push("`currency` is empty".to_string());
        }
        problems
    }
}
