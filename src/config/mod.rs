use crate::core::streak::DEFAULT_PROGRESS_TARGET_DAYS;
use crate::errors::{AppError, AppResult};
use crate::utils::date::DEFAULT_DATE_FORMAT;
use crate::utils::path::{expand_tilde, is_absolute};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_progress_target")]
    pub progress_target_days: u32,
    #[serde(default = "default_show_quote")]
    pub show_quote: bool,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_progress_target() -> u32 {
    DEFAULT_PROGRESS_TARGET_DAYS
}
fn default_show_quote() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            date_format: default_date_format(),
            progress_target_days: default_progress_target(),
            show_quote: default_show_quote(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rstreak")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rstreak")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstreak.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rstreak.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("{}: {}", Self::config_file().display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Resolve a user-supplied database path: `~` is expanded and relative
    /// names land inside the configuration directory.
    pub fn resolve_db_path(custom: &str) -> PathBuf {
        if is_absolute(custom) || custom.starts_with("~/") {
            expand_tilde(custom)
        } else {
            Self::config_dir().join(custom)
        }
    }

    /// Initialize configuration directory, config file and database path.
    /// Returns the configuration that was (or, in test mode, would have been)
    /// written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save()?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(cfg.progress_target_days, 30);
        assert!(cfg.show_quote);
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config {
            database: "/data/streak.sqlite".into(),
            date_format: "%Y-%m-%d".into(),
            progress_target_days: 90,
            show_quote: false,
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn relative_db_paths_live_in_the_config_dir() {
        assert_eq!(
            Config::resolve_db_path("custom.sqlite"),
            Config::config_dir().join("custom.sqlite")
        );
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("database: [unclosed"),
            Err(AppError::Config(_))
        ));
    }
}
