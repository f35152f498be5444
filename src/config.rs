//! Runtime configuration
//!
//! Paths and startup selections are read from `CLUBCAL_*` environment
//! variables. Display preferences live in the store (see `Settings`).

use crate::error::{AppError, AppResult};
use log::info;
use std::env;
use std::path::PathBuf;

pub const ENV_DATABASE: &str = "CLUBCAL_DATABASE";
pub const ENV_STORAGE_DIR: &str = "CLUBCAL_STORAGE_DIR";
pub const ENV_PUBLIC_URL: &str = "CLUBCAL_PUBLIC_URL";
pub const ENV_YEAR: &str = "CLUBCAL_YEAR";
pub const ENV_CATEGORY: &str = "CLUBCAL_CATEGORY";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub storage_dir: PathBuf,
    pub public_base_url: String,
    /// Overrides the stored display year when set.
    pub year: Option<i32>,
    pub category: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let data_dir = default_data_dir();

        let database_path = non_empty_var(ENV_DATABASE)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("clubcal.db"));
        let storage_dir = non_empty_var(ENV_STORAGE_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("documents"));
        let public_base_url = non_empty_var(ENV_PUBLIC_URL)
            .unwrap_or_else(|| format!("file://{}", storage_dir.display()));

        let year = match non_empty_var(ENV_YEAR) {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| {
                AppError::config(format!("{} must be a year, got '{}'", ENV_YEAR, raw))
            })?),
            None => None,
        };

        let config = Self {
            database_path,
            storage_dir,
            public_base_url,
            year,
            category: non_empty_var(ENV_CATEGORY),
        };
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validates application configuration
///
/// # Returns
///
/// * `Ok(())` - configuration is usable
/// * `Err(AppError::Config)` - a path is empty or the year is out of range
///
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    info!("Validating configuration");

    if config.database_path.as_os_str().is_empty() {
        return Err(AppError::config("Database path cannot be empty"));
    }
    if config.storage_dir.as_os_str().is_empty() {
        return Err(AppError::config("Storage directory cannot be empty"));
    }
    if config.public_base_url.trim().is_empty() {
        return Err(AppError::config("Public URL cannot be empty"));
    }
    if let Some(year) = config.year {
        if !(1..=9999).contains(&year) {
            return Err(AppError::config(format!("Year {} is out of range", year)));
        }
    }

    Ok(())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clubcal")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [ENV_DATABASE, ENV_STORAGE_DIR, ENV_PUBLIC_URL, ENV_YEAR, ENV_CATEGORY] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = AppConfig::from_env().unwrap();
        assert!(config.database_path.ends_with("clubcal/clubcal.db"));
        assert!(config.storage_dir.ends_with("clubcal/documents"));
        assert!(config.public_base_url.starts_with("file://"));
        assert_eq!(config.year, None);
        assert_eq!(config.category, None);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var(ENV_DATABASE, "/tmp/club.db");
        env::set_var(ENV_PUBLIC_URL, "https://files.example.org/documents");
        env::set_var(ENV_YEAR, "2028");
        env::set_var(ENV_CATEGORY, "enduro");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/club.db"));
        assert_eq!(config.public_base_url, "https://files.example.org/documents");
        assert_eq!(config.year, Some(2028));
        assert_eq!(config.category.as_deref(), Some("enduro"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_bad_year_rejected() {
        clear_env();
        env::set_var(ENV_YEAR, "next");
        let result = AppConfig::from_env();
        assert!(matches!(result, Err(AppError::Config(_))));

        env::set_var(ENV_YEAR, "0");
        assert!(AppConfig::from_env().is_err());
        clear_env();
    }
}
