use crate::errors::{OmikujiError, OmikujiResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub history_capacity: usize,
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: 5,
            data_dir: None,
            log_level: "info".to_string(),
            tick_rate_ms: 100,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> OmikujiResult<()> {
    let config_path = get_config_path()?;
    let config = load_or_create(&config_path)?;
    *CONFIG.write().unwrap() = config;
    Ok(())
}

fn load_or_create(config_path: &Path) -> OmikujiResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| OmikujiError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| OmikujiError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        return Ok(config);
    }

    let config = Config::default();

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            OmikujiError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)
        .map_err(|e| OmikujiError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(config_path, config_str)
        .map_err(|e| OmikujiError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

fn get_config_path() -> OmikujiResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| OmikujiError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("omikuji").join("config.json"))
}

fn validate_config(config: &Config) -> OmikujiResult<()> {
    if config.history_capacity == 0 {
        return Err(OmikujiError::config_error(
            "history_capacity must be at least 1",
        ));
    }

    if config.tick_rate_ms == 0 {
        return Err(OmikujiError::config_error("tick_rate_ms must be at least 1"));
    }

    if config.log_level.is_empty() {
        return Err(OmikujiError::config_error("log_level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}
