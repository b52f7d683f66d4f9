use crate::{
    constants::DEFAULT_TIER_ID,
    dimension::Dimension,
    error::{QuoteError, Result},
};
use std::{env, path::PathBuf};

const ENV_STORE_DIR: &str = "RUG_QUOTE_STORE_DIR";
const ENV_OUTPUT_DIR: &str = "RUG_QUOTE_OUTPUT_DIR";
const ENV_WIDTH: &str = "RUG_QUOTE_WIDTH";
const ENV_HEIGHT: &str = "RUG_QUOTE_HEIGHT";
const ENV_TIER: &str = "RUG_QUOTE_TIER";
const ENV_EXPORT: &str = "RUG_QUOTE_EXPORT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store_dir: PathBuf,
    pub output_dir: PathBuf,
    pub width: Dimension,
    pub height: Dimension,
    pub tier: String,
    pub export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("."),
            output_dir: PathBuf::from("csv"),
            width: Dimension::default(),
            height: Dimension::default(),
            tier: DEFAULT_TIER_ID.to_string(),
            export: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(dir) = get(ENV_STORE_DIR) {
            config.store_dir = directory(ENV_STORE_DIR, dir)?;
        }
        if let Some(dir) = get(ENV_OUTPUT_DIR) {
            config.output_dir = directory(ENV_OUTPUT_DIR, dir)?;
        }
        if let Some(value) = get(ENV_WIDTH) {
            config.width = dimension(ENV_WIDTH, &value)?;
        }
        if let Some(value) = get(ENV_HEIGHT) {
            config.height = dimension(ENV_HEIGHT, &value)?;
        }
        if let Some(tier) = get(ENV_TIER) {
            config.tier = tier;
        }
        if let Some(flag) = get(ENV_EXPORT) {
            config.export = matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        Ok(config)
    }
}

fn directory(key: &str, value: String) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    // If the path already exists but is not a directory, reject early.
    if path.exists() && !path.is_dir() {
        return Err(QuoteError::InvalidConfiguration(format!(
            "{key} is not a directory: {}",
            path.display()
        )));
    }
    Ok(path)
}

fn dimension(key: &str, value: &str) -> Result<Dimension> {
    let cm: u32 = value.parse().map_err(|_| {
        QuoteError::InvalidConfiguration(format!("{key} must be a number of cm, got '{value}'"))
    })?;
    Dimension::try_from(cm)
        .map_err(|e| QuoteError::InvalidConfiguration(format!("{key}: {e}")))
}
