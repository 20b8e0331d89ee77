//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PC_CART_DATA_FILE` - Path of the persisted cart state file
//!   (default: `pc-cart-data.json`)
//! - `PC_CART_CATALOG` - Path of the product catalog file
//!   (default: `products.json`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_FILE: &str = "pc-cart-data.json";
const DEFAULT_CATALOG: &str = "products.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where cart, favorites, and snapshot state persists.
    pub data_file: PathBuf,
    /// The `products.json` catalog to price against.
    pub catalog_file: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a variable is set to an
    /// empty value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PC_CART_DATA_FILE").ok(),
            std::env::var("PC_CART_CATALOG").ok(),
        )
    }

    fn from_vars(
        data_file: Option<String>,
        catalog_file: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            data_file: path_var("PC_CART_DATA_FILE", DEFAULT_DATA_FILE, data_file)?,
            catalog_file: path_var("PC_CART_CATALOG", DEFAULT_CATALOG, catalog_file)?,
        })
    }
}

fn path_var(
    name: &str,
    default: &str,
    value: Option<String>,
) -> Result<PathBuf, ConfigError> {
    match value {
        None => Ok(PathBuf::from(default)),
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            "must not be empty".to_string(),
        )),
        Some(raw) => Ok(PathBuf::from(raw)),
    }
}
