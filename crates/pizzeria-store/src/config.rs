//! # Store Configuration
//!
//! Where the three record files live.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PIZZERIA_DATA_DIR=/srv/pizzeria                                    │
//! │     PIZZERIA_PIZZA_FILE / PIZZERIA_DRINK_FILE / PIZZERIA_ORDER_FILE    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pizzeria/pizzeria.toml (Linux)                           │
//! │     ~/Library/Application Support/com.pizzeria.orders/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     platform data dir (or ./data), pizzas.txt, drinks.txt, orders.txt  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pizzeria.toml
//! data_dir = "/srv/pizzeria"
//!
//! [files]
//! pizzas = "pizzas.txt"
//! drinks = "drinks.txt"
//! orders = "orders.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

pub const DATA_DIR_ENV: &str = "PIZZERIA_DATA_DIR";
pub const PIZZA_FILE_ENV: &str = "PIZZERIA_PIZZA_FILE";
pub const DRINK_FILE_ENV: &str = "PIZZERIA_DRINK_FILE";
pub const ORDER_FILE_ENV: &str = "PIZZERIA_ORDER_FILE";

const CONFIG_FILE_NAME: &str = "pizzeria.toml";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "pizzeria", "orders")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

// =============================================================================
// File Names
// =============================================================================

/// File names inside the data directory, one per record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNames {
    #[serde(default = "default_pizza_file")]
    pub pizzas: String,

    #[serde(default = "default_drink_file")]
    pub drinks: String,

    #[serde(default = "default_order_file")]
    pub orders: String,
}

fn default_pizza_file() -> String {
    "pizzas.txt".to_string()
}

fn default_drink_file() -> String {
    "drinks.txt".to_string()
}

fn default_order_file() -> String {
    "orders.txt".to_string()
}

impl Default for FileNames {
    fn default() -> Self {
        FileNames {
            pizzas: default_pizza_file(),
            drinks: default_drink_file(),
            orders: default_order_file(),
        }
    }
}

// =============================================================================
// Store Config
// =============================================================================

/// Complete store configuration.
///
/// ## Example
/// ```rust
/// use pizzeria_store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/pizzeria").order_file("history.txt");
/// assert!(config.order_path().ends_with("history.txt"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the record files. Created on open.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub files: FileNames,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: default_data_dir(),
            files: FileNames::default(),
        }
    }
}

impl StoreConfig {
    /// Default file names inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            files: FileNames::default(),
        }
    }

    pub fn pizza_file(mut self, name: impl Into<String>) -> Self {
        self.files.pizzas = name.into();
        self
    }

    pub fn drink_file(mut self, name: impl Into<String>) -> Self {
        self.files.drinks = name.into();
        self
    }

    pub fn order_file(mut self, name: impl Into<String>) -> Self {
        self.files.orders = name.into();
        self
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pizzeria.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents =
                    std::fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StoreError::io(&path, e))?;

        info!(?path, "Store config saved");
        Ok(())
    }

    /// Checks that the three files are distinct plain names.
    pub fn validate(&self) -> StoreResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig("data_dir must not be empty".into()));
        }

        let names = [
            ("pizzas", &self.files.pizzas),
            ("drinks", &self.files.drinks),
            ("orders", &self.files.orders),
        ];

        for (kind, name) in names {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidConfig(format!(
                    "{} file name must not be empty",
                    kind
                )));
            }
            if name.contains(['/', '\\']) {
                return Err(StoreError::InvalidConfig(format!(
                    "{} file name must not contain a path separator, got: {}",
                    kind, name
                )));
            }
        }

        if names[0].1 == names[1].1 || names[0].1 == names[2].1 || names[1].1 == names[2].1 {
            return Err(StoreError::InvalidConfig(
                "pizza, drink and order files must be different".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup(PIZZA_FILE_ENV) {
            self.files.pizzas = name;
        }

        if let Some(name) = lookup(DRINK_FILE_ENV) {
            self.files.drinks = name;
        }

        if let Some(name) = lookup(ORDER_FILE_ENV) {
            self.files.orders = name;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Paths
    // =========================================================================

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn pizza_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.pizzas)
    }

    pub fn drink_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.drinks)
    }

    pub fn order_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_names() {
        let config = StoreConfig::new("data");
        assert_eq!(config.pizza_path(), PathBuf::from("data/pizzas.txt"));
        assert_eq!(config.drink_path(), PathBuf::from("data/drinks.txt"));
        assert_eq!(config.order_path(), PathBuf::from("data/orders.txt"));
    }

    #[test]
    fn test_config_validation() {
        assert!(StoreConfig::new("data").validate().is_ok());

        // Empty name should fail
        assert!(StoreConfig::new("data").pizza_file("").validate().is_err());

        // Path separators should fail
        assert!(StoreConfig::new("data")
            .drink_file("../drinks.txt")
            .validate()
            .is_err());

        // Two kinds sharing a file should fail
        assert!(StoreConfig::new("data")
            .order_file("pizzas.txt")
            .validate()
            .is_err());

        assert!(StoreConfig::new("").validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (DATA_DIR_ENV, "/srv/pizzeria"),
            (ORDER_FILE_ENV, "history.txt"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::new("data");
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir(), Path::new("/srv/pizzeria"));
        assert_eq!(config.files.orders, "history.txt");
        assert_eq!(config.files.pizzas, "pizzas.txt");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str(
            r#"
            data_dir = "/srv/pizzeria"

            [files]
            orders = "history.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.order_path(), PathBuf::from("/srv/pizzeria/history.txt"));
        assert_eq!(config.files.drinks, "drinks.txt");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf").join(CONFIG_FILE_NAME);
        let config = StoreConfig::new(dir.path().join("records")).pizza_file("menu.txt");

        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[files]"));

        let loaded: StoreConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bad_toml_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(
            StoreConfig::load(Some(path.clone())),
            Err(StoreError::ConfigLoadFailed(_))
        ));

        // Falls back to defaults
        let config = StoreConfig::load_or_default(Some(path));
        assert_eq!(config.files, FileNames::default());
    }
}
