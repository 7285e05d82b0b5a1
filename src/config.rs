//! Configuration management for resistgen
//!
//! Settings load from environment variables with sensible defaults;
//! command-line flags override both.
//!
//! # Environment Variables
//!
//! - `RESISTGEN_ROOT`: directory all other paths resolve against - default: "."
//! - `RESISTGEN_BASE_CONFIG`: base config template - default: "config.yaml"
//! - `RESISTGEN_CONFIG_DIR`: where numbered configs are written - default: "config_files"
//! - `RESISTGEN_SCRIPT_DIR`: where driver scripts are written - default: "bash_scripts"
//! - `RESISTGEN_ANALYSIS_DIR`: analysis output directory passed to the summary step -
//!   default: "/home/ec2-user/who-mutation-catalogue"
//! - `RESISTGEN_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use resistgen::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config.config_dir_path().display());
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_ROOT: &str = ".";
const DEFAULT_BASE_CONFIG: &str = "config.yaml";
const DEFAULT_CONFIG_DIR: &str = "config_files";
const DEFAULT_SCRIPT_DIR: &str = "bash_scripts";
const DEFAULT_ANALYSIS_DIR: &str = "/home/ec2-user/who-mutation-catalogue";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Where inputs are read from and outputs written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory the relative paths below resolve against
    pub root: PathBuf,

    /// Base config template
    pub base_config: PathBuf,

    /// Config output directory. Also written verbatim into scripts, so it
    /// must stay relative to the directory the scripts run from.
    pub config_dir: String,

    /// Script output directory. Never created by the generator.
    pub script_dir: String,

    /// Analysis output directory handed to the summary step
    pub analysis_dir: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneratorConfig {
    /// Loads from `RESISTGEN_*` environment variables, falling back to defaults
    fn default() -> Self {
        let defaults = Self::with_defaults();

        Self {
            root: env::var("RESISTGEN_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.root),
            base_config: env::var("RESISTGEN_BASE_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(defaults.base_config),
            config_dir: env::var("RESISTGEN_CONFIG_DIR").unwrap_or(defaults.config_dir),
            script_dir: env::var("RESISTGEN_SCRIPT_DIR").unwrap_or(defaults.script_dir),
            analysis_dir: env::var("RESISTGEN_ANALYSIS_DIR").unwrap_or(defaults.analysis_dir),
            log_level: env::var("RESISTGEN_LOG_LEVEL")
                .unwrap_or(defaults.log_level)
                .to_lowercase(),
        }
    }
}

impl GeneratorConfig {
    /// Built-in defaults, ignoring the environment
    pub fn with_defaults() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            base_config: PathBuf::from(DEFAULT_BASE_CONFIG),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            script_dir: DEFAULT_SCRIPT_DIR.to_string(),
            analysis_dir: DEFAULT_ANALYSIS_DIR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a directory is empty, if the config directory
    /// is absolute or contains a single quote, if the analysis directory
    /// contains a double quote, or if the log level is unknown. Quotes would
    /// break the generated shell scripts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_dir.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Config directory cannot be empty".to_string(),
            ));
        }
        if Path::new(&self.config_dir).is_absolute() {
            return Err(ConfigError::ValidationFailed(format!(
                "Config directory must be relative, got {}",
                self.config_dir
            )));
        }
        if self.config_dir.contains('\'') {
            return Err(ConfigError::ValidationFailed(
                "Config directory cannot contain single quotes".to_string(),
            ));
        }

        if self.script_dir.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Script directory cannot be empty".to_string(),
            ));
        }

        if self.analysis_dir.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Analysis directory cannot be empty".to_string(),
            ));
        }
        if self.analysis_dir.contains('"') {
            return Err(ConfigError::ValidationFailed(
                "Analysis directory cannot contain double quotes".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn base_config_path(&self) -> PathBuf {
        self.root.join(&self.base_config)
    }

    pub fn config_dir_path(&self) -> PathBuf {
        self.root.join(&self.config_dir)
    }

    pub fn script_dir_path(&self) -> PathBuf {
        self.root.join(&self.script_dir)
    }

    /// Converts configuration to a display map for output formatting
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();

        map.insert("root".to_string(), self.root.display().to_string());
        map.insert(
            "base_config".to_string(),
            self.base_config_path().display().to_string(),
        );
        map.insert(
            "config_dir".to_string(),
            self.config_dir_path().display().to_string(),
        );
        map.insert(
            "script_dir".to_string(),
            self.script_dir_path().display().to_string(),
        );
        map.insert("analysis_dir".to_string(), self.analysis_dir.clone());
        map.insert("log_level".to_string(), self.log_level.clone());

        map
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resistgen Configuration:")?;
        writeln!(f, "  Root: {}", self.root.display())?;
        writeln!(f, "  Base Config: {}", self.base_config_path().display())?;
        writeln!(f, "  Config Dir: {}", self.config_dir_path().display())?;
        writeln!(f, "  Script Dir: {}", self.script_dir_path().display())?;
        writeln!(f, "  Analysis Dir: {}", self.analysis_dir)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    const VARS: [&str; 6] = [
        "RESISTGEN_ROOT",
        "RESISTGEN_BASE_CONFIG",
        "RESISTGEN_CONFIG_DIR",
        "RESISTGEN_SCRIPT_DIR",
        "RESISTGEN_ANALYSIS_DIR",
        "RESISTGEN_LOG_LEVEL",
    ];

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards: Vec<_> = VARS.iter().map(|k| EnvGuard::unset(k)).collect();

        let config = GeneratorConfig::default();

        assert_eq!(config, GeneratorConfig::with_defaults());
        assert_eq!(config.config_dir, DEFAULT_CONFIG_DIR);
        assert_eq!(config.analysis_dir, DEFAULT_ANALYSIS_DIR);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("RESISTGEN_ROOT", "/work"),
            EnvGuard::set("RESISTGEN_BASE_CONFIG", "templates/base.yaml"),
            EnvGuard::set("RESISTGEN_CONFIG_DIR", "configs"),
            EnvGuard::set("RESISTGEN_SCRIPT_DIR", "scripts"),
            EnvGuard::set("RESISTGEN_ANALYSIS_DIR", "/mnt/catalogue"),
            EnvGuard::set("RESISTGEN_LOG_LEVEL", "DEBUG"),
        ];

        let config = GeneratorConfig::default();

        assert_eq!(config.root, PathBuf::from("/work"));
        assert_eq!(
            config.base_config_path(),
            PathBuf::from("/work/templates/base.yaml")
        );
        assert_eq!(config.config_dir_path(), PathBuf::from("/work/configs"));
        assert_eq!(config.script_dir_path(), PathBuf::from("/work/scripts"));
        assert_eq!(config.analysis_dir, "/mnt/catalogue");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_validation_rejects_absolute_config_dir() {
        let config = GeneratorConfig {
            config_dir: "/abs/config_files".to_string(),
            ..GeneratorConfig::with_defaults()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_quotes() {
        let config = GeneratorConfig {
            config_dir: "it's".to_string(),
            ..GeneratorConfig::with_defaults()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            analysis_dir: "/a\"b".to_string(),
            ..GeneratorConfig::with_defaults()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_dirs() {
        for config in [
            GeneratorConfig {
                config_dir: " ".to_string(),
                ..GeneratorConfig::with_defaults()
            },
            GeneratorConfig {
                script_dir: String::new(),
                ..GeneratorConfig::with_defaults()
            },
            GeneratorConfig {
                analysis_dir: String::new(),
                ..GeneratorConfig::with_defaults()
            },
        ] {
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = GeneratorConfig::with_defaults();
        config.log_level = "loud".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level: loud"));
    }

    #[test]
    fn test_absolute_base_config_ignores_root() {
        let config = GeneratorConfig {
            root: PathBuf::from("/work"),
            base_config: PathBuf::from("/etc/base.yaml"),
            ..GeneratorConfig::with_defaults()
        };
        assert_eq!(config.base_config_path(), PathBuf::from("/etc/base.yaml"));
    }

    #[test]
    fn test_display_map_keys() {
        let map = GeneratorConfig::with_defaults().to_display_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "analysis_dir",
                "base_config",
                "config_dir",
                "log_level",
                "root",
                "script_dir"
            ]
        );
    }

    #[test]
    fn test_config_display() {
        let display = format!("{}", GeneratorConfig::with_defaults());
        assert!(display.contains("Resistgen Configuration:"));
        assert!(display.contains("Analysis Dir: /home/ec2-user/who-mutation-catalogue"));
    }
}
