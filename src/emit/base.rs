//! Base config template and per-combination overlay

use crate::catalog::{ParameterCombination, PARAMETER_KEYS};
use crate::error::GenerateError;
use crate::fs::FileSystem;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Forced on for every generated binary config
pub const BINARY_KEY: &str = "binary";
/// Forced off for every generated binary config
pub const ATU_ANALYSIS_KEY: &str = "atu_analysis";
/// Leftover template field dropped from generated configs
pub const MODEL_PREFIX_KEY: &str = "model_prefix";

/// The template mapping every generated config starts from.
///
/// The template itself is never mutated; [`BaseConfig::apply`] works on a
/// copy so no value set for one combination can reach the next.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConfig {
    template: Mapping,
    source: PathBuf,
}

impl BaseConfig {
    /// Reads and parses the template at `path`
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let text = fs
            .read_to_string(path)
            .with_context(|| format!("Failed to load base config {}", path.display()))?;
        Self::parse(&text, path)
    }

    /// Parses template text; `source` is only used for error messages
    pub fn parse(text: &str, source: &Path) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)
            .with_context(|| format!("Failed to parse base config {}", source.display()))?;

        let template = match value {
            Value::Mapping(mapping) => mapping,
            // A null document is an empty template
            Value::Null => Mapping::new(),
            _ => return Err(GenerateError::TemplateNotMapping(source.to_path_buf()).into()),
        };

        Ok(Self {
            template,
            source: source.to_path_buf(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn template(&self) -> &Mapping {
        &self.template
    }

    /// Parameter keys the template does not define; they are appended on apply
    pub fn missing_parameter_keys(&self) -> Vec<&'static str> {
        PARAMETER_KEYS
            .into_iter()
            .filter(|key| !self.template.contains_key(*key))
            .collect()
    }

    /// Builds the config for one combination.
    ///
    /// Existing keys keep their position; new keys are appended in the order
    /// they are set.
    pub fn apply(&self, combination: &ParameterCombination) -> Result<Mapping> {
        let mut config = self.template.clone();

        config.insert(Value::from(BINARY_KEY), Value::Bool(true));
        config.insert(Value::from(ATU_ANALYSIS_KEY), Value::Bool(false));
        config.shift_remove(MODEL_PREFIX_KEY);

        let params = serde_yaml::to_value(combination)
            .context("Failed to serialize parameter combination")?;
        if let Value::Mapping(params) = params {
            for (key, value) in params {
                config.insert(key, value);
            }
        }

        Ok(config)
    }

    /// Builds and serializes the config for one combination in block style
    pub fn render(&self, combination: &ParameterCombination) -> Result<String> {
        let config = self.apply(combination)?;
        serde_yaml::to_string(&config).context("Failed to serialize config to YAML")
    }
}
