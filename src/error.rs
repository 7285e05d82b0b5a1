//! Domain errors raised while generating scripts and config files

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the emitters before any file is written
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Prefix is not one of the known analysis categories
    #[error("Invalid analysis prefix '{0}'. Valid options: binary, atu, mic")]
    InvalidPrefix(String),

    /// More indexed files requested than two-digit labels can address
    #[error("Config file count {count} exceeds the two-digit index limit of {max}")]
    CountOutOfRange { count: usize, max: usize },

    /// Drug query matched neither a name nor an abbreviation
    #[error("Unknown drug '{0}'. Use `resistgen list drugs` to see valid names")]
    UnknownDrug(String),

    /// Base config parsed, but its top level is not a key/value mapping
    #[error("Base config {0} must be a YAML mapping at the top level")]
    TemplateNotMapping(PathBuf),
}
