//! resistgen - config and driver-script generator for drug-resistance analyses
//!
//! The analysis pipeline runs four external programs per drug. This crate
//! prepares their inputs: one YAML config per analysis parameter
//! combination, and one shell driver per drug that loops the modelling steps
//! over those configs and then runs the univariate summary.
//!
//! # Example Usage
//!
//! ```no_run
//! use resistgen::{Generator, GeneratorConfig, RealFileSystem, ScriptRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GeneratorConfig::default();
//! config.validate()?;
//!
//! let fs = RealFileSystem::new();
//! let report = Generator::new(&fs, &config).run(&ScriptRequest::default())?;
//! println!("wrote {} files", report.total());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`catalog`]: the fixed drug and parameter-combination tables
//! - [`emit`]: script and config emitters
//! - [`fs`]: file system abstraction with a real and an in-memory backend
//! - [`cli`]: command-line arguments and output formatting

pub mod catalog;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod fs;
pub mod naming;
pub mod prefix;
pub mod util;

pub use catalog::{Drug, ParameterCombination, COMBINATIONS, DRUGS};
pub use config::{ConfigError, GeneratorConfig};
pub use emit::{BaseConfig, GenerationReport, Generator, ScriptRequest};
pub use error::GenerateError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use prefix::AnalysisPrefix;
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
