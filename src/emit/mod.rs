//! Script and config emitters
//!
//! [`Generator`] ties both passes to a [`GeneratorConfig`](crate::GeneratorConfig):
//! the script pass writes one driver per drug into the script directory, and
//! the config pass writes one YAML file per parameter combination into the
//! config directory. Scripts reference configs by the same relative names.

pub mod base;
pub mod config;
pub mod script;

pub use base::BaseConfig;
pub use config::{config_paths, emit_configs, warn_missing_keys, CONFIG_PREFIX};
pub use script::{render_script, script_path, write_script, ScriptParams};

use crate::catalog::{Drug, COMBINATIONS};
use crate::config::GeneratorConfig;
use crate::fs::FileSystem;
use crate::naming::check_count;
use crate::prefix::AnalysisPrefix;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Files produced (or planned, on a dry run) by one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub scripts: Vec<PathBuf>,
    pub configs: Vec<PathBuf>,
    /// Parameter keys absent from the base config, appended to every file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_keys: Vec<String>,
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.scripts.len() + self.configs.len()
    }

    fn merge(&mut self, other: GenerationReport) {
        self.scripts.extend(other.scripts);
        self.configs.extend(other.configs);
        self.missing_keys.extend(other.missing_keys);
    }
}

/// What the script pass should produce
#[derive(Debug, Clone)]
pub struct ScriptRequest {
    pub drugs: Vec<Drug>,
    pub prefix: AnalysisPrefix,
    pub count: usize,
}

impl Default for ScriptRequest {
    /// Every drug, binary prefix, one entry per combination
    fn default() -> Self {
        Self {
            drugs: crate::catalog::DRUGS.to_vec(),
            prefix: AnalysisPrefix::Binary,
            count: COMBINATIONS.len(),
        }
    }
}

pub struct Generator<'a> {
    fs: &'a dyn FileSystem,
    config: &'a GeneratorConfig,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a GeneratorConfig) -> Self {
        Self {
            fs,
            config,
            dry_run: false,
        }
    }

    /// Plan only: compute every path but write nothing
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the script pass, then the config pass
    pub fn run(&self, scripts: &ScriptRequest) -> Result<GenerationReport> {
        let mut report = self.emit_scripts(scripts)?;
        report.merge(self.emit_configs()?);
        Ok(report)
    }

    pub fn emit_scripts(&self, request: &ScriptRequest) -> Result<GenerationReport> {
        check_count(request.count)?;

        let script_dir = self.config.script_dir_path();
        let mut scripts = Vec::with_capacity(request.drugs.len());

        for drug in &request.drugs {
            let path = script_path(&script_dir, drug);
            if !self.dry_run {
                let params = ScriptParams {
                    drug,
                    prefix: request.prefix,
                    count: request.count,
                    config_dir: &self.config.config_dir,
                    analysis_dir: &self.config.analysis_dir,
                };
                write_script(self.fs, &path, &params)?;
            }
            scripts.push(path);
        }

        info!(
            count = scripts.len(),
            prefix = %request.prefix,
            configs_per_script = request.count,
            dry_run = self.dry_run,
            "Script pass complete"
        );

        Ok(GenerationReport {
            scripts,
            dry_run: self.dry_run,
            ..Default::default()
        })
    }

    pub fn emit_configs(&self) -> Result<GenerationReport> {
        let base = BaseConfig::load(self.fs, &self.config.base_config_path())?;
        let config_dir = self.config.config_dir_path();

        let (configs, missing_keys) = if self.dry_run {
            check_count(COMBINATIONS.len())?;
            let missing = warn_missing_keys(&base);
            (config_paths(&config_dir, COMBINATIONS.len()), missing)
        } else {
            let written = emit_configs(self.fs, &base, &config_dir, &COMBINATIONS)?;
            (written, base.missing_parameter_keys())
        };

        info!(
            count = configs.len(),
            template = %base.source().display(),
            dry_run = self.dry_run,
            "Config pass complete"
        );

        Ok(GenerationReport {
            configs,
            missing_keys: missing_keys.into_iter().map(String::from).collect(),
            dry_run: self.dry_run,
            ..Default::default()
        })
    }
}
