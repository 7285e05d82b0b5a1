//! Per-drug shell script driver
//!
//! Each script declares the drug, lists the config files to run, loops the
//! three modelling steps over every config, then runs the univariate stats
//! step once for the whole prefix.

use crate::catalog::Drug;
use crate::fs::FileSystem;
use crate::naming::{check_count, config_file_name};
use crate::prefix::AnalysisPrefix;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Steps run once per config file, in order
pub const MODEL_STEPS: [&str; 3] = [
    "01_make_model_inputs.py",
    "02_regression_with_bootstrap.py",
    "03_model_analysis.py",
];

/// Step run once per drug after all configs
pub const SUMMARY_STEP: &str = "04_compute_univariate_stats.py";

/// Inputs for one drug's script
#[derive(Debug, Clone)]
pub struct ScriptParams<'a> {
    pub drug: &'a Drug,
    pub prefix: AnalysisPrefix,
    pub count: usize,
    /// Config directory as written into the script, relative to where it runs
    pub config_dir: &'a str,
    /// Analysis output directory passed to the summary step
    pub analysis_dir: &'a str,
}

impl ScriptParams<'_> {
    /// Config paths listed in the script's array, 1-based
    pub fn config_paths(&self) -> Vec<String> {
        (1..=self.count)
            .map(|i| format!("{}/{}", self.config_dir, config_file_name(self.prefix, i)))
            .collect()
    }
}

/// Renders the script text. Identical params always render identical bytes.
pub fn render_script(params: &ScriptParams<'_>) -> Result<String> {
    check_count(params.count)?;

    let mut out = String::new();
    writeln!(out, "drug=\"{}\"", params.drug.name)?;
    writeln!(out, "drug_abbr=\"{}\"", params.drug.abbreviation)?;
    writeln!(out)?;

    writeln!(out, "# list of config files to use")?;
    writeln!(out, "config_array=(")?;
    for path in params.config_paths() {
        writeln!(out, " '{}'", path)?;
    }
    writeln!(out, ")")?;
    writeln!(out)?;

    writeln!(out, "for i in ${{!config_array[@]}}; do")?;
    for step in MODEL_STEPS {
        writeln!(
            out,
            "    python3 -u {} \"${{config_array[$i]}}\" \"$drug\" \"$drug_abbr\"",
            step
        )?;
    }
    writeln!(out, "done")?;
    writeln!(out)?;

    write!(
        out,
        "python3 -u {} \"$drug\" \"{}\" \"{}\"",
        SUMMARY_STEP,
        params.prefix.upper(),
        params.analysis_dir
    )?;

    Ok(out)
}

/// Renders and writes one script, replacing any existing file
pub fn write_script(fs: &dyn FileSystem, path: &Path, params: &ScriptParams<'_>) -> Result<()> {
    if params.count == 0 {
        warn!(
            drug = params.drug.abbreviation,
            "Script will list no config files"
        );
    }

    let script = render_script(params)?;
    fs.write(path, &script)
        .with_context(|| format!("Failed to write script for {}", params.drug.name))?;

    debug!(path = %path.display(), drug = params.drug.abbreviation, "Wrote script");
    Ok(())
}

/// Path the script for `drug` is written to inside `script_dir`
pub fn script_path(script_dir: &Path, drug: &Drug) -> PathBuf {
    script_dir.join(crate::naming::script_file_name(drug.abbreviation))
}
