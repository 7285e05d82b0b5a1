//! Numbered YAML config files, one per parameter combination

use super::base::BaseConfig;
use crate::catalog::ParameterCombination;
use crate::fs::FileSystem;
use crate::naming::{check_count, config_file_name};
use crate::prefix::AnalysisPrefix;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Generated configs are always binary analyses
pub const CONFIG_PREFIX: AnalysisPrefix = AnalysisPrefix::Binary;

/// Paths the emitter writes for `count` combinations, in index order
pub fn config_paths(config_dir: &Path, count: usize) -> Vec<PathBuf> {
    (1..=count)
        .map(|i| config_dir.join(config_file_name(CONFIG_PREFIX, i)))
        .collect()
}

/// Logs a warning for each parameter key the template lacks and returns them
pub fn warn_missing_keys(base: &BaseConfig) -> Vec<&'static str> {
    let missing = base.missing_parameter_keys();
    for key in &missing {
        warn!(
            key = *key,
            template = %base.source().display(),
            "Base config does not define parameter key; it will be appended"
        );
    }
    missing
}

/// Writes one config per combination into `config_dir`, creating it if needed.
///
/// Returns the written paths in index order.
pub fn emit_configs(
    fs: &dyn FileSystem,
    base: &BaseConfig,
    config_dir: &Path,
    combinations: &[ParameterCombination],
) -> Result<Vec<PathBuf>> {
    check_count(combinations.len())?;
    warn_missing_keys(base);

    if !fs.is_dir(config_dir) {
        fs.create_dir_all(config_dir)?;
        debug!(dir = %config_dir.display(), "Created config directory");
    }

    let paths = config_paths(config_dir, combinations.len());
    for (path, combination) in paths.iter().zip(combinations) {
        let yaml = base
            .render(combination)
            .with_context(|| format!("Failed to render config {}", path.display()))?;
        fs.write(path, &yaml)?;
        debug!(path = %path.display(), "Wrote config");
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COMBINATIONS;
    use crate::emit::base::{ATU_ANALYSIS_KEY, BINARY_KEY, MODEL_PREFIX_KEY};
    use crate::fs::MockFileSystem;
    use serde_yaml::Value;

    const TEMPLATE: &str = "\
output_dir: /results
binary: false
atu_analysis: true
model_prefix: leftover
pheno_category_lst: [ALL]
tiers_lst: ['1']
unpooled: false
synonymous: false
amb_mode: DROP
";

    fn setup() -> (MockFileSystem, BaseConfig) {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("config.yaml", TEMPLATE);
        let base = BaseConfig::load(&fs, Path::new("/repo/config.yaml")).unwrap();
        (fs, base)
    }

    #[test]
    fn test_emits_sixteen_numbered_files() {
        let (fs, base) = setup();
        let dir = Path::new("/repo/config_files");

        let written = emit_configs(&fs, &base, dir, &COMBINATIONS).unwrap();

        assert_eq!(written.len(), 16);
        assert_eq!(fs.files_in(dir), written);
        assert_eq!(written[0], dir.join("binary_01.yaml"));
        assert_eq!(written[15], dir.join("binary_16.yaml"));
    }

    #[test]
    fn test_every_file_matches_its_combination() {
        let (fs, base) = setup();
        let dir = Path::new("/repo/config_files");
        let written = emit_configs(&fs, &base, dir, &COMBINATIONS).unwrap();

        for (path, combo) in written.iter().zip(COMBINATIONS.iter()) {
            let parsed: Value = serde_yaml::from_str(&fs.read_to_string(path).unwrap()).unwrap();
            let expected = serde_yaml::to_value(combo).unwrap();

            assert_eq!(parsed[BINARY_KEY], Value::Bool(true));
            assert_eq!(parsed[ATU_ANALYSIS_KEY], Value::Bool(false));
            assert!(parsed.get(MODEL_PREFIX_KEY).is_none());
            assert_eq!(parsed["output_dir"], Value::from("/results"));
            for key in crate::catalog::PARAMETER_KEYS {
                assert_eq!(parsed[key], expected[key], "{} in {}", key, path.display());
            }
        }
    }

    #[test]
    fn test_creates_missing_config_dir() {
        let (fs, base) = setup();
        let dir = Path::new("/repo/config_files");
        assert!(!fs.exists(dir));

        emit_configs(&fs, &base, dir, &COMBINATIONS[..2]).unwrap();

        assert!(fs.is_dir(dir));
    }

    #[test]
    fn test_overwrites_existing_files() {
        let (fs, base) = setup();
        fs.add_file("config_files/binary_01.yaml", "stale: true\n");

        emit_configs(&fs, &base, Path::new("/repo/config_files"), &COMBINATIONS[..1]).unwrap();

        let text = fs
            .read_to_string(Path::new("/repo/config_files/binary_01.yaml"))
            .unwrap();
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_config_dir_is_a_file() {
        let (fs, base) = setup();
        fs.add_file("config_files", "oops");

        let result = emit_configs(&fs, &base, Path::new("/repo/config_files"), &COMBINATIONS);
        assert!(result.is_err());
    }

    #[test]
    fn test_warn_missing_keys_lists_absent_parameters() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("config.yaml", "binary: false\nunpooled: true\n");
        let base = BaseConfig::load(&fs, Path::new("/repo/config.yaml")).unwrap();

        assert_eq!(
            warn_missing_keys(&base),
            vec!["pheno_category_lst", "tiers_lst", "synonymous", "amb_mode"]
        );
    }

    #[test]
    fn test_warn_missing_keys_complete_template() {
        let (_fs, base) = setup();
        assert!(warn_missing_keys(&base).is_empty());
    }

    #[test]
    fn test_config_paths() {
        let paths = config_paths(Path::new("config_files"), 3);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("config_files/binary_01.yaml"),
                PathBuf::from("config_files/binary_02.yaml"),
                PathBuf::from("config_files/binary_03.yaml"),
            ]
        );
    }
}
