use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FIXTURE_CONFIG: &str = include_str!("../fixtures/config.yaml");

#[allow(dead_code)]
pub fn get_resistgen_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("resistgen")
}

/// Temp directory laid out like an analysis checkout: base config present,
/// script directory created, config directory absent.
pub fn analysis_workspace() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("config.yaml"), FIXTURE_CONFIG).expect("Failed to write config.yaml");
    fs::create_dir(dir.path().join("bash_scripts")).expect("Failed to create bash_scripts");
    dir
}

/// Sorted file names directly inside `dir`
#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
