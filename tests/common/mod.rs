use flagkit::{FlagConfig, OverrideStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds an initialized store from parallel name/value lists.
pub fn store_with_pairs(names: &[&str], values: &[bool]) -> OverrideStore {
    let config = FlagConfig::from_pairs(names, values).expect("override lists must be parallel");
    OverrideStore::init(Some(config))
}

/// Writes an override file into a fresh temp dir. The `TempDir` keeps the
/// file alive for as long as the caller holds it.
pub fn write_override_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("flagkit_test_")
        .tempdir()
        .expect("failed to create temp dir");
    let path = dir.path().join("overrides.toml");
    fs::write(&path, contents).expect("failed to write override file");
    (dir, path)
}
