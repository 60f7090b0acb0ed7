//! Common test utilities and fixture helpers.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Path to the minimal CSV dataset shipped with the repository.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal")
}

/// Temporary data directory populated with the given `(file name, contents)`
/// pairs.
#[allow(dead_code)]
pub fn data_dir_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write fixture file");
    }
    dir
}

/// Copy the minimal fixture into a temporary directory, leaving out `skip`.
#[allow(dead_code)]
pub fn fixture_copy_without(skip: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for name in ["airlines.csv", "airports.csv", "routes.csv"] {
        if name == skip {
            continue;
        }
        copy_into(&fixture_dir().join(name), dir.path());
    }
    dir
}

fn copy_into(source: &Path, target_dir: &Path) {
    let name = source.file_name().expect("fixture file name");
    fs::copy(source, target_dir.join(name)).expect("copy fixture file");
}
