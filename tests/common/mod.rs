// Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use changes::store::layout::INFO_FILE;
use changes::store::StoreLayout;
use tempfile::TempDir;

/// Write an `info.toml` into `dir`, creating it if needed.
pub fn write_info(dir: &Path, version: &str, created_at: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join(INFO_FILE),
        format!("version = \"{}\"\ncreatedAt = \"{}\"\n", version, created_at),
    )
    .unwrap();
}

/// Project with a config file and an empty store.
pub fn empty_project() -> (TempDir, StoreLayout) {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".changes.toml"),
        "[[files]]\npath = \"CHANGELOG.md\"\ntags = [\"Added\", \"Fixed\"]\n",
    )
    .unwrap();
    let layout = StoreLayout::for_project(temp.path());
    (temp, layout)
}

/// Project holding 1.0.0, 1.1.0 (with 1.1.0-beta.1) and 2.0.0.
pub fn sample_project() -> (TempDir, StoreLayout) {
    let (temp, layout) = empty_project();
    let releases = layout.releases_dir();

    write_info(&releases.join("1.0.0"), "1.0.0", "2023-01-01T00:00:00Z");
    write_info(&releases.join("1.1.0"), "1.1.0", "2023-02-01T00:00:00Z");
    write_info(
        &releases.join("1.1.0").join("1.1.0-beta.1"),
        "1.1.0-beta.1",
        "2023-01-15T00:00:00Z",
    );
    fs::create_dir_all(releases.join("1.1.0").join("entries")).unwrap();
    write_info(&releases.join("2.0.0"), "2.0.0", "2023-03-01T00:00:00Z");

    (temp, layout)
}
