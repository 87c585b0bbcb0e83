//! Loads one release directory: its `info.toml` plus every prerelease
//! sub-directory named by a version.

use crate::domain::version;
use crate::domain::{ReleaseInfo, ReleaseRecord};
use crate::error::{ChangesError, Result};
use crate::store::layout::INFO_FILE;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Decode the `info.toml` of a release or prerelease directory
pub async fn load_info(dir: &Path) -> Result<ReleaseInfo> {
    let path = dir.join(INFO_FILE);
    let contents = fs::read_to_string(&path)
        .await
        .map_err(|e| ChangesError::decode(&path, e))?;
    toml::from_str(&contents).map_err(|e| ChangesError::decode(&path, e.message()))
}

/// Load a release and its prereleases from `dir`.
///
/// Sub-directories whose names are not versions (such as `entries/`) are
/// skipped. Prereleases are returned in directory listing order.
pub async fn load_release(dir: &Path) -> Result<ReleaseRecord> {
    let release = load_info(dir).await?;

    let mut prereleases = Vec::new();
    for prerelease_dir in prerelease_dirs(dir).await? {
        prereleases.push(load_info(&prerelease_dir).await?);
    }

    Ok(ReleaseRecord::new(release, prereleases))
}

/// Whether `path` is a directory, following symlinks. Dangling links are not.
pub(crate) async fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

async fn prerelease_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !is_dir(&entry.path()).await? {
            continue;
        }
        let name = entry.file_name();
        if name.to_str().is_some_and(version::is_valid) {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}
