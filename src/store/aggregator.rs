//! Concurrent loading of every release in the store.
//!
//! Each release directory is loaded by its own task. All tasks are joined
//! before the outcome is decided, then a single reduction turns the joined
//! results into either the full collection or one error.

use crate::domain::ReleaseRecord;
use crate::error::{ChangesError, Result};
use crate::store::loader;
use futures::future::join_all;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinError;

/// Load all releases under `releases_dir`.
///
/// A missing `releases_dir` holds zero releases. When several loads fail,
/// which failure is reported is unspecified.
pub async fn load_all(releases_dir: &Path) -> Result<Vec<ReleaseRecord>> {
    let release_dirs = release_dirs(releases_dir).await?;

    let handles = release_dirs
        .into_iter()
        .map(|dir| tokio::spawn(async move { loader::load_release(&dir).await }));

    reduce(join_all(handles).await)
}

/// Immediate sub-directories of the releases root
async fn release_dirs(releases_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = match fs::read_dir(releases_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut dirs = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if loader::is_dir(&entry.path()).await? {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

fn reduce(
    joined: Vec<std::result::Result<Result<ReleaseRecord>, JoinError>>,
) -> Result<Vec<ReleaseRecord>> {
    let mut records = Vec::with_capacity(joined.len());
    let mut failure = None;

    for outcome in joined {
        match outcome {
            Ok(Ok(record)) => records.push(record),
            Ok(Err(e)) => failure = Some(e),
            Err(e) => failure = Some(ChangesError::Task(e.to_string())),
        }
    }

    match failure {
        Some(e) => Err(ChangesError::aggregation(e)),
        None => Ok(records),
    }
}
