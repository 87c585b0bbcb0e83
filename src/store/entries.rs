use crate::domain::{ChangelogEntry, Target};
use crate::error::{ChangesError, Result};
use crate::store::layout::StoreLayout;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Check that the release (or prerelease) directory behind `target` exists.
///
/// The unreleased bucket always passes; it is created on demand.
pub fn ensure_target_exists(layout: &StoreLayout, target: &Target) -> Result<()> {
    match target.release_dir(layout) {
        Some(release_dir) if !release_dir.is_dir() => Err(ChangesError::target(format!(
            "Release {} was not found.",
            target
        ))),
        _ => Ok(()),
    }
}

/// File an entry under `target`.
///
/// The release (or prerelease) directory must already exist; the entries
/// directory inside it, and the unreleased bucket, are created on demand.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written entry file
/// * `Err` - If the target release is missing or the file cannot be written
pub fn write_entry(
    layout: &StoreLayout,
    target: &Target,
    entry: &ChangelogEntry,
) -> Result<PathBuf> {
    ensure_target_exists(layout, target)?;

    let entries_dir = target.entries_dir(layout);
    fs::create_dir_all(&entries_dir)?;

    let contents = toml::to_string(entry)
        .map_err(|e| ChangesError::config(format!("Failed to encode entry: {}", e)))?;

    let stem = entry.created_at.format("%Y%m%d%H%M%S%9f").to_string();
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            format!("{}.toml", stem)
        } else {
            format!("{}-{}.toml", stem, attempt)
        };
        let path = entries_dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(contents.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
