//! `changes add` workflow

use std::path::PathBuf;

use anyhow::Result;
use semver::Version;
use tracing::info;

use crate::config::LoadedConfig;
use crate::domain::{ChangelogEntry, Target};
use crate::store;
use crate::ui;

/// Arguments for the add workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddWorkflowArgs {
    /// Tags given on the command line; prompted for when empty
    pub tags: Vec<String>,

    /// Description given on the command line; prompted for when absent
    pub description: Option<String>,

    /// Release to file the entry under; the unreleased bucket when absent
    pub release: Option<Version>,
}

/// Resolve each given tag to its declared spelling.
pub fn validate_tags(tags: &[String], loaded: &LoadedConfig) -> Result<Vec<String>> {
    tags.iter()
        .map(|tag| {
            loaded
                .config
                .defined_tag(tag)
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("Tag {} specified is not defined in config.", tag))
        })
        .collect()
}

/// File a new changelog entry, prompting for anything not supplied.
///
/// The target release and any given tags are checked before the first prompt.
///
/// # Returns
/// Path of the written entry file
pub fn run_add(args: &AddWorkflowArgs, loaded: &LoadedConfig) -> Result<PathBuf> {
    let layout = loaded.layout();
    let target = Target::from_release(args.release.clone());
    store::ensure_target_exists(&layout, &target)?;

    let tags = if args.tags.is_empty() {
        ui::select_tags(&loaded.config)?
    } else {
        validate_tags(&args.tags, loaded)?
    };

    let description = match &args.description {
        Some(description) if !description.trim().is_empty() => description.trim().to_string(),
        _ => ui::prompt_description()?,
    };

    let entry = ChangelogEntry::new(tags, description);
    let path = store::write_entry(&layout, &target, &entry)?;

    info!(release = %target, path = %path.display(), "entry written");
    Ok(path)
}
