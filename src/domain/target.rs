use crate::domain::version;
use crate::store::layout::{StoreLayout, ENTRIES_DIR};
use semver::Version;
use std::fmt;
use std::path::PathBuf;

/// Where a new changelog entry is filed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The default bucket for entries not assigned to a release
    Unreleased,
    /// An existing release, or a prerelease under its release line
    Released { version: Version, prerelease: bool },
}

impl Target {
    /// Target for an optional `--release` argument
    pub fn from_release(release: Option<Version>) -> Self {
        match release {
            None => Target::Unreleased,
            Some(version) => {
                let prerelease = version::is_prerelease(&version);
                Target::Released {
                    version,
                    prerelease,
                }
            }
        }
    }

    /// Directory that must already exist before entries can be filed.
    ///
    /// `None` for the unreleased bucket, which is created on demand.
    pub fn release_dir(&self, layout: &StoreLayout) -> Option<PathBuf> {
        match self {
            Target::Unreleased => None,
            Target::Released {
                version,
                prerelease: false,
            } => Some(
                layout
                    .releases_dir()
                    .join(version::release_line(version).to_string()),
            ),
            Target::Released {
                version,
                prerelease: true,
            } => Some(
                layout
                    .releases_dir()
                    .join(version::release_line(version).to_string())
                    .join(version::without_build(version).to_string()),
            ),
        }
    }

    /// Directory new entry files are written to
    pub fn entries_dir(&self, layout: &StoreLayout) -> PathBuf {
        match self.release_dir(layout) {
            Some(dir) => dir.join(ENTRIES_DIR),
            None => layout.unreleased_dir(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Unreleased => write!(f, "Unreleased"),
            Target::Released {
                version,
                prerelease: true,
            } => write!(f, "{}", version::without_build(version)),
            Target::Released { version, .. } => write!(f, "{}", version::release_line(version)),
        }
    }
}
