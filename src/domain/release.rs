use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};

/// Metadata stored in a release (or prerelease) directory's `info.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    pub version: Version,
    pub created_at: DateTime<Utc>,
}

impl ReleaseInfo {
    pub fn new(version: Version, created_at: DateTime<Utc>) -> Self {
        ReleaseInfo {
            version,
            created_at,
        }
    }
}

/// A release together with the prereleases found under its directory.
///
/// Prereleases are kept in discovery order; ordering is applied when results
/// are assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub release: ReleaseInfo,
    pub prereleases: Vec<ReleaseInfo>,
}

impl ReleaseRecord {
    pub fn new(release: ReleaseInfo, prereleases: Vec<ReleaseInfo>) -> Self {
        ReleaseRecord {
            release,
            prereleases,
        }
    }

    /// The release version this record is keyed by
    pub fn version(&self) -> &Version {
        &self.release.version
    }
}
