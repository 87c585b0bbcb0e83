use crate::domain::version;
use crate::domain::{ReleaseInfo, ReleaseRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A release as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseQueryItem {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub prereleases: Vec<PrereleaseQueryItem>,
}

/// A prerelease as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrereleaseQueryItem {
    pub version: String,
    pub created_at: DateTime<Utc>,
}

/// Shape selected records into output items, newest release first and each
/// release's prereleases newest first.
pub fn assemble(mut selected: Vec<&ReleaseRecord>) -> Vec<ReleaseQueryItem> {
    selected.sort_by(|a, b| version::descending(a.version(), b.version()));
    selected.into_iter().map(release_item).collect()
}

fn release_item(record: &ReleaseRecord) -> ReleaseQueryItem {
    let mut prereleases: Vec<&ReleaseInfo> = record.prereleases.iter().collect();
    prereleases.sort_by(|a, b| version::descending(&a.version, &b.version));

    ReleaseQueryItem {
        version: record.release.version.to_string(),
        created_at: record.release.created_at,
        prereleases: prereleases
            .into_iter()
            .map(|info| PrereleaseQueryItem {
                version: info.version.to_string(),
                created_at: info.created_at,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use semver::Version;

    fn info(version: &str, day: u32) -> ReleaseInfo {
        ReleaseInfo::new(
            Version::parse(version).unwrap(),
            Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_releases_sorted_by_version_not_text() {
        let records = vec![
            ReleaseRecord::new(info("1.9.0", 1), Vec::new()),
            ReleaseRecord::new(info("1.10.0", 2), Vec::new()),
            ReleaseRecord::new(info("1.2.0", 3), Vec::new()),
        ];

        let items = assemble(records.iter().collect());
        let versions: Vec<&str> = items.iter().map(|i| i.version.as_str()).collect();
        assert_eq!(versions, vec!["1.10.0", "1.9.0", "1.2.0"]);
    }

    #[test]
    fn test_prereleases_sorted_descending() {
        let record = ReleaseRecord::new(
            info("1.1.0", 20),
            vec![info("1.1.0-beta.2", 12), info("1.1.0-alpha.1", 5), info("1.1.0-beta.11", 15)],
        );

        let items = assemble(vec![&record]);
        let versions: Vec<&str> = items[0]
            .prereleases
            .iter()
            .map(|p| p.version.as_str())
            .collect();
        assert_eq!(versions, vec!["1.1.0-beta.11", "1.1.0-beta.2", "1.1.0-alpha.1"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let record = ReleaseRecord::new(info("2.0.0", 1), Vec::new());
        assert_eq!(assemble(vec![&record, &record]).len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let record = ReleaseRecord::new(info("1.1.0", 2), vec![info("1.1.0-beta.1", 1)]);
        let json = serde_json::to_value(assemble(vec![&record])).unwrap();
        assert_eq!(json[0]["version"], "1.1.0");
        assert_eq!(json[0]["createdAt"], "2023-01-02T00:00:00Z");
        assert_eq!(json[0]["prereleases"][0]["version"], "1.1.0-beta.1");
    }
}
