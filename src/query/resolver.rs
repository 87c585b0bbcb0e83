//! Selects the records a query asks for. Pure functions over a fully loaded
//! collection; ordering of the output is left to the assembler.

use crate::domain::version;
use crate::domain::{Query, ReleaseRecord, VersionRange};
use crate::error::{ChangesError, Result};
use semver::Version;
use std::cmp::Ordering;

/// Select the records matching `query`
pub fn resolve<'a>(records: &'a [ReleaseRecord], query: &Query) -> Result<Vec<&'a ReleaseRecord>> {
    match query {
        Query::All => Ok(records.iter().collect()),
        Query::Explicit {
            versions,
            include_latest,
        } => explicit(records, versions, *include_latest),
        Query::Range(range) => Ok(in_range(records, range)),
        Query::FromVersionToLatest(start) => Ok(from_version_to_latest(records, start)),
    }
}

/// The record with the greatest release version, if any
pub fn latest(records: &[ReleaseRecord]) -> Option<&ReleaseRecord> {
    let mut sorted: Vec<&ReleaseRecord> = records.iter().collect();
    sorted.sort_by(|a, b| version::descending(a.version(), b.version()));
    sorted.into_iter().next()
}

/// One record per requested version, in request order.
///
/// Versions match by precedence, so build metadata is ignored. Fails on the
/// first version without a record. With `include_latest`, the latest record
/// is appended even if it was also requested explicitly.
pub fn explicit<'a>(
    records: &'a [ReleaseRecord],
    versions: &[Version],
    include_latest: bool,
) -> Result<Vec<&'a ReleaseRecord>> {
    let mut selected = versions
        .iter()
        .map(|requested| {
            records
                .iter()
                .find(|record| version::precedence(record.version(), requested) == Ordering::Equal)
                .ok_or_else(|| ChangesError::NotFound(requested.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    if include_latest {
        selected.extend(latest(records));
    }

    Ok(selected)
}

pub fn in_range<'a>(records: &'a [ReleaseRecord], range: &VersionRange) -> Vec<&'a ReleaseRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.version()))
        .collect()
}

/// Closed range from `start` to the latest release; empty for an empty store
pub fn from_version_to_latest<'a>(
    records: &'a [ReleaseRecord],
    start: &Version,
) -> Vec<&'a ReleaseRecord> {
    match latest(records) {
        Some(latest) => in_range(
            records,
            &VersionRange::closed(start.clone(), latest.version().clone()),
        ),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseInfo;
    use chrono::Utc;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn store(versions: &[&str]) -> Vec<ReleaseRecord> {
        versions
            .iter()
            .map(|s| ReleaseRecord::new(ReleaseInfo::new(v(s), Utc::now()), Vec::new()))
            .collect()
    }

    fn versions(selected: &[&ReleaseRecord]) -> Vec<String> {
        selected.iter().map(|r| r.version().to_string()).collect()
    }

    #[test]
    fn test_all_selects_everything() {
        let records = store(&["1.0.0", "2.0.0"]);
        assert_eq!(resolve(&records, &Query::All).unwrap().len(), 2);
    }

    #[test]
    fn test_latest() {
        let records = store(&["1.0.0", "2.0.0", "1.10.0"]);
        assert_eq!(latest(&records).unwrap().version(), &v("2.0.0"));
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_latest_prefers_release_over_its_prerelease() {
        let records = store(&["2.0.0-rc.1", "2.0.0", "1.0.0"]);
        assert_eq!(latest(&records).unwrap().version(), &v("2.0.0"));
    }

    #[test]
    fn test_explicit_in_request_order() {
        let records = store(&["1.0.0", "1.1.0", "2.0.0"]);
        let selected = explicit(&records, &[v("2.0.0"), v("1.0.0")], false).unwrap();
        assert_eq!(versions(&selected), vec!["2.0.0", "1.0.0"]);
    }

    #[test]
    fn test_explicit_reports_first_missing_version() {
        let records = store(&["1.0.0"]);
        let err = explicit(&records, &[v("1.0.0"), v("9.9.9"), v("8.8.8")], false).unwrap_err();
        match err {
            ChangesError::NotFound(version) => assert_eq!(version, v("9.9.9")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_with_latest_keeps_duplicate() {
        let records = store(&["1.0.0", "2.0.0"]);
        let selected = explicit(&records, &[v("2.0.0")], true).unwrap();
        assert_eq!(versions(&selected), vec!["2.0.0", "2.0.0"]);
    }

    #[test]
    fn test_explicit_latest_only() {
        let records = store(&["1.0.0", "2.0.0"]);
        let selected = explicit(&records, &[], true).unwrap();
        assert_eq!(versions(&selected), vec!["2.0.0"]);
        assert!(explicit(&[], &[], true).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_ignores_build_metadata() {
        let records = store(&["1.0.0+build.1", "1.0.0-rc.1"]);

        let selected = explicit(&records, &[v("1.0.0")], false).unwrap();
        assert_eq!(versions(&selected), vec!["1.0.0+build.1"]);

        let selected = explicit(&records, &[v("1.0.0+other")], false).unwrap();
        assert_eq!(versions(&selected), vec!["1.0.0+build.1"]);

        let by_range = in_range(&records, &VersionRange::closed(v("1.0.0"), v("1.0.0")));
        assert_eq!(versions(&by_range), versions(&selected));
    }

    #[test]
    fn test_range_shapes() {
        let records = store(&["1.0.0", "1.1.0", "2.0.0"]);

        let closed = resolve(
            &records,
            &Query::Range(VersionRange::closed(v("1.0.0"), v("1.9.9"))),
        )
        .unwrap();
        assert_eq!(versions(&closed), vec!["1.0.0", "1.1.0"]);

        let half_open = in_range(&records, &VersionRange::half_open(v("1.0.0"), v("2.0.0")));
        assert_eq!(versions(&half_open), vec!["1.0.0", "1.1.0"]);

        let at_least = in_range(&records, &VersionRange::at_least(v("1.1.0")));
        assert_eq!(versions(&at_least), vec!["1.1.0", "2.0.0"]);

        let below = in_range(&records, &VersionRange::below(v("1.1.0")));
        assert_eq!(versions(&below), vec!["1.0.0"]);

        let through = in_range(&records, &VersionRange::through(v("1.1.0")));
        assert_eq!(versions(&through), vec!["1.0.0", "1.1.0"]);
    }

    #[test]
    fn test_from_version_to_latest() {
        let records = store(&["1.0.0", "1.1.0", "2.0.0"]);
        let selected = resolve(&records, &Query::FromVersionToLatest(v("1.1.0"))).unwrap();
        assert_eq!(versions(&selected), vec!["1.1.0", "2.0.0"]);
    }

    #[test]
    fn test_from_version_to_latest_empty_store() {
        let selected = resolve(&[], &Query::FromVersionToLatest(v("1.0.0"))).unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_from_version_past_latest_is_empty() {
        let records = store(&["1.0.0"]);
        assert!(from_version_to_latest(&records, &v("2.0.0")).is_empty());
    }
}
