use crate::domain::{Query, VersionRange};
use crate::error::Result;
use crate::query::assembler::{assemble, ReleaseQueryItem};
use crate::query::resolver;
use crate::store::{self, StoreLayout};
use semver::Version;
use std::path::PathBuf;

/// Entry points for querying released versions.
///
/// Every call re-reads the whole releases directory; nothing is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct ReleaseQuerier {
    releases_dir: PathBuf,
}

impl ReleaseQuerier {
    pub fn new(layout: &StoreLayout) -> Self {
        ReleaseQuerier {
            releases_dir: layout.releases_dir(),
        }
    }

    /// Run any query shape
    pub async fn run(&self, query: &Query) -> Result<Vec<ReleaseQueryItem>> {
        let records = store::load_all(&self.releases_dir).await?;
        let selected = resolver::resolve(&records, query)?;
        Ok(assemble(selected))
    }

    pub async fn query_all(&self) -> Result<Vec<ReleaseQueryItem>> {
        self.run(&Query::All).await
    }

    pub async fn query(
        &self,
        versions: Vec<Version>,
        include_latest: bool,
    ) -> Result<Vec<ReleaseQueryItem>> {
        self.run(&Query::Explicit {
            versions,
            include_latest,
        })
        .await
    }

    pub async fn query_range(&self, range: VersionRange) -> Result<Vec<ReleaseQueryItem>> {
        self.run(&Query::Range(range)).await
    }

    /// `lo..=hi`
    pub async fn query_closed(&self, lo: Version, hi: Version) -> Result<Vec<ReleaseQueryItem>> {
        self.query_range(VersionRange::closed(lo, hi)).await
    }

    /// `lo..hi`
    pub async fn query_half_open(
        &self,
        lo: Version,
        hi: Version,
    ) -> Result<Vec<ReleaseQueryItem>> {
        self.query_range(VersionRange::half_open(lo, hi)).await
    }

    /// `lo..`
    pub async fn query_at_least(&self, lo: Version) -> Result<Vec<ReleaseQueryItem>> {
        self.query_range(VersionRange::at_least(lo)).await
    }

    /// `..hi`
    pub async fn query_below(&self, hi: Version) -> Result<Vec<ReleaseQueryItem>> {
        self.query_range(VersionRange::below(hi)).await
    }

    /// `..=hi`
    pub async fn query_through(&self, hi: Version) -> Result<Vec<ReleaseQueryItem>> {
        self.query_range(VersionRange::through(hi)).await
    }

    pub async fn query_from_version_to_latest(
        &self,
        start: Version,
    ) -> Result<Vec<ReleaseQueryItem>> {
        self.run(&Query::FromVersionToLatest(start)).await
    }
}
