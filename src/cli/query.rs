//! `changes query` workflow

use anyhow::Result;
use semver::Version;
use tracing::debug;

use crate::config::LoadedConfig;
use crate::domain::Query;
use crate::query::{ReleaseQuerier, ReleaseQueryItem};

/// Arguments for the query workflow
///
/// Mirrors the CLI flags but stays independent of clap so the workflow can be
/// driven programmatically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryWorkflowArgs {
    /// Explicit versions to return
    pub versions: Vec<Version>,

    /// Also return the latest release
    pub latest: bool,

    /// Range expression such as `1.0.0..=latest`
    pub range: Option<String>,
}

impl QueryWorkflowArgs {
    /// Translate the flags into a single query.
    ///
    /// No selector means every release; `--latest` alone means the latest
    /// release only.
    pub fn to_query(&self) -> Result<Query> {
        if let Some(expression) = &self.range {
            if !self.versions.is_empty() || self.latest {
                anyhow::bail!("--range cannot be combined with --versions or --latest");
            }
            return Ok(Query::parse_range(expression)?);
        }

        if self.versions.is_empty() && !self.latest {
            return Ok(Query::All);
        }

        Ok(Query::Explicit {
            versions: self.versions.clone(),
            include_latest: self.latest,
        })
    }
}

/// Run a query against the store next to the loaded configuration.
pub async fn run_query(
    args: &QueryWorkflowArgs,
    loaded: &LoadedConfig,
) -> Result<Vec<ReleaseQueryItem>> {
    let query = args.to_query()?;
    let layout = loaded.layout();
    debug!(store = %layout.root().display(), ?query, "querying releases");

    let items = ReleaseQuerier::new(&layout).run(&query).await?;

    debug!(count = items.len(), "query finished");
    Ok(items)
}
