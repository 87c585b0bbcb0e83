//! Query shapes understood by the release querier.

use crate::domain::version;
use crate::error::{ChangesError, Result};
use regex::Regex;
use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Keyword accepted as the upper end of a range expression
pub const LATEST: &str = "latest";

/// One end of a version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub version: Version,
    pub inclusive: bool,
}

impl Bound {
    pub fn inclusive(version: Version) -> Self {
        Bound {
            version,
            inclusive: true,
        }
    }

    pub fn exclusive(version: Version) -> Self {
        Bound {
            version,
            inclusive: false,
        }
    }
}

/// A version range with independently optional, independently inclusive ends.
///
/// Comparison uses semver precedence, so build metadata never affects
/// membership.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionRange {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl VersionRange {
    /// `lo <= v <= hi`
    pub fn closed(lo: Version, hi: Version) -> Self {
        VersionRange {
            lower: Some(Bound::inclusive(lo)),
            upper: Some(Bound::inclusive(hi)),
        }
    }

    /// `lo <= v < hi`
    pub fn half_open(lo: Version, hi: Version) -> Self {
        VersionRange {
            lower: Some(Bound::inclusive(lo)),
            upper: Some(Bound::exclusive(hi)),
        }
    }

    /// `lo <= v`
    pub fn at_least(lo: Version) -> Self {
        VersionRange {
            lower: Some(Bound::inclusive(lo)),
            upper: None,
        }
    }

    /// `v < hi`
    pub fn below(hi: Version) -> Self {
        VersionRange {
            lower: None,
            upper: Some(Bound::exclusive(hi)),
        }
    }

    /// `v <= hi`
    pub fn through(hi: Version) -> Self {
        VersionRange {
            lower: None,
            upper: Some(Bound::inclusive(hi)),
        }
    }

    pub fn contains(&self, candidate: &Version) -> bool {
        let above_lower = self.lower.as_ref().map_or(true, |bound| {
            match version::precedence(candidate, &bound.version) {
                Ordering::Greater => true,
                Ordering::Equal => bound.inclusive,
                Ordering::Less => false,
            }
        });
        let below_upper = self.upper.as_ref().map_or(true, |bound| {
            match version::precedence(candidate, &bound.version) {
                Ordering::Less => true,
                Ordering::Equal => bound.inclusive,
                Ordering::Greater => false,
            }
        });
        above_lower && below_upper
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lower) = &self.lower {
            write!(f, "{}", lower.version)?;
        }
        write!(f, "..")?;
        if let Some(upper) = &self.upper {
            if upper.inclusive {
                write!(f, "=")?;
            }
            write!(f, "{}", upper.version)?;
        }
        Ok(())
    }
}

/// A query against the release store. Exactly one shape per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every release
    All,
    /// The listed releases in request order, optionally followed by the latest one
    Explicit {
        versions: Vec<Version>,
        include_latest: bool,
    },
    /// Releases inside a range
    Range(VersionRange),
    /// Releases from `start` up to and including the latest release
    FromVersionToLatest(Version),
}

impl Query {
    /// Parse a range expression.
    ///
    /// Accepts `A..=B`, `A..B`, `A..`, `..B`, `..=B` and `A..=latest`.
    pub fn parse_range(expression: &str) -> Result<Self> {
        expression.parse()
    }
}

impl FromStr for Query {
    type Err = ChangesError;

    fn from_str(s: &str) -> Result<Self> {
        let re = Regex::new(r"^(?P<lower>.*?)\.\.(?P<inclusive>=)?(?P<upper>.*)$")
            .map_err(|e| ChangesError::version(e.to_string()))?;
        let captures = re.captures(s.trim()).ok_or_else(|| {
            ChangesError::version(format!(
                "Invalid range '{}': expected A..=B, A..B, A.., ..B or ..=B",
                s
            ))
        })?;

        let lower = captures.name("lower").map_or("", |m| m.as_str());
        let upper = captures.name("upper").map_or("", |m| m.as_str());
        let inclusive = captures.name("inclusive").is_some();

        match (lower.is_empty(), upper.is_empty()) {
            (true, true) => Err(ChangesError::version(format!(
                "Invalid range '{}': at least one bound is required",
                s
            ))),
            (false, true) if inclusive => Err(ChangesError::version(format!(
                "Invalid range '{}': '..=' needs an upper bound",
                s
            ))),
            (false, true) => Ok(Query::Range(VersionRange::at_least(version::parse(lower)?))),
            (true, false) if inclusive => {
                Ok(Query::Range(VersionRange::through(version::parse(upper)?)))
            }
            (true, false) => Ok(Query::Range(VersionRange::below(version::parse(upper)?))),
            (false, false) if upper.eq_ignore_ascii_case(LATEST) => {
                if !inclusive {
                    return Err(ChangesError::version(format!(
                        "Invalid range '{}': use '..={}' to include the latest release",
                        s, LATEST
                    )));
                }
                Ok(Query::FromVersionToLatest(version::parse(lower)?))
            }
            (false, false) => {
                let lo = version::parse(lower)?;
                let hi = version::parse(upper)?;
                if inclusive {
                    Ok(Query::Range(VersionRange::closed(lo, hi)))
                } else {
                    Ok(Query::Range(VersionRange::half_open(lo, hi)))
                }
            }
        }
    }
}
