//! Domain logic - pure types and rules independent of the filesystem

pub mod entry;
pub mod query;
pub mod release;
pub mod target;
pub mod version;

pub use entry::ChangelogEntry;
pub use query::{Bound, Query, VersionRange};
pub use release::{ReleaseInfo, ReleaseRecord};
pub use target::Target;
