//! On-disk changelog store
//!
//! - `layout` - where things live under `.changes/`
//! - `loader` - a single release and its prereleases
//! - `aggregator` - every release, loaded concurrently
//! - `entries` - filing new changelog entries

pub mod aggregator;
pub mod entries;
pub mod layout;
pub mod loader;

pub use aggregator::load_all;
pub use entries::{ensure_target_exists, write_entry};
pub use layout::StoreLayout;
pub use loader::load_release;
