use std::path::{Path, PathBuf};

/// Directory holding the store, relative to the project root
pub const STORE_DIR: &str = ".changes";
/// Releases directory inside the store
pub const RELEASES_DIR: &str = "releases";
/// Bucket for entries not yet assigned to a release
pub const UNRELEASED_DIR: &str = "Unreleased";
/// Entry directory inside a release or prerelease directory
pub const ENTRIES_DIR: &str = "entries";
/// Metadata file inside a release or prerelease directory
pub const INFO_FILE: &str = "info.toml";

/// Paths of the on-disk changelog store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    /// Layout for a store rooted at `root` (the `.changes` directory itself)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreLayout { root: root.into() }
    }

    /// Layout for the store that belongs to the project at `project_dir`
    pub fn for_project(project_dir: &Path) -> Self {
        StoreLayout::new(project_dir.join(STORE_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn releases_dir(&self) -> PathBuf {
        self.root.join(RELEASES_DIR)
    }

    pub fn unreleased_dir(&self) -> PathBuf {
        self.root.join(UNRELEASED_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = StoreLayout::for_project(Path::new("/work/project"));
        assert_eq!(layout.root(), Path::new("/work/project/.changes"));
        assert_eq!(
            layout.releases_dir(),
            PathBuf::from("/work/project/.changes/releases")
        );
        assert_eq!(
            layout.unreleased_dir(),
            PathBuf::from("/work/project/.changes/Unreleased")
        );
    }
}
