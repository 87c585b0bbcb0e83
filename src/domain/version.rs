use crate::error::{ChangesError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;

/// Parse a version string (e.g., "1.2.3" or "1.2.3-beta.1+build.5")
pub fn parse(input: &str) -> Result<Version> {
    Version::parse(input.trim())
        .map_err(|e| ChangesError::version(format!("Invalid version '{}': {}", input, e)))
}

/// Whether a directory name names a version
pub fn is_valid(name: &str) -> bool {
    Version::parse(name).is_ok()
}

/// Semver precedence: major, minor, patch, then prerelease identifiers.
/// Build metadata does not participate.
pub fn precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Newest first
pub fn descending(a: &Version, b: &Version) -> Ordering {
    precedence(b, a)
}

/// The release line a version belongs to ("1.2.3-rc.1+abc" -> "1.2.3")
pub fn release_line(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// The version with build metadata dropped ("1.2.3-rc.1+abc" -> "1.2.3-rc.1")
pub fn without_build(version: &Version) -> Version {
    Version {
        build: BuildMetadata::EMPTY,
        ..version.clone()
    }
}

/// Whether the version carries prerelease identifiers
pub fn is_prerelease(version: &Version) -> bool {
    version.pre != Prerelease::EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse(" 1.2.3 ").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("1.2").is_err());
        assert!(parse("v1.2.3").is_err());
        assert!(parse("entries").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("1.1.0-beta.1"));
        assert!(!is_valid("entries"));
        assert!(!is_valid("1.1"));
    }

    #[test]
    fn test_precedence_prerelease_sorts_before_release() {
        assert_eq!(precedence(&v("1.1.0-beta.1"), &v("1.1.0")), Ordering::Less);
        assert_eq!(precedence(&v("1.1.0-alpha"), &v("1.1.0-beta")), Ordering::Less);
        assert_eq!(precedence(&v("1.1.0-beta.2"), &v("1.1.0-beta.11")), Ordering::Less);
    }

    #[test]
    fn test_precedence_ignores_build_metadata() {
        assert_eq!(precedence(&v("1.0.0+a"), &v("1.0.0+b")), Ordering::Equal);
        assert_eq!(precedence(&v("1.0.0+zzz"), &v("1.0.1")), Ordering::Less);
    }

    #[test]
    fn test_descending() {
        let mut versions = vec![v("1.0.0"), v("2.0.0"), v("1.10.0"), v("1.9.0")];
        versions.sort_by(descending);
        assert_eq!(versions, vec![v("2.0.0"), v("1.10.0"), v("1.9.0"), v("1.0.0")]);
    }

    #[test]
    fn test_release_line_and_build() {
        let version = v("1.2.3-rc.1+abc");
        assert_eq!(release_line(&version), v("1.2.3"));
        assert_eq!(without_build(&version), v("1.2.3-rc.1"));
        assert!(is_prerelease(&version));
        assert!(!is_prerelease(&v("1.2.3+abc")));
    }
}
