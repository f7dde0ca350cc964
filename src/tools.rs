//! Locating external clang tooling on the search path.
//!
//! Distributions ship parallel-installed versioned binaries
//! (`clang-format-18`, `clang-format-14`, ...) next to an optional bare
//! name. The newest versioned variant wins; the bare name is the fallback.

use std::path::PathBuf;

/// Highest version suffix probed.
pub const MAX_TOOL_VERSION: u32 = 50;
/// Lowest version suffix probed.
pub const MIN_TOOL_VERSION: u32 = 10;

/// Executable lookup, abstracted so tests can supply a fixed name→path map
/// instead of touching the real environment.
pub trait ToolResolver {
    fn lookup(&self, name: &str) -> Option<PathBuf>;
}

/// Resolver over the ambient `PATH`.
pub struct PathResolver;

impl ToolResolver for PathResolver {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Find the best available variant of `base`: versioned suffixes from
/// newest to oldest, then the bare name. `None` means the caller must
/// treat the tool as missing.
pub fn find_tool(resolver: &dyn ToolResolver, base: &str) -> Option<PathBuf> {
    for version in (MIN_TOOL_VERSION..=MAX_TOOL_VERSION).rev() {
        if let Some(path) = resolver.lookup(&format!("{base}-{version}")) {
            return Some(path);
        }
    }
    resolver.lookup(base)
}


#[cfg(test)]
mod tests {
    use super::find_tool;
    use super::testing::MapResolver;
    use std::path::PathBuf;

    #[test]
    fn highest_version_wins() {
        let resolver = MapResolver::new(&["clang-format-12", "clang-format-14"]);
        let path = find_tool(&resolver, "clang-format");
        assert_eq!(path, Some(PathBuf::from("/usr/bin/clang-format-14")));
    }

    #[test]
    fn versioned_variant_beats_bare_name() {
        let resolver = MapResolver::new(&["clang-format", "clang-format-11"]);
        let path = find_tool(&resolver, "clang-format");
        assert_eq!(path, Some(PathBuf::from("/usr/bin/clang-format-11")));
    }

    #[test]
    fn bare_name_is_the_fallback() {
        let resolver = MapResolver::new(&["clang-format"]);
        let path = find_tool(&resolver, "clang-format");
        assert_eq!(path, Some(PathBuf::from("/usr/bin/clang-format")));
    }

    #[test]
    fn nothing_available_resolves_to_none() {
        let resolver = MapResolver::new(&["clang-tidy-18"]);
        assert_eq!(find_tool(&resolver, "clang-format"), None);
    }
}
