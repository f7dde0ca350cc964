//! Source file discovery under the bundled tree.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The bundled sources live at a fixed location relative to the project
/// root; the tools never operate on arbitrary directories.
pub const SOURCE_ROOT: &str = "src/webrtc_c";

/// Extensions the clang tooling understands.
pub const SOURCE_EXTENSIONS: &[&str] = &["h", "c", "cc", "cpp", "m", "mm"];

/// Collect every regular file under `root` with a recognized extension,
/// sorted lexicographically so runs are reproducible across platforms.
///
/// A missing root or a tree with no matching files yields an empty list;
/// whether that is fatal is the caller's call.
pub fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::collect_source_files;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
    }

    #[test]
    fn collects_recursively_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zeta.c");
        touch(dir.path(), "alpha.h");
        touch(dir.path(), "nested/deep/video.mm");
        touch(dir.path(), "nested/audio.cc");
        touch(dir.path(), "README.md");
        touch(dir.path(), "build.ninja");

        let files = collect_source_files(dir.path());
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_str().unwrap())
            .collect();
        assert_eq!(rel, vec!["alpha.h", "nested/audio.cc", "nested/deep/video.mm", "zeta.c"]);
    }

    #[test]
    fn extension_match_requires_exact_suffix() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "note.cpp.txt");
        touch(dir.path(), "real.cpp");
        touch(dir.path(), "noext");

        let files = collect_source_files(dir.path());
        assert_eq!(files, vec![dir.path().join("real.cpp")]);
    }

    #[test]
    fn missing_root_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let files = collect_source_files(&dir.path().join("does-not-exist"));
        assert!(files.is_empty());
    }
}
