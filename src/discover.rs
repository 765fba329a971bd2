//! Collect input files from disk for the CLI.
//!
//! Directories are walked recursively with `glob`. Only files passing the
//! extension allowlist are read; the rest never reach the analyzer.

use crate::error::{Result, ScanError};
use crate::models::structure::SourceFile;
use crate::structure::is_accepted;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Compile exclusion globs (relative to the scan root).
pub fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ScanError::Glob {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Gather accepted files under `paths`, sorted by path relative to `root`.
///
/// An empty `paths` scans `root` itself.
pub fn collect_files(root: &Path, paths: &[PathBuf], exclude: &[Pattern]) -> Result<Vec<SourceFile>> {
    let targets: Vec<PathBuf> = if paths.is_empty() {
        vec![root.to_path_buf()]
    } else {
        paths
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { root.join(p) })
            .collect()
    };

    let mut found: Vec<(String, PathBuf)> = Vec::new();
    for target in targets {
        if target.is_file() {
            found.push((relative(root, &target), target));
        } else if target.is_dir() {
            // The directory itself is literal; only the walk suffix is a pattern.
            let pattern = format!("{}/**/*", Pattern::escape(&target.to_string_lossy()));
            let entries = glob(&pattern).map_err(|source| ScanError::Glob {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => found.push((relative(root, &path), path)),
                    Ok(_) => {}
                    Err(e) => warn!("skipping {}: {}", e.path().display(), e.error()),
                }
            }
        } else {
            return Err(ScanError::NotFound(target));
        }
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    found.dedup_by(|a, b| a.0 == b.0);

    let mut files = Vec::new();
    for (rel, abs) in found {
        let name = abs
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| rel.clone());
        if !is_accepted(&name) {
            continue;
        }
        if exclude.iter().any(|p| p.matches(&rel)) {
            debug!("excluded by config: {}", rel);
            continue;
        }
        let file = match fs::read(&abs) {
            Ok(bytes) => SourceFile::new(name, bytes),
            Err(e) => {
                warn!("failed to read {}: {}", abs.display(), e);
                SourceFile::unreadable(name)
            }
        };
        files.push(file.with_path(rel));
    }
    Ok(files)
}

/// Path of `path` relative to `root` with `/` separators.
fn relative(root: &Path, path: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .filter(|c| c != ".")
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, body: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, body).unwrap();
    }

    #[test]
    fn test_collect_walks_sorted_and_filters_extensions() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "app/src/main/AndroidManifest.xml", "<manifest/>");
        write(root, "app/build.gradle", "targetSdk = 35");
        write(root, "app/src/main/java/A.java", "class A {}");
        write(root, "app/src/main/res/logo.png", "png");
        write(root, "README.md", "# hi");

        let files = collect_files(root, &[], &[]).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
        assert_eq!(
            paths,
            vec![
                "app/build.gradle",
                "app/src/main/AndroidManifest.xml",
                "app/src/main/java/A.java",
            ]
        );
        assert_eq!(files[1].name, "AndroidManifest.xml");
        assert_eq!(files[0].content.as_deref(), Some(&b"targetSdk = 35"[..]));
    }

    #[test]
    fn test_collect_honors_excludes_and_explicit_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "app/build.gradle", "");
        write(root, "app/build/generated/R.java", "");
        write(root, "lib/B.kt", "");

        let excludes = compile_excludes(&["app/build/**".to_string()]).unwrap();
        let files = collect_files(root, &[PathBuf::from("app")], &excludes).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
        assert_eq!(paths, vec!["app/build.gradle"]);
    }

    #[test]
    fn test_collect_under_directory_with_glob_metacharacters() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("proj[1]");
        write(&root, "app/src/main/java/Main.java", "class Main {}");
        write(&root, "mod*/B.kt", "");

        let files = collect_files(&root, &[], &[]).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
        assert_eq!(paths, vec!["app/src/main/java/Main.java", "mod*/B.kt"]);

        let files = collect_files(&root, &[PathBuf::from("mod*")], &[]).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "B.kt");
    }

    #[test]
    fn test_missing_path_and_bad_glob_are_errors() {
        let dir = tempdir().unwrap();
        let err = collect_files(dir.path(), &[PathBuf::from("nope")], &[]).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
        assert!(compile_excludes(&["a/[".to_string()]).is_err());
    }
}
