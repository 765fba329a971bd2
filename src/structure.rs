//! File acceptance and project-structure classification.
//!
//! Classification runs once over the whole accepted file set and yields the
//! structural findings (missing manifest, missing Gradle files, large project).

use crate::models::structure::{FileKind, ProjectStructure, SourceFile};
use crate::models::{Issue, Severity, PROJECT_STRUCTURE};

/// Extensions the analyzer looks at; compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = [".java", ".kt", ".xml", ".gradle", ".json"];

pub const MANIFEST_NAME: &str = "AndroidManifest.xml";

/// Projects with more files than this get an informational finding.
pub const LARGE_PROJECT_THRESHOLD: usize = 100;

/// Whether a file name passes the extension allowlist.
pub fn is_accepted(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Bucket accepted files by kind and collect their parent folders.
pub fn classify(files: &[SourceFile]) -> ProjectStructure {
    let mut structure = ProjectStructure {
        total_files: files.len(),
        ..ProjectStructure::default()
    };
    for file in files {
        let path = file.path();
        if let Some((folder, _)) = path.rsplit_once('/') {
            if !folder.is_empty() {
                structure.folders.insert(folder.to_string());
            }
        }

        let kind = if file.name.ends_with(".java") {
            Some(FileKind::Java)
        } else if file.name.ends_with(".kt") {
            Some(FileKind::Kotlin)
        } else if file.name.ends_with(".xml") {
            Some(FileKind::Xml)
        } else if file.name.ends_with(".gradle") {
            Some(FileKind::Gradle)
        } else {
            None
        };
        if let Some(kind) = kind {
            push(&mut structure, kind, path);
            if kind == FileKind::Xml && file.name == MANIFEST_NAME {
                push(&mut structure, FileKind::Manifest, path);
            }
        }
    }
    structure
}

fn push(structure: &mut ProjectStructure, kind: FileKind, path: &str) {
    structure
        .files_by_kind
        .entry(kind)
        .or_default()
        .push(path.to_string());
}

/// Project-level findings, always in manifest, gradle, size order.
pub fn structural_findings(structure: &ProjectStructure) -> Vec<Issue> {
    let mut issues = Vec::new();
    if structure.count(FileKind::Manifest) == 0 {
        issues.push(structural(
            "missing_manifest",
            Severity::Critical,
            "Missing AndroidManifest.xml",
            "No AndroidManifest.xml file found in the project".to_string(),
            "AndroidManifest.xml is required for Android applications",
        ));
    }
    if structure.count(FileKind::Gradle) == 0 {
        issues.push(structural(
            "missing_gradle",
            Severity::Warning,
            "No Gradle files found",
            "No build.gradle files found in the project".to_string(),
            "Gradle build files are recommended for Android projects",
        ));
    }
    if structure.total_files > LARGE_PROJECT_THRESHOLD {
        issues.push(structural(
            "large_project",
            Severity::Info,
            "Large Project Detected",
            format!("Project contains {} files", structure.total_files),
            "Consider modularizing large projects for better maintainability",
        ));
    }
    issues
}

fn structural(
    id: &str,
    severity: Severity,
    title: &str,
    description: String,
    message: &str,
) -> Issue {
    Issue {
        id: id.to_string(),
        severity,
        title: title.to_string(),
        description,
        message: message.to_string(),
        file: PROJECT_STRUCTURE.to_string(),
        occurrences: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> SourceFile {
        let name = path.rsplit('/').next().unwrap_or(path);
        SourceFile::new(name, "").with_path(path)
    }

    #[test]
    fn test_acceptance_is_case_insensitive_on_extension() {
        assert!(is_accepted("Main.java"));
        assert!(is_accepted("Main.JAVA"));
        assert!(is_accepted("strings.xml"));
        assert!(is_accepted("google-services.json"));
        assert!(is_accepted("build.gradle"));
        assert!(!is_accepted("build.gradle.kts"));
        assert!(!is_accepted("logo.png"));
        assert!(!is_accepted("README"));
    }

    #[test]
    fn test_classify_buckets_and_folders() {
        let files = vec![
            file("app/src/main/AndroidManifest.xml"),
            file("app/src/main/res/layout/activity_main.xml"),
            file("app/src/main/java/MainActivity.java"),
            file("app/src/main/java/Util.kt"),
            file("app/build.gradle"),
            file("settings.gradle"),
            file("app/google-services.json"),
        ];
        let s = classify(&files);
        assert_eq!(s.total_files, 7);
        assert_eq!(s.count(FileKind::Xml), 2);
        assert_eq!(s.files(FileKind::Manifest), ["app/src/main/AndroidManifest.xml"]);
        assert_eq!(s.count(FileKind::Java), 1);
        assert_eq!(s.count(FileKind::Kotlin), 1);
        assert_eq!(s.count(FileKind::Gradle), 2);
        // Root-level files contribute no folder.
        assert!(!s.folders.contains(""));
        assert!(s.folders.contains("app"));
        assert!(s.folders.contains("app/src/main/java"));
        assert_eq!(s.folders.len(), 4);
    }

    #[test]
    fn test_manifest_needs_exact_name() {
        let s = classify(&[file("androidmanifest.xml"), file("AndroidManifest.xml.bak.xml")]);
        assert_eq!(s.count(FileKind::Manifest), 0);
        assert_eq!(s.count(FileKind::Xml), 2);
    }

    #[test]
    fn test_missing_manifest_and_gradle_in_order() {
        let s = classify(&[file("Main.java")]);
        let issues = structural_findings(&s);
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["missing_manifest", "missing_gradle"]);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].file, PROJECT_STRUCTURE);
        assert_eq!(issues[0].occurrences, 0);
        assert_eq!(issues[1].severity, Severity::Warning);
    }

    #[test]
    fn test_large_project_threshold() {
        let mut files = vec![file("AndroidManifest.xml"), file("build.gradle")];
        files.extend((0..98).map(|i| file(&format!("src/F{}.java", i))));
        assert!(structural_findings(&classify(&files)).is_empty());

        files.push(file("src/Extra.java"));
        let issues = structural_findings(&classify(&files));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "large_project");
        assert_eq!(issues[0].severity, Severity::Info);
        assert!(issues[0].description.contains("101"));
    }
}
