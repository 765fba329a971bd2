//! Per-file rule matching.
//!
//! Every rule in the catalog is run against one file's decoded text. Files are
//! independent of each other; nothing is cached between them.

use crate::models::rule::Rule;
use regex::Captures;

/// All matches of one rule in one file.
pub struct FileMatch<'r, 't> {
    pub rule: &'r Rule,
    pub captures: Vec<Captures<'t>>,
}

impl FileMatch<'_, '_> {
    pub fn occurrences(&self) -> usize {
        self.captures.len()
    }
}

/// Decode raw file bytes as UTF-8 text.
///
/// Returns `None` for content that is not valid UTF-8; such files produce no
/// rule matches. A leading byte-order mark is dropped.
pub fn decode(bytes: &[u8]) -> Option<&str> {
    let text = std::str::from_utf8(bytes).ok()?;
    Some(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Run `rules` against `content`, keeping only rules that matched at least once.
///
/// Results follow catalog order.
pub fn match_file<'r, 't>(rules: &'r [Rule], content: &'t str) -> Vec<FileMatch<'r, 't>> {
    rules
        .iter()
        .filter_map(|rule| {
            let captures: Vec<Captures<'t>> = rule.matches(content).collect();
            if captures.is_empty() {
                None
            } else {
                Some(FileMatch { rule, captures })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_rules;

    fn ids(found: &[FileMatch<'_, '_>]) -> Vec<&'static str> {
        found.iter().map(|m| m.rule.id).collect()
    }

    #[test]
    fn test_counts_non_overlapping_matches() {
        let text = "MediaStore.Images a; MediaStore.Video b; ACTION_PICK c;";
        let found = match_file(all_rules(), text);
        let photo = found.iter().find(|m| m.rule.id == "photo_picker").unwrap();
        assert_eq!(photo.occurrences(), 3);
    }

    #[test]
    fn test_results_follow_catalog_order() {
        // Both notification rules match; the earlier catalog entry comes first.
        let text = "NotificationManager nm; onBackPressed();";
        let found = ids(&match_file(all_rules(), text));
        assert_eq!(
            found,
            vec!["predictive_back", "notification_changes", "notification_experience"]
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let found = match_file(all_rules(), "notificationmanager ONBACKPRESSED");
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_content_has_no_matches() {
        assert!(match_file(all_rules(), "").is_empty());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8_and_strips_bom() {
        assert_eq!(decode(&[0xff, 0xfe, 0x00, 0x9f]), None);
        assert_eq!(decode("\u{feff}abc".as_bytes()), Some("abc"));
        assert_eq!(decode(b""), Some(""));
    }
}
