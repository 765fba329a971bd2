//! Built-in catalog of Android 15 migration rules.
//!
//! The catalog is compiled once on first use and never changes afterwards.
//! Its order is the order in which a file's issues are reported.

use crate::error::EvalError;
use crate::models::rule::{Rule, RuleCheck};
use crate::models::Severity;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// API level introduced by Android 15.
pub const TARGET_SDK: u32 = 35;

static CATALOG: OnceLock<Vec<Rule>> = OnceLock::new();

struct RuleDef {
    id: &'static str,
    pattern: &'static str,
    severity: Severity,
    title: &'static str,
    description: &'static str,
    check: RuleCheck,
}

const DEFS: &[RuleDef] = &[
    RuleDef {
        id: "target_sdk_35",
        pattern: r"targetSdkVersion\s+([0-9]+)|targetSdk\s*=\s*([0-9]+)",
        severity: Severity::Critical,
        title: "Target SDK Version Check",
        description: "Ensure your app targets Android 15 (API level 35) for full compatibility",
        check: RuleCheck::Conditional(check_target_sdk),
    },
    RuleDef {
        id: "photo_picker",
        pattern: r"ACTION_PICK|MediaStore\.Images|MediaStore\.Video",
        severity: Severity::Warning,
        title: "Photo/Video Access Changes",
        description: "Android 15 introduces enhanced security for partial photo and video access",
        check: RuleCheck::Static("Consider migrating to Photo Picker API for better user privacy"),
    },
    RuleDef {
        id: "background_activity",
        pattern: r"startActivity|startService.*BACKGROUND",
        severity: Severity::Warning,
        title: "Background Activity Restrictions",
        description: "Android 15 has stricter background activity launch restrictions",
        check: RuleCheck::Static(
            "Review background activity launches and consider using PendingIntent",
        ),
    },
    RuleDef {
        id: "edge_to_edge",
        pattern: r"WindowCompat\.setDecorFitsSystemWindows|android:fitsSystemWindows",
        severity: Severity::Info,
        title: "Edge-to-edge Enforcement",
        description: "Android 15 enforces edge-to-edge display for apps targeting API 35+",
        check: RuleCheck::Static("Ensure proper edge-to-edge implementation"),
    },
    RuleDef {
        id: "predictive_back",
        pattern: r"onBackPressed|OnBackPressedCallback",
        severity: Severity::Info,
        title: "Predictive Back Gesture",
        description: "Update back navigation handling for improved predictive back gesture",
        check: RuleCheck::Static(
            "Consider implementing OnBackInvokedCallback for better user experience",
        ),
    },
    RuleDef {
        id: "notification_changes",
        pattern: r"NotificationManager|createNotificationChannel",
        severity: Severity::Info,
        title: "Notification Experience Updates",
        description: "Android 15 introduces new notification features and behaviors",
        check: RuleCheck::Static("Review notification implementation for Android 15 enhancements"),
    },
    RuleDef {
        id: "java_version",
        pattern: r"sourceCompatibility|targetCompatibility|JavaVersion",
        severity: Severity::Warning,
        title: "Java Version Compatibility",
        description: "Android 15 includes OpenJDK 17 features and API updates",
        check: RuleCheck::Conditional(check_java_version),
    },
    RuleDef {
        id: "camera_api",
        pattern: r"Camera2|CameraX|MediaRecorder",
        severity: Severity::Info,
        title: "Camera and Media Improvements",
        description: "Android 15 includes camera and media performance improvements",
        check: RuleCheck::Static("Review camera implementation for potential optimizations"),
    },
    RuleDef {
        id: "performance_hints",
        pattern: r"PerformanceHintManager|PowerManager",
        severity: Severity::Info,
        title: "Dynamic Performance Framework",
        description: "Leverage Android 15 dynamic performance framework enhancements",
        check: RuleCheck::Static(
            "Consider implementing performance hints for better resource management",
        ),
    },
    RuleDef {
        id: "deprecated_apis",
        pattern: r"@Deprecated|\.setType\(|PackageManager\.GET_META_DATA",
        severity: Severity::Warning,
        title: "Deprecated API Usage",
        description: "Some APIs may be deprecated or changed in Android 15",
        check: RuleCheck::Static(
            "Review deprecated API usage and migrate to recommended alternatives",
        ),
    },
    RuleDef {
        id: "private_space",
        pattern: r"PackageManager\.MATCH_HIDDEN_UNTIL_INSTALLED_COMPONENTS",
        severity: Severity::Info,
        title: "Private Space Functionality",
        description: "Android 15 introduces private space functionality",
        check: RuleCheck::Static("Consider how private space affects app visibility and behavior"),
    },
    RuleDef {
        id: "notification_experience",
        pattern: r"NotificationManager|NotificationCompat|createNotificationChannel",
        severity: Severity::Info,
        title: "Notification Experience Updates",
        description: "Android 15 introduces new notification experience improvements",
        check: RuleCheck::Static("Review notification implementation for Android 15 enhancements"),
    },
    RuleDef {
        id: "scoped_storage",
        pattern: r"Environment\.getExternalStorageDirectory|MediaStore\.Files",
        severity: Severity::Warning,
        title: "Scoped Storage Compliance",
        description: "Ensure compliance with scoped storage requirements",
        check: RuleCheck::Static(
            "Use MediaStore APIs or Storage Access Framework for file operations",
        ),
    },
    RuleDef {
        id: "permission_changes",
        pattern: r"<uses-permission.*READ_EXTERNAL_STORAGE|WRITE_EXTERNAL_STORAGE",
        severity: Severity::Warning,
        title: "Storage Permission Changes",
        description: "Storage permissions behavior may change in Android 15",
        check: RuleCheck::Static(
            "Review storage permissions and consider granular photo/video permissions",
        ),
    },
    RuleDef {
        id: "work_profile",
        pattern: r"DevicePolicyManager|UserManager\.isUserAGoat",
        severity: Severity::Info,
        title: "Work Profile Enhancements",
        description: "Android 15 includes work profile and enterprise feature updates",
        check: RuleCheck::Static("Review work profile compatibility and enterprise features"),
    },
];

/// All rules in catalog order.
pub fn all_rules() -> &'static [Rule] {
    CATALOG.get_or_init(|| DEFS.iter().filter_map(compile).collect())
}

/// Look up a rule by id.
pub fn find(id: &str) -> Option<&'static Rule> {
    all_rules().iter().find(|r| r.id == id)
}

fn compile(def: &RuleDef) -> Option<Rule> {
    match Regex::new(def.pattern) {
        Ok(pattern) => Some(Rule {
            id: def.id,
            pattern,
            severity: def.severity,
            title: def.title,
            description: def.description,
            check: def.check,
        }),
        Err(e) => {
            tracing::error!("rule '{}' has an invalid pattern: {}", def.id, e);
            None
        }
    }
}

/// Flag the file when any declared target SDK is below [`TARGET_SDK`].
///
/// Declarations whose number does not parse are skipped; the others still count.
fn check_target_sdk(_content: &str, matches: &[Captures<'_>]) -> Result<Option<String>, EvalError> {
    let mut outdated = false;
    for caps in matches {
        let digits = caps
            .get(1)
            .or_else(|| caps.get(2))
            .ok_or_else(|| EvalError::MissingCapture {
                group: 1,
                matched: caps[0].to_string(),
            })?
            .as_str();
        match digits.parse::<u32>() {
            Ok(version) => outdated |= version < TARGET_SDK,
            Err(_) => tracing::debug!(
                "{}",
                EvalError::BadNumber {
                    value: digits.to_string()
                }
            ),
        }
    }
    Ok(outdated.then(|| {
        format!(
            "Consider updating targetSdkVersion to {} for Android 15 compatibility",
            TARGET_SDK
        )
    }))
}

/// Flag the file when it still mentions Java 1.8 anywhere.
fn check_java_version(content: &str, _matches: &[Captures<'_>]) -> Result<Option<String>, EvalError> {
    // Plain substring test; `JavaVersion.VERSION_1_8` and `1.8` literals both count.
    if content.contains("JavaVersion.VERSION_1_8") || content.contains("1.8") {
        return Ok(Some(
            "Consider updating to Java 17 features available in Android 15".to_string(),
        ));
    }
    Ok(None)
}
