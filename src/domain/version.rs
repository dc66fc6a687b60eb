//! Version coercion and comparison
//!
//! Declared versions in manifests are rarely concrete: `^1.2.3`, `~1.2`,
//! `>=1.0.0 <2.0.0`, `1.x`. Coercion reduces such expressions to the
//! best-effort concrete version they imply, matching npm's `semver.coerce`:
//! the first run of digits (with optional `.minor` and `.patch`) wins, and
//! anything without digits coerces to nothing.

use crate::domain::DiffClass;
use regex::Regex;
use semver::Version;
use std::cmp::Ordering;
use std::sync::OnceLock;

static COERCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn coerce_pattern() -> &'static Regex {
    COERCE_PATTERN.get_or_init(|| {
        Regex::new(r"(\d{1,16})(?:\.(\d{1,16}))?(?:\.(\d{1,16}))?").expect("valid literal pattern")
    })
}

/// Coerce a loosely-formed version expression into a concrete version
///
/// Returns `None` when the string contains nothing that looks like a version
/// (empty string, `*`, a dist-tag like `latest`, a git URL without digits).
pub fn coerce(raw: &str) -> Option<Version> {
    let caps = coerce_pattern().captures(raw.trim())?;
    let major: u64 = caps.get(1)?.as_str().parse().ok()?;
    let minor: u64 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let patch: u64 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    Some(Version::new(major, minor, patch))
}

/// Classify the gap between the current and latest versions
///
/// Follows npm's `semver.diff` rules: the leftmost differing segment names
/// the class, a `pre` prefix is added when the newer side is a prerelease,
/// and a stable release sitting directly above a prerelease of the same
/// version line reports the segment that stabilized.
pub fn classify(current: &Version, latest: &Version) -> DiffClass {
    let ordering = current.cmp_precedence(latest);
    if ordering == Ordering::Equal {
        return DiffClass::None;
    }

    let (low, high) = if ordering == Ordering::Greater {
        (latest, current)
    } else {
        (current, latest)
    };
    let high_is_pre = !high.pre.is_empty();
    let low_is_pre = !low.pre.is_empty();

    if low_is_pre && !high_is_pre {
        if low.minor == 0 && low.patch == 0 {
            return DiffClass::Major;
        }
        if low.major == high.major && low.minor == high.minor && low.patch == high.patch {
            if low.minor != 0 && low.patch == 0 {
                return DiffClass::Minor;
            }
            return DiffClass::Patch;
        }
    }

    if current.major != latest.major {
        if high_is_pre {
            DiffClass::Premajor
        } else {
            DiffClass::Major
        }
    } else if current.minor != latest.minor {
        if high_is_pre {
            DiffClass::Preminor
        } else {
            DiffClass::Minor
        }
    } else if current.patch != latest.patch {
        if high_is_pre {
            DiffClass::Prepatch
        } else {
            DiffClass::Patch
        }
    } else {
        DiffClass::Prerelease
    }
}
