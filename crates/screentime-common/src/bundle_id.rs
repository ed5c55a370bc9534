use std::sync::LazyLock;

use regex::Regex;

static BUNDLE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9\-]*(\.[a-zA-Z0-9][a-zA-Z0-9\-]*)+$")
        .expect("bundle id pattern is a valid regex")
});

/// Structural check for reverse-DNS identifiers such as `com.apple.MobileSMS`.
///
/// Requires at least two dot-separated segments, each starting with an ASCII
/// letter or digit and otherwise containing only letters, digits and hyphens.
pub fn is_valid_bundle_id(bundle_id: &str) -> bool {
    BUNDLE_ID_PATTERN.is_match(bundle_id)
}
