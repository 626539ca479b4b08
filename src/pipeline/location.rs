use std::sync::LazyLock;

use regex::Regex;

/// "in"/"at" as a whole word, then a run of letters (accented included)
/// and spaces. The first match wins; the capture is taken as-is.
static CITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in|at)\s+([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ ]*)")
        .expect("Invalid city pattern")
});

/// Extract an optional city mention from free text.
///
/// No validation that the captured fragment is a real city — any
/// grammatically matching run is accepted, trimmed.
pub fn extract_city(text: &str) -> Option<String> {
    CITY_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|city| !city.is_empty())
}
