/// Alarm phrases that short-circuit the whole pipeline. Matched as
/// case-insensitive substrings, not whole words: "heavy bleeding" and
/// "bleeding badly" must both trip the check.
const EMERGENCY_PHRASES: &[&str] = &[
    "intense chest pain",
    "severe shortness of breath",
    "fainting",
    "bleeding",
];

/// True when the text contains any alarm phrase. No side effects; the
/// caller must return the fixed emergency message and skip generation.
pub fn is_emergency(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EMERGENCY_PHRASES.iter().any(|p| lowered.contains(p))
}
