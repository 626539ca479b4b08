use serde::{Deserialize, Serialize};

/// A known symptom with its possible causes and the specialists that
/// handle it. Names are unique under case-folding.
///
/// `specialists` order defines lookup priority, not just display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: i64,
    pub name: String,
    pub causes: Vec<String>,
    pub specialists: Vec<String>,
}

impl Symptom {
    /// Split a comma-joined label column into trimmed, non-empty labels.
    pub fn parse_labels(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
