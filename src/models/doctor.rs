use serde::{Deserialize, Serialize};

/// A doctor in the care directory.
///
/// `specialty` is a free-text label, compared case-insensitively against
/// the specialist labels stored on symptoms. `hospital_id`, when present,
/// must resolve to an existing hospital (enforced by the schema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub hospital_id: Option<i64>,
    pub description: String,
}
