use serde::{Deserialize, Serialize};

/// A hospital or clinic in the care directory. Immutable after seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub contact: String,
    pub rating: f64,
}
