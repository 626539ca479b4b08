use std::path::{Path, PathBuf};

use rusqlite::Connection;

use super::repository::{self, CareOption};
use super::seed::seed_if_empty;
use super::sqlite::open_database;
use super::DatabaseError;
use crate::models::Symptom;

/// Read-only client for the care directory.
///
/// Holds only the database path: every logical query opens a fresh
/// connection and drops it when done. The per-call overhead is accepted as
/// an explicit policy — it keeps the store free of shared connection state
/// under the harness's unbounded background concurrency.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    db_path: PathBuf,
}

impl KnowledgeStore {
    /// Open the store at `path`, applying migrations and seeding the care
    /// directory when it has never been seeded.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let conn = open_database(path)?;
        seed_if_empty(&conn)?;
        Ok(Self {
            db_path: path.to_path_buf(),
        })
    }

    fn connect(&self) -> Result<Connection, DatabaseError> {
        open_database(&self.db_path)
    }

    /// All known symptom names in store order.
    pub fn symptom_names(&self) -> Result<Vec<String>, DatabaseError> {
        let conn = self.connect()?;
        repository::symptom_names(&conn)
    }

    /// Look up one symptom record by name, case-insensitively.
    pub fn symptom(&self, name: &str) -> Result<Option<Symptom>, DatabaseError> {
        let conn = self.connect()?;
        repository::find_symptom(&conn, name)
    }

    /// Specialist options in a city, best-rated hospitals first.
    pub fn care_options(
        &self,
        city: &str,
        specialty: &str,
        limit: usize,
    ) -> Result<Vec<CareOption>, DatabaseError> {
        let conn = self.connect()?;
        repository::hospitals_by_city_and_specialty(&conn, city, specialty, limit)
    }
}
