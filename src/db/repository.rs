use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Doctor, Hospital, Symptom};

/// One specialist option for a city/specialty query: a doctor joined with
/// the hospital they work at, carried into the composed local context.
#[derive(Debug, Clone, PartialEq)]
pub struct CareOption {
    pub doctor_name: String,
    pub description: String,
    pub hospital_name: String,
    pub contact: String,
    pub rating: f64,
}

pub fn insert_hospital(
    conn: &Connection,
    name: &str,
    city: &str,
    contact: &str,
    rating: f64,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO hospitals (name, city, contact, rating) VALUES (?1, ?2, ?3, ?4)",
        params![name, city, contact, rating],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_doctor(
    conn: &Connection,
    name: &str,
    specialty: &str,
    hospital_id: Option<i64>,
    description: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (name, specialty, hospital_id, description)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, specialty, hospital_id, description],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_symptom(
    conn: &Connection,
    name: &str,
    causes: &str,
    specialists: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (name, causes, specialists) VALUES (?1, ?2, ?3)",
        params![name, causes, specialists],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All known symptom names in insertion order. This order is the matcher's
/// iteration order and therefore the order of extraction results.
pub fn symptom_names(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT name FROM symptoms ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Look up a symptom by name, case-insensitively.
pub fn find_symptom(conn: &Connection, name: &str) -> Result<Option<Symptom>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, name, causes, specialists FROM symptoms WHERE lower(name) = lower(?1)",
            params![name],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    Ok(row.map(|(id, name, causes, specialists)| Symptom {
        id,
        name,
        causes: Symptom::parse_labels(&causes),
        specialists: Symptom::parse_labels(&specialists),
    }))
}

/// Doctors of a given specialty at hospitals in a given city, best-rated
/// hospitals first, capped at `limit` rows.
pub fn hospitals_by_city_and_specialty(
    conn: &Connection,
    city: &str,
    specialty: &str,
    limit: usize,
) -> Result<Vec<CareOption>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT d.name, d.description, h.name, h.contact, h.rating
         FROM hospitals h
         JOIN doctors d ON h.id = d.hospital_id
         WHERE lower(h.city) = lower(?1) AND lower(d.specialty) = lower(?2)
         ORDER BY h.rating DESC LIMIT ?3",
    )?;

    let rows = stmt.query_map(params![city, specialty, limit as i64], |row| {
        Ok(CareOption {
            doctor_name: row.get(0)?,
            description: row.get(1)?,
            hospital_name: row.get(2)?,
            contact: row.get(3)?,
            rating: row.get(4)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn all_hospitals(conn: &Connection) -> Result<Vec<Hospital>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, city, contact, rating FROM hospitals ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Hospital {
            id: row.get(0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            contact: row.get(3)?,
            rating: row.get(4)?,
        })
    })?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, name, specialty, hospital_id, description FROM doctors ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Doctor {
            id: row.get(0)?,
            name: row.get(1)?,
            specialty: row.get(2)?,
            hospital_id: row.get(3)?,
            description: row.get(4)?,
        })
    })?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn seeded_conn() -> Connection {
        let conn = open_memory_database().unwrap();
        crate::db::seed::seed_if_empty(&conn).unwrap();
        conn
    }

    #[test]
    fn symptom_names_in_insertion_order() {
        let conn = seeded_conn();
        let names = symptom_names(&conn).unwrap();
        assert_eq!(names.first().map(String::as_str), Some("headache"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn find_symptom_case_insensitive() {
        let conn = seeded_conn();
        let symptom = find_symptom(&conn, "HEADACHE").unwrap().unwrap();
        assert_eq!(symptom.name, "headache");
        assert!(symptom.causes.contains(&"migraine".to_string()));
        assert_eq!(symptom.specialists[0], "neurologist");
    }

    #[test]
    fn find_symptom_unknown_is_none() {
        let conn = seeded_conn();
        assert!(find_symptom(&conn, "hiccups").unwrap().is_none());
    }

    #[test]
    fn care_options_ordered_by_rating_desc() {
        let conn = seeded_conn();
        let options =
            hospitals_by_city_and_specialty(&conn, "Bom Despacho", "general practitioner", 3)
                .unwrap();
        assert!(!options.is_empty());
        for pair in options.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn care_options_city_match_case_insensitive() {
        let conn = seeded_conn();
        let options =
            hospitals_by_city_and_specialty(&conn, "bom despacho", "Cardiologist", 3).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].doctor_name, "Dra. Ana Carvalho");
    }

    #[test]
    fn care_options_respect_limit() {
        let conn = open_memory_database().unwrap();
        for i in 0..5 {
            let hospital = insert_hospital(
                &conn,
                &format!("Hospital {i}"),
                "Testville",
                "555-0100",
                4.0 + i as f64 / 10.0,
            )
            .unwrap();
            insert_doctor(&conn, &format!("Dr. {i}"), "cardiologist", Some(hospital), "on call")
                .unwrap();
        }
        let options = hospitals_by_city_and_specialty(&conn, "Testville", "cardiologist", 3).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].doctor_name, "Dr. 4");
        assert!((options[0].rating - 4.4).abs() < 1e-9);
    }

    #[test]
    fn care_options_no_match_is_empty() {
        let conn = seeded_conn();
        let options = hospitals_by_city_and_specialty(&conn, "Nowhere", "cardiologist", 3).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn doctor_with_dangling_hospital_rejected() {
        let conn = open_memory_database().unwrap();
        let result = insert_doctor(&conn, "Dr. Ghost", "cardiologist", Some(999), "nowhere");
        assert!(result.is_err(), "dangling hospital reference should fail");
    }
}
