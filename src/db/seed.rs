use std::collections::HashMap;

use rusqlite::Connection;

use super::repository::{insert_doctor, insert_hospital, insert_symptom};
use super::DatabaseError;

/// (name, city, contact, rating)
const SEED_HOSPITALS: &[(&str, &str, &str, f64)] = &[
    (
        "Hospital Santa Casa de Bom Despacho",
        "Bom Despacho",
        "(37) 3521-1234",
        4.5,
    ),
    ("Clínica Vida Mais", "Bom Despacho", "(37) 3522-9876", 4.3),
    (
        "Centro Médico Bom Despacho",
        "Bom Despacho",
        "(37) 3521-4567",
        4.4,
    ),
    (
        "Hospital São João de Deus",
        "Divinópolis",
        "(37) 3229-7500",
        4.7,
    ),
];

/// (name, specialty, hospital name, description)
const SEED_DOCTORS: &[(&str, &str, &str, &str)] = &[
    (
        "Dr. João Mendes",
        "general practitioner",
        "Hospital Santa Casa de Bom Despacho",
        "evaluates a broad range of symptoms and guides first care",
    ),
    (
        "Dra. Ana Carvalho",
        "cardiologist",
        "Centro Médico Bom Despacho",
        "specialist in chest pain and hypertension",
    ),
    (
        "Dr. Rafael Nogueira",
        "neurologist",
        "Clínica Vida Mais",
        "works with migraine, dizziness and sleep",
    ),
    (
        "Dra. Luiza Tavares",
        "gastroenterologist",
        "Hospital Santa Casa de Bom Despacho",
        "treats abdominal pain, reflux and gastritis",
    ),
    (
        "Dr. Pedro Lima",
        "pulmonologist",
        "Hospital São João de Deus",
        "sees asthma, cough and breathing difficulty",
    ),
];

/// (name, comma-joined causes, comma-joined specialists in priority order)
const SEED_SYMPTOMS: &[(&str, &str, &str)] = &[
    (
        "headache",
        "migraine,muscle tension,vision problems,sinusitis",
        "neurologist,general practitioner",
    ),
    (
        "chest pain",
        "angina,anxiety,muscle strain,acid reflux",
        "cardiologist,general practitioner",
    ),
    (
        "shortness of breath",
        "asthma,anxiety,lung disease,heart problems",
        "pulmonologist,cardiologist",
    ),
    (
        "fever",
        "viral infection,bacterial infection,common viruses",
        "infectious disease specialist,general practitioner",
    ),
    (
        "cough",
        "common cold,bronchitis,asthma,allergy",
        "pulmonologist,general practitioner",
    ),
    (
        "abdominal pain",
        "gastritis,ulcer,intestinal infection,appendicitis",
        "gastroenterologist,general practitioner",
    ),
];

/// Seed the care directory if it has never been seeded.
///
/// Returns true if rows were inserted. Running against an already-seeded
/// store is a no-op, so row counts never change on re-initialization.
pub fn seed_if_empty(conn: &Connection) -> Result<bool, DatabaseError> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM symptoms", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(false);
    }

    let mut hospital_ids: HashMap<&str, i64> = HashMap::new();
    for (name, city, contact, rating) in SEED_HOSPITALS {
        let id = insert_hospital(conn, name, city, contact, *rating)?;
        hospital_ids.insert(name, id);
    }

    for (name, specialty, hospital, description) in SEED_DOCTORS {
        let hospital_id = hospital_ids.get(hospital).copied();
        if hospital_id.is_none() {
            return Err(DatabaseError::ConstraintViolation(format!(
                "seed doctor {name} references unknown hospital {hospital}"
            )));
        }
        insert_doctor(conn, name, specialty, hospital_id, description)?;
    }

    for (name, causes, specialists) in SEED_SYMPTOMS {
        insert_symptom(conn, name, causes, specialists)?;
    }

    tracing::info!(
        hospitals = SEED_HOSPITALS.len(),
        doctors = SEED_DOCTORS.len(),
        symptoms = SEED_SYMPTOMS.len(),
        "Care directory seeded"
    );
    Ok(true)
}
