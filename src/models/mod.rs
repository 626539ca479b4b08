pub mod doctor;
pub mod hospital;
pub mod symptom;

pub use doctor::Doctor;
pub use hospital::Hospital;
pub use symptom::Symptom;
