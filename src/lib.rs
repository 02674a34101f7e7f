//! # Prescription Scan
//!
//! Turns text recognized from a scanned prescription image into candidate
//! medicines (name, dosage, timing) and derives the reminder entries a
//! health-records application schedules for the patient. The `history`
//! module covers the doctor side: filtering and ordering a patient's records
//! and the summary counts across patients.

pub mod config;
pub mod deduplication;
pub mod errors;
pub mod history;
pub mod input;
pub mod observability;
pub mod observability_config;
pub mod records;
pub mod reminders;
pub mod text_processing;
pub mod validation;

// Re-export types for easier access
pub use history::{HistoryFilter, PatientHistory, SummaryStats, TreatmentRecord};
pub use records::{PrescriptionRecord, PrescriptionScan, ReminderRecord};
pub use reminders::ReminderDraft;
pub use text_processing::{extract, CandidateMedicine, MedicineExtractor, Timing};
