//! # Prescription Records
//!
//! Shapes exchanged with the external document store. A [`PrescriptionScan`]
//! is what one pass over recognized text produces; a [`PrescriptionRecord`]
//! adds the patient, upload and image details the store keys it by, and each
//! derived reminder is persisted as a [`ReminderRecord`] for the same patient.

use crate::reminders::{derive_reminders, ReminderDraft};
use crate::text_processing::{CandidateMedicine, MedicineExtractor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of scanning one prescription's recognized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionScan {
    /// Recognized text, trimmed
    pub extracted_text: String,
    pub medicines: Vec<CandidateMedicine>,
    pub reminders: Vec<ReminderDraft>,
}

impl PrescriptionScan {
    /// Extract medicines and derive their reminders
    pub fn from_text(extractor: &MedicineExtractor, text: &str) -> Self {
        let extracted_text = text.trim().to_string();
        let medicines = extractor.extract_medicines(&extracted_text);
        let reminders = derive_reminders(&medicines);

        Self {
            extracted_text,
            medicines,
            reminders,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Reminder documents for this scan, one per derived reminder
    pub fn reminder_records(&self, patient_id: &str, created_at: DateTime<Utc>) -> Vec<ReminderRecord> {
        self.reminders
            .iter()
            .map(|draft| ReminderRecord::new(patient_id, draft, created_at))
            .collect()
    }
}

/// Reminder as persisted in the `reminders` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    pub patient_id: String,
    pub medicine_name: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl ReminderRecord {
    pub fn new(patient_id: impl Into<String>, draft: &ReminderDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            patient_id: patient_id.into(),
            medicine_name: draft.medicine_name.clone(),
            time: draft.time.clone(),
            created_at,
        }
    }

    /// Reminders in `records` that belong to `patient_id`
    pub fn for_patient<'a>(records: &'a [ReminderRecord], patient_id: &str) -> Vec<&'a ReminderRecord> {
        records.iter().filter(|r| r.patient_id == patient_id).collect()
    }
}

/// Uploaded prescription as persisted in the `prescriptions` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRecord {
    /// Stable user identifier issued by the identity service
    pub patient_id: String,
    pub notes: String,
    /// URL returned by the image host
    pub image_url: String,
    pub extracted_text: String,
    pub medicines: Vec<CandidateMedicine>,
    pub uploaded_at: DateTime<Utc>,
}

impl PrescriptionRecord {
    pub fn new(
        patient_id: impl Into<String>,
        notes: impl Into<String>,
        image_url: impl Into<String>,
        scan: &PrescriptionScan,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            notes: notes.into(),
            image_url: image_url.into(),
            extracted_text: scan.extracted_text.clone(),
            medicines: scan.medicines.clone(),
            uploaded_at,
        }
    }
}
