//! # Patient History
//!
//! What a doctor sees when browsing one patient: treatment records filtered
//! by diagnosis and visit date, prescriptions and treatments newest first,
//! and the summary counts shown across all patients.

use crate::records::PrescriptionRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::debug;

/// Label counted for treatments without a diagnosis
pub const UNKNOWN_DIAGNOSIS: &str = "Unknown";

/// Treatment entry from the `records` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    pub patient_id: String,
    #[serde(default)]
    pub diagnosis: Option<String>,
    pub prescription: String,
    /// Visit date entered by the doctor
    pub date: NaiveDate,
    /// Store write time, absent until the store acknowledges the write
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Treatment history filter
///
/// A blank diagnosis needle matches everything. The date range is inclusive
/// on both ends and only applies when both bounds are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub diagnosis: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep treatments whose diagnosis contains `needle`, ignoring case
    pub fn diagnosis(mut self, needle: impl Into<String>) -> Self {
        self.diagnosis = Some(needle.into());
        self
    }

    /// Keep treatments dated between `from` and `to`, both included
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_range = Some((from, to));
        self
    }

    pub fn matches(&self, treatment: &TreatmentRecord) -> bool {
        if let Some(needle) = self.diagnosis_needle() {
            let hit = treatment
                .diagnosis
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        match self.date_range {
            Some((from, to)) => from <= treatment.date && treatment.date <= to,
            None => true,
        }
    }

    /// Matching treatments, in their original order
    pub fn apply<'a>(&self, treatments: &'a [TreatmentRecord]) -> Vec<&'a TreatmentRecord> {
        let kept: Vec<&TreatmentRecord> = treatments.iter().filter(|t| self.matches(t)).collect();
        debug!(
            total = treatments.len(),
            kept = kept.len(),
            diagnosis = ?self.diagnosis,
            date_range = ?self.date_range,
            "Filtered treatment history"
        );
        kept
    }

    fn diagnosis_needle(&self) -> Option<String> {
        self.diagnosis
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_lowercase)
    }
}

/// Order prescriptions by upload time, newest first
pub fn sort_prescriptions_newest_first(prescriptions: &mut [PrescriptionRecord]) {
    prescriptions.sort_by_key(|p| Reverse(p.uploaded_at));
}

/// Order treatments by store timestamp, newest first; unacknowledged ones last
pub fn sort_treatments_newest_first(treatments: &mut [TreatmentRecord]) {
    treatments.sort_by_key(|t| Reverse(t.timestamp));
}

/// One patient's prescriptions and treatments, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct PatientHistory {
    pub patient_id: String,
    pub prescriptions: Vec<PrescriptionRecord>,
    pub treatments: Vec<TreatmentRecord>,
}

impl PatientHistory {
    /// Gather the records of `patient_id` from full collections
    pub fn collect(
        patient_id: &str,
        prescriptions: &[PrescriptionRecord],
        treatments: &[TreatmentRecord],
    ) -> Self {
        let mut prescriptions: Vec<PrescriptionRecord> = prescriptions
            .iter()
            .filter(|p| p.patient_id == patient_id)
            .cloned()
            .collect();
        let mut treatments: Vec<TreatmentRecord> = treatments
            .iter()
            .filter(|t| t.patient_id == patient_id)
            .cloned()
            .collect();

        sort_prescriptions_newest_first(&mut prescriptions);
        sort_treatments_newest_first(&mut treatments);

        debug!(
            patient_id = %patient_id,
            prescriptions = prescriptions.len(),
            treatments = treatments.len(),
            "Collected patient history"
        );

        Self {
            patient_id: patient_id.to_string(),
            prescriptions,
            treatments,
        }
    }

    pub fn filtered_treatments(&self, filter: &HistoryFilter) -> Vec<&TreatmentRecord> {
        filter.apply(&self.treatments)
    }
}

/// Number of treatments recorded under one diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCount {
    pub name: String,
    pub count: usize,
}

/// Totals shown on the summary dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_patients: usize,
    pub total_prescriptions: usize,
    pub total_treatments: usize,
    /// In order of first appearance
    pub diagnosis_frequency: Vec<DiagnosisCount>,
}

impl SummaryStats {
    pub fn compute(
        total_patients: usize,
        prescriptions: &[PrescriptionRecord],
        treatments: &[TreatmentRecord],
    ) -> Self {
        let mut diagnosis_frequency: Vec<DiagnosisCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for treatment in treatments {
            let name = treatment
                .diagnosis
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(UNKNOWN_DIAGNOSIS);

            match index.get(name) {
                Some(&slot) => diagnosis_frequency[slot].count += 1,
                None => {
                    index.insert(name, diagnosis_frequency.len());
                    diagnosis_frequency.push(DiagnosisCount {
                        name: name.to_string(),
                        count: 1,
                    });
                }
            }
        }

        Self {
            total_patients,
            total_prescriptions: prescriptions.len(),
            total_treatments: treatments.len(),
            diagnosis_frequency,
        }
    }
}
