//! # Medicine Reminders
//!
//! Derives reminder entries from extracted medicines and decides which
//! reminders are due at a given wall-clock minute. Persisting reminders and
//! running the periodic check are left to the embedding application.

use crate::errors::{error_logging, AppError, AppResult};
use crate::observability::metrics::record_reminder_metrics;
use crate::text_processing::CandidateMedicine;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A reminder entry ready to be persisted by the external store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDraft {
    /// "Paracetamol 500mg", or just the name when there is no dosage
    pub medicine_name: String,
    /// Either a timing hint ("twice", "unspecified") or a clock time "HH:MM"
    pub time: String,
}

impl ReminderDraft {
    /// Build a reminder from a manually entered medicine and clock time
    ///
    /// The stored time is re-formatted as zero-padded "HH:MM", so "8:30"
    /// becomes "08:30" and matches the clock in [`is_due`].
    pub fn manual(medicine_name: &str, time: &str) -> AppResult<Self> {
        let parsed = crate::validation::validate_reminder_input(medicine_name, time).map_err(|e| {
            error_logging::log_validation_error(&e, "add_reminder", "reminder", Some(time));
            AppError::Validation(e.to_string())
        })?;

        Ok(Self {
            medicine_name: medicine_name.trim().to_string(),
            time: parsed.format("%H:%M").to_string(),
        })
    }

    /// Check whether this reminder fires at `now`
    pub fn is_due(&self, now: NaiveTime) -> bool {
        is_due(&self.time, now)
    }
}

/// Derive one reminder per candidate medicine, in the same order
pub fn derive_reminders(medicines: &[CandidateMedicine]) -> Vec<ReminderDraft> {
    let drafts: Vec<ReminderDraft> = medicines
        .iter()
        .map(|m| ReminderDraft {
            medicine_name: m.label(),
            time: m.timing.to_string(),
        })
        .collect();

    let unspecified = medicines
        .iter()
        .filter(|m| !m.timing.is_specified())
        .count();
    info!(
        reminders = drafts.len(),
        unspecified_timing = unspecified,
        "Derived reminders from extracted medicines"
    );
    record_reminder_metrics(drafts.len(), unspecified);

    drafts
}

/// Normalize a stored reminder time to its "HH:MM" key
///
/// Takes the first five characters after trimming, so "08:30:00" becomes "08:30".
/// Timing hints are shortened the same way and never match a clock minute.
pub fn reminder_time_key(time: &str) -> &str {
    let trimmed = time.trim();
    match trimmed.char_indices().nth(5) {
        Some((idx, _)) => &trimmed[..idx],
        None => trimmed,
    }
}

/// True when `time` names the same hour and minute as `now`
pub fn is_due(time: &str, now: NaiveTime) -> bool {
    reminder_time_key(time) == now.format("%H:%M").to_string()
}

/// Select the reminders that fire at `now`
pub fn due_reminders(reminders: &[ReminderDraft], now: NaiveTime) -> Vec<&ReminderDraft> {
    let current = now.format("%H:%M").to_string();
    debug!(current_time = %current, "Checking reminders");

    reminders
        .iter()
        .filter(|r| reminder_time_key(&r.time) == current)
        .inspect(|r| debug!(medicine = %r.medicine_name, "Reminder matched"))
        .collect()
}
