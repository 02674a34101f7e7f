//! # Candidate Deduplication Module
//!
//! Prescriptions often repeat a drug on several lines (a refill note, a
//! second dosage schedule, an OCR double read). Only the first mention of a
//! name is kept, and the surviving entries stay in source order.

use crate::text_processing::CandidateMedicine;
use std::collections::HashSet;
use std::hash::Hash;

/// Remove later items whose key was already seen, keeping first occurrences in order
///
/// Returns the number of items removed.
pub fn dedup_by_key_stable<T, K, F>(items: &mut Vec<T>, mut key: F) -> usize
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(key(item)));
    before - items.len()
}

/// Deduplicate candidates by exact (case-sensitive) name
///
/// # Examples
///
/// ```rust
/// use prescription_scan::deduplication::dedup_by_name;
/// use prescription_scan::text_processing::{CandidateMedicine, Timing};
///
/// let make = |name: &str, dosage: &str| CandidateMedicine {
///     name: name.to_string(),
///     dosage: dosage.to_string(),
///     timing: Timing::Unspecified,
/// };
/// let mut candidates = vec![make("Paracetamol", "500mg"), make("Paracetamol", "650mg")];
///
/// assert_eq!(dedup_by_name(&mut candidates), 1);
/// assert_eq!(candidates[0].dosage, "500mg");
/// ```
pub fn dedup_by_name(candidates: &mut Vec<CandidateMedicine>) -> usize {
    dedup_by_key_stable(candidates, |c| c.name.clone())
}
