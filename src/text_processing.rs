//! # Text Processing Module
//!
//! This module turns raw recognized text from a scanned prescription into
//! candidate medicines using regex-based line scanning.
//!
//! ## Features
//!
//! - Line-by-line scanning so a garbled line only drops itself
//! - Drug-name token detection, including multi-word names ("Cough Syrup")
//! - Dosage token detection for milligram and millilitre strengths ("500mg", "10ml")
//! - Schedule hint detection from a fixed timing vocabulary
//! - Noise filters for very short names and packaging words ("Tablet")
//! - First-occurrence deduplication that keeps source order

use crate::deduplication::dedup_by_name;
use crate::errors::{AppError, AppResult};
use crate::observability::metrics::{record_extraction_metrics, ExtractionMetrics};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, trace};

lazy_static! {
    // Name followed by a strength token; the lazy name stops at the first dosage.
    static ref DOSED_NAME_REGEX: Regex =
        Regex::new(r"^(?P<name>\p{Alphabetic}[\w\s]*?)\s*(?P<dosage>[0-9]+(?:mg|ml))")
            .expect("Dosed name pattern should be valid");
    static ref NAME_REGEX: Regex =
        Regex::new(r"^\p{Alphabetic}[\w\s]*").expect("Name pattern should be valid");
    static ref TIMING_REGEX: Regex =
        Regex::new(r"(?i)morning|evening|night|daily|once|twice|thrice")
            .expect("Timing pattern should be valid");
    static ref DEFAULT_EXTRACTOR: MedicineExtractor = MedicineExtractor::default();
}

/// Schedule hint attached to a candidate medicine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Morning,
    Evening,
    Night,
    Daily,
    Once,
    Twice,
    Thrice,
    /// No vocabulary word was found on the line
    Unspecified,
}

impl Timing {
    /// The recognized schedule words, in vocabulary order
    pub const VOCABULARY: [Timing; 7] = [
        Timing::Morning,
        Timing::Evening,
        Timing::Night,
        Timing::Daily,
        Timing::Once,
        Timing::Twice,
        Timing::Thrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::Morning => "morning",
            Timing::Evening => "evening",
            Timing::Night => "night",
            Timing::Daily => "daily",
            Timing::Once => "once",
            Timing::Twice => "twice",
            Timing::Thrice => "thrice",
            Timing::Unspecified => "unspecified",
        }
    }

    /// Find the leftmost schedule word anywhere in `line`, case-insensitively.
    ///
    /// The search is substring based, so "Nightcalm" yields [`Timing::Night`].
    pub fn detect(line: &str) -> Timing {
        TIMING_REGEX
            .find(line)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(Timing::Unspecified)
    }

    pub fn is_specified(&self) -> bool {
        *self != Timing::Unspecified
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timing {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Timing::Morning),
            "evening" => Ok(Timing::Evening),
            "night" => Ok(Timing::Night),
            "daily" => Ok(Timing::Daily),
            "once" => Ok(Timing::Once),
            "twice" => Ok(Timing::Twice),
            "thrice" => Ok(Timing::Thrice),
            "unspecified" => Ok(Timing::Unspecified),
            other => Err(AppError::Validation(format!(
                "'{}' is not a recognized timing",
                other
            ))),
        }
    }
}

/// A tentative medicine derived from one line of recognized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMedicine {
    /// Drug name, trimmed, with the source casing preserved (e.g., "Cough Syrup")
    pub name: String,
    /// Strength token such as "500mg" or "10ml", empty when absent
    pub dosage: String,
    /// Schedule hint; stored records call this field `time`
    #[serde(rename = "time")]
    pub timing: Timing,
}

impl CandidateMedicine {
    /// Display label used for reminders and summaries: "Paracetamol 500mg"
    pub fn label(&self) -> String {
        if self.dosage.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.dosage)
        }
    }
}

/// Why a line with a name-like token produced no candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Trimmed name shorter than the configured minimum
    TooShort,
    /// Lowercased name contains an excluded fragment such as "tablet"
    ExcludedFragment(String),
}

/// Result of scanning a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(CandidateMedicine),
    /// The line does not start with a drug-name token
    NoName,
    Rejected {
        name: String,
        reason: RejectionReason,
    },
}

/// Configuration options for medicine extraction
///
/// The defaults are the empirical noise filters the scanner has always used;
/// changing them changes which lines are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Names with fewer characters than this are dropped
    pub min_name_length: usize,
    /// Case-insensitive fragments that disqualify a name
    pub rejected_name_fragments: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            rejected_name_fragments: vec!["tablet".to_string()],
        }
    }
}

impl ExtractionConfig {
    /// Validate extraction configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.min_name_length == 0 {
            return Err(AppError::Config(
                "min_name_length must be greater than 0".to_string(),
            ));
        }

        for (i, fragment) in self.rejected_name_fragments.iter().enumerate() {
            if fragment.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "rejected_name_fragments[{}] cannot be empty",
                    i
                )));
            }
            if fragment.chars().any(|c| c.is_control()) {
                return Err(AppError::Config(format!(
                    "rejected_name_fragments[{}] '{}' contains control characters",
                    i, fragment
                )));
            }
        }

        Ok(())
    }
}

/// Medicine extractor for recognized prescription text
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MedicineExtractor {
    config: ExtractionConfig,
}

impl MedicineExtractor {
    /// Create an extractor with the default noise filters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prescription_scan::text_processing::MedicineExtractor;
    ///
    /// let extractor = MedicineExtractor::new();
    /// let medicines = extractor.extract_medicines("Paracetamol 500mg twice");
    /// assert_eq!(medicines[0].name, "Paracetamol");
    /// ```
    pub fn new() -> Self {
        debug!("Creating MedicineExtractor with default configuration");
        Self::default()
    }

    /// Create an extractor with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when the configuration does not validate.
    pub fn with_config(config: ExtractionConfig) -> AppResult<Self> {
        config.validate()?;
        debug!(
            min_name_length = config.min_name_length,
            rejected_fragments = ?config.rejected_name_fragments,
            "Creating MedicineExtractor with custom configuration"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract candidate medicines from recognized text
    ///
    /// ## Processing Flow
    ///
    /// ```text
    /// For each line in text:
    ///   Skip it if blank after trimming
    ///   Match the drug-name token (and the dosage token right after it, if any)
    ///   Find the leftmost timing word anywhere on the line
    ///   Drop names that are too short or contain an excluded fragment
    /// Deduplicate by exact name, first occurrence wins
    /// ```
    ///
    /// Never fails: text with nothing recognizable yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prescription_scan::text_processing::{MedicineExtractor, Timing};
    ///
    /// let extractor = MedicineExtractor::new();
    /// let text = "Paracetamol 500mg twice\nTablet XY\nCough Syrup 10ml morning";
    /// let medicines = extractor.extract_medicines(text);
    ///
    /// assert_eq!(medicines.len(), 2);
    /// assert_eq!(medicines[1].name, "Cough Syrup");
    /// assert_eq!(medicines[1].dosage, "10ml");
    /// assert_eq!(medicines[1].timing, Timing::Morning);
    /// ```
    pub fn extract_medicines(&self, text: &str) -> Vec<CandidateMedicine> {
        self.extract_with_stats(text).0
    }

    /// Same as [`extract_medicines`](Self::extract_medicines), also returning the per-call counts
    pub fn extract_with_stats(&self, text: &str) -> (Vec<CandidateMedicine>, ExtractionMetrics) {
        let start_time = Instant::now();
        let mut stats = ExtractionMetrics::default();
        let mut candidates = Vec::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            stats.lines_scanned += 1;
            match self.scan_line(line) {
                LineOutcome::Accepted(candidate) => {
                    trace!(line = %line, name = %candidate.name, "Accepted candidate");
                    candidates.push(candidate);
                }
                LineOutcome::NoName => {
                    stats.lines_without_name += 1;
                    trace!(line = %line, "Line has no drug-name token");
                }
                LineOutcome::Rejected { name, reason } => {
                    match reason {
                        RejectionReason::TooShort => stats.rejected_too_short += 1,
                        RejectionReason::ExcludedFragment(_) => stats.rejected_fragment += 1,
                    }
                    debug!(name = %name, reason = ?reason, "Rejected candidate name");
                }
            }
        }

        stats.duplicates_removed = dedup_by_name(&mut candidates);
        stats.candidates_accepted = candidates.len();
        stats.duration = start_time.elapsed();

        debug!(
            lines = stats.lines_scanned,
            accepted = stats.candidates_accepted,
            without_name = stats.lines_without_name,
            rejected = stats.rejected_total(),
            duplicates = stats.duplicates_removed,
            "Finished medicine extraction"
        );
        record_extraction_metrics(&stats);

        (candidates, stats)
    }

    /// Scan one line independently of its neighbours
    pub fn scan_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();

        let (raw_name, dosage) = match DOSED_NAME_REGEX.captures(line) {
            Some(caps) => (
                caps.name("name").map_or("", |m| m.as_str()),
                caps.name("dosage").map_or("", |m| m.as_str()),
            ),
            None => match NAME_REGEX.find(line) {
                Some(m) => (m.as_str(), ""),
                None => return LineOutcome::NoName,
            },
        };

        let name = raw_name.trim();
        if let Some(reason) = self.rejection_reason(name) {
            return LineOutcome::Rejected {
                name: name.to_string(),
                reason,
            };
        }

        LineOutcome::Accepted(CandidateMedicine {
            name: name.to_string(),
            dosage: dosage.to_string(),
            timing: Timing::detect(line),
        })
    }

    fn rejection_reason(&self, name: &str) -> Option<RejectionReason> {
        if name.chars().count() < self.config.min_name_length {
            return Some(RejectionReason::TooShort);
        }

        let lowered = name.to_lowercase();
        self.config
            .rejected_name_fragments
            .iter()
            .find(|fragment| lowered.contains(&fragment.to_lowercase()))
            .map(|fragment| RejectionReason::ExcludedFragment(fragment.clone()))
    }
}

/// Extract candidate medicines with the default extractor
///
/// ```rust
/// use prescription_scan::text_processing::{extract, Timing};
///
/// let medicines = extract("Amoxicillin 250mg");
/// assert_eq!(medicines[0].timing, Timing::Unspecified);
/// assert!(extract("   \n  \n").is_empty());
/// ```
pub fn extract(text: &str) -> Vec<CandidateMedicine> {
    DEFAULT_EXTRACTOR.extract_medicines(text)
}
