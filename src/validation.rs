//! Validation module for common validation patterns
//!
//! Input checks applied before data is handed to the external store:
//!
//! - Emergency health profile
//! - Manually entered reminders
//! - Uploaded prescription image type
//!
//! Errors are short message keys, suitable for lookup in a UI string table.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Emergency health information shown on a patient's public emergency page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyInfo {
    pub blood_group: String,
    /// Free text, may be empty
    pub allergies: String,
    pub emergency_contact: String,
}

/// Validates an emergency profile
///
/// # Returns
/// * `Ok(())` - Blood group and emergency contact are present
/// * `Err(&str)` - Error type: "blood-group-required" or "emergency-contact-required"
///
/// # Examples
/// ```
/// use prescription_scan::validation::{validate_emergency_info, EmergencyInfo};
///
/// let info = EmergencyInfo {
///     blood_group: "O+".to_string(),
///     allergies: String::new(),
///     emergency_contact: "+1 555 0100".to_string(),
/// };
/// assert!(validate_emergency_info(&info).is_ok());
/// assert_eq!(
///     validate_emergency_info(&EmergencyInfo::default()),
///     Err("blood-group-required")
/// );
/// ```
pub fn validate_emergency_info(info: &EmergencyInfo) -> Result<(), &'static str> {
    if info.blood_group.trim().is_empty() {
        return Err("blood-group-required");
    }

    if info.emergency_contact.trim().is_empty() {
        return Err("emergency-contact-required");
    }

    Ok(())
}

/// Validates a manually entered reminder
///
/// # Arguments
/// * `medicine_name` - Free-text medicine label, e.g. "Paracetamol 500mg"
/// * `time` - Clock time in "HH:MM" form
///
/// # Returns
/// * `Ok(NaiveTime)` - The parsed reminder time
/// * `Err(&str)` - Error type: "reminder-name-empty", "reminder-time-empty" or "reminder-time-invalid"
pub fn validate_reminder_input(medicine_name: &str, time: &str) -> Result<NaiveTime, &'static str> {
    if medicine_name.trim().is_empty() {
        return Err("reminder-name-empty");
    }

    let time = time.trim();
    if time.is_empty() {
        return Err("reminder-time-empty");
    }

    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| "reminder-time-invalid")
}

/// Validates the declared content type of an uploaded prescription
///
/// # Examples
/// ```
/// use prescription_scan::validation::validate_image_content_type;
///
/// assert!(validate_image_content_type("image/jpeg").is_ok());
/// assert_eq!(validate_image_content_type("application/pdf"), Err("upload-not-image"));
/// ```
pub fn validate_image_content_type(content_type: &str) -> Result<(), &'static str> {
    if content_type.trim().to_lowercase().starts_with("image/") {
        Ok(())
    } else {
        Err("upload-not-image")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_contact_required() {
        let info = EmergencyInfo {
            blood_group: "AB-".to_string(),
            allergies: "Penicillin".to_string(),
            emergency_contact: "   ".to_string(),
        };
        assert_eq!(
            validate_emergency_info(&info),
            Err("emergency-contact-required")
        );
    }

    #[test]
    fn test_allergies_are_optional() {
        let info = EmergencyInfo {
            blood_group: "B+".to_string(),
            allergies: String::new(),
            emergency_contact: "555-0199".to_string(),
        };
        assert!(validate_emergency_info(&info).is_ok());
    }

    #[test]
    fn test_reminder_input() {
        assert_eq!(
            validate_reminder_input("Aspirin", "07:45"),
            Ok(NaiveTime::from_hms_opt(7, 45, 0).unwrap())
        );
        assert_eq!(validate_reminder_input("", "07:45"), Err("reminder-name-empty"));
        assert_eq!(validate_reminder_input("Aspirin", " "), Err("reminder-time-empty"));
        assert_eq!(
            validate_reminder_input("Aspirin", "morning"),
            Err("reminder-time-invalid")
        );
    }

    #[test]
    fn test_image_content_type() {
        assert!(validate_image_content_type("image/png").is_ok());
        assert!(validate_image_content_type("IMAGE/PNG").is_ok());
        assert_eq!(validate_image_content_type(""), Err("upload-not-image"));
        assert_eq!(validate_image_content_type("text/plain"), Err("upload-not-image"));
    }
}
