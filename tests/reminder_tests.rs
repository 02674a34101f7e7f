#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, TimeZone, Utc};
    use prescription_scan::reminders::{derive_reminders, due_reminders, is_due};
    use prescription_scan::{extract, MedicineExtractor, PrescriptionRecord, PrescriptionScan, ReminderDraft};

    const PRESCRIPTION: &str = "Paracetamol 500mg twice\nTablet XY\nCough Syrup 10ml morning\nParacetamol 500mg once";

    #[test]
    fn test_reminders_follow_extracted_medicines() {
        let medicines = extract(PRESCRIPTION);
        let reminders = derive_reminders(&medicines);

        assert_eq!(
            reminders,
            vec![
                ReminderDraft {
                    medicine_name: "Paracetamol 500mg".to_string(),
                    time: "twice".to_string(),
                },
                ReminderDraft {
                    medicine_name: "Cough Syrup 10ml".to_string(),
                    time: "morning".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_derived_timing_hints_are_never_due() {
        let reminders = derive_reminders(&extract(PRESCRIPTION));

        for hour in 0..24 {
            let now = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
            assert!(due_reminders(&reminders, now).is_empty());
        }
    }

    #[test]
    fn test_manual_reminders_fire_on_their_minute() {
        let reminders = vec![
            ReminderDraft::manual("Levothyroxine 50mg", "06:30").unwrap(),
            ReminderDraft::manual("Atorvastatin 20mg", "22:15").unwrap(),
        ];

        let morning = NaiveTime::from_hms_opt(6, 30, 42).unwrap();
        let due = due_reminders(&reminders, morning);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].medicine_name, "Levothyroxine 50mg");

        assert!(is_due("22:15", NaiveTime::from_hms_opt(22, 15, 0).unwrap()));
        assert!(!is_due("22:15", NaiveTime::from_hms_opt(22, 16, 0).unwrap()));
    }

    #[test]
    fn test_scan_to_record_pipeline() {
        let scan = PrescriptionScan::from_text(&MedicineExtractor::new(), PRESCRIPTION);
        assert_eq!(scan.medicines.len(), 2);
        assert_eq!(scan.reminders.len(), 2);

        let record = PrescriptionRecord::new(
            "patient-42",
            "",
            "https://images.example/rx.png",
            &scan,
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        );

        assert_eq!(record.medicines, scan.medicines);
        assert_eq!(record.extracted_text, PRESCRIPTION);

        let json = serde_json::to_string(&scan).unwrap();
        assert!(json.contains("\"extractedText\""));
        assert!(json.contains("\"medicineName\":\"Cough Syrup 10ml\""));
    }
}
