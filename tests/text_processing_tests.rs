#[cfg(test)]
mod tests {
    use prescription_scan::text_processing::{
        extract, CandidateMedicine, ExtractionConfig, MedicineExtractor, Timing,
    };

    fn create_extractor() -> MedicineExtractor {
        MedicineExtractor::new()
    }

    fn names(medicines: &[CandidateMedicine]) -> Vec<&str> {
        medicines.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(extract("").is_empty());
        assert!(extract("   \n  \n").is_empty());
        assert!(extract("\r\n\t\r\n").is_empty());
    }

    #[test]
    fn test_dosage_and_timing_extraction() {
        let medicines = extract("Paracetamol 500mg twice");

        assert_eq!(
            medicines,
            vec![CandidateMedicine {
                name: "Paracetamol".to_string(),
                dosage: "500mg".to_string(),
                timing: Timing::Twice,
            }]
        );
    }

    #[test]
    fn test_timing_fallback() {
        let medicines = extract("Amoxicillin 250mg");

        assert_eq!(medicines.len(), 1);
        assert_eq!(medicines[0].name, "Amoxicillin");
        assert_eq!(medicines[0].dosage, "250mg");
        assert_eq!(medicines[0].timing, Timing::Unspecified);
    }

    #[test]
    fn test_duplicate_name_keeps_first_occurrence() {
        let text = "Ibuprofen 200mg morning\nIbuprofen 400mg night";
        let medicines = extract(text);

        assert_eq!(medicines.len(), 1);
        assert_eq!(medicines[0].dosage, "200mg");
        assert_eq!(medicines[0].timing, Timing::Morning);
    }

    #[test]
    fn test_output_follows_input_order() {
        let text = "Zolpidem 10mg night\nAtorvastatin 20mg daily\nMetformin 500mg twice";
        let medicines = extract(text);

        assert_eq!(names(&medicines), vec!["Zolpidem", "Atorvastatin", "Metformin"]);
    }

    #[test]
    fn test_tablet_names_are_rejected() {
        assert!(extract("Tablet Xyz").is_empty());
        assert!(extract("Multivitamin tablets 1 daily").is_empty());
        assert!(extract("TABLET Crocin 650mg").is_empty());
    }

    #[test]
    fn test_short_names_are_rejected() {
        assert!(extract("Rx").is_empty());
        assert!(extract("Dr 5mg").is_empty());
        assert!(extract("B").is_empty());

        // Three characters is enough
        assert_eq!(names(&extract("Zyx 5mg")), vec!["Zyx"]);
    }

    #[test]
    fn test_lines_not_starting_with_letter_are_skipped() {
        let text = "1. Paracetamol 500mg\n(Cetirizine) 10mg night\n500mg once\n# Dolo 650mg";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_indentation_and_crlf_are_tolerated() {
        let text = "   Pantoprazole 40mg morning  \r\n\t\tDomperidone 10mg  \r\n";
        let medicines = extract(text);

        assert_eq!(names(&medicines), vec!["Pantoprazole", "Domperidone"]);
        assert_eq!(medicines[0].timing, Timing::Morning);
        assert_eq!(medicines[1].timing, Timing::Unspecified);
    }

    #[test]
    fn test_timing_is_case_insensitive() {
        let medicines = extract("Losartan 50mg ONCE");
        assert_eq!(medicines[0].timing, Timing::Once);

        let medicines = extract("Salbutamol Syrup 5ml Thrice");
        assert_eq!(medicines[0].name, "Salbutamol Syrup");
        assert_eq!(medicines[0].dosage, "5ml");
        assert_eq!(medicines[0].timing, Timing::Thrice);
    }

    #[test]
    fn test_source_case_is_preserved() {
        let medicines = extract("aMOXiclav 625mg evening");
        assert_eq!(medicines[0].name, "aMOXiclav");
        assert_eq!(medicines[0].timing, Timing::Evening);
    }

    #[test]
    fn test_noisy_ocr_block() {
        let text = "\
            City Clinic\n\
            Dr. A. Sharma MBBS\n\
            Rx\n\
            ~~~~\n\
            Azithromycin 500mg once\n\
            Tab Dolo 650mg twice\n\
            Tablet Pan 40mg\n\
            Azithromycin 250mg daily\n";
        let medicines = extract(text);

        // Header lines look like names too; the filters only drop short and packaging words
        assert_eq!(names(&medicines), vec!["City Clinic", "Azithromycin", "Tab Dolo"]);
        assert_eq!(medicines[1].timing, Timing::Once);
        assert_eq!(medicines[2].dosage, "650mg");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let text = "Paracetamol 500mg twice\nTablet XY\nCough Syrup 10ml morning\nParacetamol 500mg once";
        let medicines = create_extractor().extract_medicines(text);

        assert_eq!(
            medicines,
            vec![
                CandidateMedicine {
                    name: "Paracetamol".to_string(),
                    dosage: "500mg".to_string(),
                    timing: Timing::Twice,
                },
                CandidateMedicine {
                    name: "Cough Syrup".to_string(),
                    dosage: "10ml".to_string(),
                    timing: Timing::Morning,
                },
            ]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Paracetamol 500mg twice\nCough Syrup 10ml morning";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_shared_extractor_across_threads() {
        let extractor = std::sync::Arc::new(create_extractor());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = extractor.clone();
                std::thread::spawn(move || {
                    extractor.extract_medicines("Paracetamol 500mg twice\nCough Syrup 10ml morning")
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 2);
        }
    }

    #[test]
    fn test_arbitrary_input_never_panics() {
        let long_line = "a".repeat(10_000);
        let inputs = [
            "\u{0}\u{1}\u{2}",
            "💊💊💊\nAspirin 75mg daily",
            "))))((((\n\n\n",
            long_line.as_str(),
        ];
        for input in inputs {
            let _ = extract(input);
        }
    }

    #[test]
    fn test_accented_names() {
        let medicines = extract("Paracétamol 500mg soir\nÄÖÜ 5ml");

        assert_eq!(names(&medicines), vec!["Paracétamol", "ÄÖÜ"]);
        assert_eq!(medicines[0].dosage, "500mg");
        assert_eq!(medicines[1].dosage, "5ml");
    }

    #[test]
    fn test_custom_config_changes_filters() {
        let extractor = MedicineExtractor::with_config(ExtractionConfig {
            min_name_length: 2,
            rejected_name_fragments: vec![],
        })
        .unwrap();

        let medicines = extractor.extract_medicines("Rx\nTablet XY");
        assert_eq!(names(&medicines), vec!["Rx", "Tablet XY"]);
    }
}
