use adrenal_core::{Assessment, ClinicalObservation, Conclusion, CtFindings, Growth, Referral};
use adrenal_report::{render, render_markdown, ReportError, ReportFormat};

fn sample() -> Assessment {
    let obs = ClinicalObservation {
        age: Some(30),
        referral_reason: Referral::Incidentaloma,
        ct: Some(CtFindings {
            size_cm: 0.5,
            hu_non_contrast: 8.0,
            growth: Growth::None,
            bilateral: false,
            heterogeneous: false,
            macroscopic_fat: false,
            cystic: false,
            calcification: false,
        }),
        contrast: None,
    };
    adrenal_rules::assess(&obs)
}

#[test]
fn markdown_lists_findings_and_bold_conclusion() {
    let md = render_markdown(&sample()).unwrap();
    assert!(md.starts_with("## Diagnostic Approach"));
    assert!(md.contains("- Referral risk: 3%\n"));
    assert!(md.contains("- Age risk: 4%\n"));
    assert!(md.contains("- Very probably benign (HU<10)\n"));
    assert!(md.contains("## Final Conclusion"));
    assert!(md.contains("**Very probably benign (HU<10)**"));
}

#[test]
fn findings_keep_rule_order() {
    let md = render_markdown(&sample()).unwrap();
    let referral = md.find("Referral risk").unwrap();
    let age = md.find("Age risk").unwrap();
    let size = md.find("- Very probably benign\n").unwrap();
    assert!(referral < age && age < size);
}

#[test]
fn sentinel_conclusion_is_not_bold() {
    let assessment = Assessment {
        findings: vec![],
        conclusion: Conclusion::none(),
    };
    let md = render_markdown(&assessment).unwrap();
    assert!(md.contains("- No findings."));
    assert!(md.contains(Conclusion::NO_CONCLUSION));
    assert!(!md.contains("**"));
}

#[test]
fn json_output_round_trips() {
    let assessment = sample();
    let json = render(&assessment, ReportFormat::Json).unwrap();
    let parsed: Assessment = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, assessment);
}

#[test]
fn format_parses_from_flags() {
    assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
    assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert!(matches!(
        "pdf".parse::<ReportFormat>(),
        Err(ReportError::UnknownFormat(_))
    ));
}
