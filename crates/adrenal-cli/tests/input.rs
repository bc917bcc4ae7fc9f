use adrenal_cli::input::{assess_document, FormBatch};
use adrenal_core::{Assessment, Conclusion};
use adrenal_report::ReportFormat;

const SMALL_INCIDENTALOMA: &str = r#"{
    "age": 30,
    "referral": "Incidentaloma",
    "size_cm": 0.5,
    "hu_non_contrast": 15
}"#;

#[test]
fn single_form_renders_markdown() {
    let out = assess_document(SMALL_INCIDENTALOMA, ReportFormat::Markdown).unwrap();
    assert!(out.contains("- Referral risk: 3%"));
    assert!(out.contains("**Very probably benign**"));
    assert!(!out.contains("---"));
}

#[test]
fn single_form_renders_json_object() {
    let out = assess_document(SMALL_INCIDENTALOMA, ReportFormat::Json).unwrap();
    let assessment: Assessment = serde_json::from_str(&out).unwrap();
    assert_eq!(assessment.conclusion.text, "Very probably benign");
    assert_eq!(assessment.conclusion.importance, 4);
}

#[test]
fn batch_renders_json_array_in_input_order() {
    let input = format!(r#"[{SMALL_INCIDENTALOMA}, {{}}]"#);
    let batch = FormBatch::parse(&input).unwrap();
    assert_eq!(batch.len(), 2);

    let out = assess_document(&input, ReportFormat::Json).unwrap();
    let assessments: Vec<Assessment> = serde_json::from_str(&out).unwrap();
    assert_eq!(assessments.len(), 2);
    assert_eq!(assessments[0].conclusion.text, "Very probably benign");
    assert_eq!(assessments[1].conclusion, Conclusion::none());
}

#[test]
fn batch_markdown_separates_cases() {
    let input = format!(r#"[{SMALL_INCIDENTALOMA}, {SMALL_INCIDENTALOMA}]"#);
    let out = assess_document(&input, ReportFormat::Markdown).unwrap();
    assert_eq!(out.matches("## Final Conclusion").count(), 2);
    assert!(out.contains("\n---\n"));
}

#[test]
fn invalid_case_is_reported_by_position() {
    let input = r#"[{ "age": 40 }, { "age": 150 }]"#;
    let err = assess_document(input, ReportFormat::Markdown).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("case 2"), "{message}");
    assert!(message.contains("outside range"), "{message}");
}

#[test]
fn malformed_json_is_rejected() {
    assert!(FormBatch::parse("not json").is_err());
}

#[test]
fn misspelled_contrast_fields_are_rejected() {
    let input = r#"{"age":70,"size_cm":7,"hu_non_contrast":30,"hu_venus":150,"hu_dlayed":60}"#;
    let err = assess_document(input, ReportFormat::Json).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("case 1"), "{message}");
    assert!(message.contains("unknown field `hu_venus`"), "{message}");
}

#[test]
fn wrong_typed_value_names_field_and_case() {
    let single = r#"{"age":70,"size_cm":true,"hu_non_contrast":30}"#;
    let message = format!(
        "{:#}",
        assess_document(single, ReportFormat::Markdown).unwrap_err()
    );
    assert!(message.contains("case 1"), "{message}");
    assert!(message.contains("size_cm"), "{message}");

    let batch = r#"[{"age":70},{"age":40,"size_cm":[3],"hu_non_contrast":12}]"#;
    let message = format!(
        "{:#}",
        assess_document(batch, ReportFormat::Markdown).unwrap_err()
    );
    assert!(message.contains("case 2"), "{message}");
    assert!(message.contains("size_cm"), "{message}");
    assert!(!message.contains("untagged"), "{message}");
}

#[test]
fn non_object_case_is_reported_by_position() {
    let message = format!("{:#}", FormBatch::parse(r#"[{}, 42]"#).unwrap_err());
    assert!(message.contains("case 2"), "{message}");
}
