use cryobank_cli::commands::{EvaluateOptions, evaluate_form, format_report, read_form};
use cryobank_cli::config::CryobankConfig;
use cryobank_core::models::diagnosis::DiagnosisCode;
use cryobank_core::models::form::RawDiagnosisForm;
use cryobank_core::models::recommendation::{Confidence, TreatmentType};
use cryobank_core::models::selection::SelectionSource;

fn config() -> CryobankConfig {
    CryobankConfig {
        clinician: "Dr. Haddad".to_string(),
        ..CryobankConfig::default()
    }
}

fn older_patient_form() -> RawDiagnosisForm {
    serde_json::from_value(serde_json::json!({
        "patientAge": "42",
        "infertilityDuration": "40",
        "previousIUIAttempts": "4",
        "tubalStatus": "normal",
        "ovulationStatus": "anovulatory",
        "amh": "0.5",
        "fsh": "15",
        "afc": "3",
        "treatmentType": "IUI",
        "notes": "Couple prefers to proceed quickly."
    }))
    .unwrap()
}

#[test]
fn evaluation_without_apply_keeps_manual_selection() {
    let options = EvaluateOptions {
        patient: Some("P-9".to_string()),
        ..Default::default()
    };
    let report = evaluate_form(&older_patient_form(), &options, &config()).unwrap();

    assert_eq!(report.patient_ref, "P-9");
    assert_eq!(report.evaluation.evidence.score, -14);
    assert_eq!(report.evaluation.recommendation.treatment, TreatmentType::Ivf);
    assert_eq!(report.evaluation.recommendation.confidence, Confidence::High);
    assert_eq!(report.selection.treatment, Some(TreatmentType::Iui));
    assert_eq!(report.selection.source, Some(SelectionSource::Manual));
    assert!(report.note.is_none());
    assert_eq!(
        report.diagnosis_codes,
        vec![
            DiagnosisCode::OvulatoryDysfunction,
            DiagnosisCode::DiminishedOvarianReserve,
        ]
    );
}

#[test]
fn apply_and_note_produce_a_complete_plan() {
    let options = EvaluateOptions {
        patient: Some("P-9".to_string()),
        apply: true,
        note: true,
        codes: vec!["dor".to_string()],
        notes: None,
    };
    let report = evaluate_form(&older_patient_form(), &options, &config()).unwrap();

    assert_eq!(report.selection.treatment, Some(TreatmentType::Ivf));
    assert_eq!(report.selection.source, Some(SelectionSource::Recommended));
    assert_eq!(report.diagnosis_codes, vec![DiagnosisCode::DiminishedOvarianReserve]);

    let note = report.note.as_deref().unwrap();
    assert!(note.contains("Treatment plan for P-9"));
    assert!(note.contains("by Dr. Haddad"));
    assert!(note.contains("Recommended treatment: IVF (High confidence)"));
    assert!(note.contains("Couple prefers to proceed quickly."));

    let text = format_report(&report);
    assert!(text.starts_with("Recommended treatment: IVF (High confidence)\nScore: -14\n"));
    assert!(text.contains("Selected treatment: IVF"));
}

#[test]
fn unknown_diagnosis_code_is_rejected() {
    let options = EvaluateOptions {
        codes: vec!["TF".to_string(), "nope".to_string()],
        ..Default::default()
    };
    let err = evaluate_form(&older_patient_form(), &options, &config()).unwrap_err();
    assert!(err.to_string().contains("unknown diagnosis code: nope"));
}

#[test]
fn report_json_flattens_the_evaluation() {
    let report = evaluate_form(
        &RawDiagnosisForm::default(),
        &EvaluateOptions::default(),
        &config(),
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["evidence"]["score"], 0);
    assert_eq!(json["recommendation"]["treatment"], "iui");
    assert_eq!(json["recommendation"]["confidence"], "low");
    assert!(json.get("note").is_none());
    // A generated patient reference is a UUID.
    assert!(uuid_like(json["patient_ref"].as_str().unwrap()));
}

#[test]
fn form_is_read_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    std::fs::write(&path, r#"{ "patientAge": "29", "tubalStatus": "blocked" }"#).unwrap();

    let form = read_form(Some(&path)).unwrap();
    assert_eq!(form.patient_age, "29");
    assert_eq!(form.tubal_status.as_deref(), Some("blocked"));

    let missing = read_form(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(missing.to_string().contains("failed to read form"));
}

fn uuid_like(s: &str) -> bool {
    s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
}
