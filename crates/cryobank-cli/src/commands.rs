use std::io::Read;
use std::path::Path;

use cryobank_audit::events::{
    AuditEvent, NOTE_COMPOSED, RECOMMENDATION_APPLIED, RECOMMENDATION_EVALUATED,
};
use cryobank_core::models::diagnosis::DiagnosisCode;
use cryobank_core::models::form::RawDiagnosisForm;
use cryobank_core::models::recommendation::TreatmentType;
use cryobank_core::models::selection::TreatmentSelection;
use cryobank_export::note::{NoteInput, compose_note, compose_note_with_template};
use cryobank_recommend::diagnosis::suggested_codes;
use cryobank_recommend::normalize::normalize;
use cryobank_recommend::{Evaluation, evaluate_detailed};
use serde::Serialize;

use crate::config::CryobankConfig;

/// Options for `cryobank evaluate`.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Patient reference for the note and audit trail.
    pub patient: Option<String>,
    /// Copy the recommended treatment into the selection.
    pub apply: bool,
    /// Compose the clinical note.
    pub note: bool,
    /// Diagnosis codes overriding the ones on the form.
    pub codes: Vec<String>,
    /// Clinician notes overriding the ones on the form.
    pub notes: Option<String>,
}

/// Everything `evaluate` produces, as printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReport {
    pub patient_ref: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub diagnosis_codes: Vec<DiagnosisCode>,
    pub selection: TreatmentSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn read_form(input: Option<&Path>) -> eyre::Result<RawDiagnosisForm> {
    let contents = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read form at {}: {e}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(RawDiagnosisForm::from_json(&contents)?)
}

/// Evaluate a diagnosis form and, on request, apply the result and compose
/// the treatment note.
pub fn evaluate_form(
    form: &RawDiagnosisForm,
    options: &EvaluateOptions,
    config: &CryobankConfig,
) -> eyre::Result<EvaluateReport> {
    let patient_ref = options
        .patient
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let observation = normalize(form);
    let evaluation = evaluate_detailed(&observation);
    let recommendation = &evaluation.recommendation;

    AuditEvent::new(
        RECOMMENDATION_EVALUATED,
        "treatment_plan",
        &patient_ref,
        &config.clinician,
    )
    .with_serialized_details(&serde_json::json!({
        "score": evaluation.evidence.score,
        "treatment": recommendation.treatment,
        "confidence": recommendation.confidence,
    }))?
    .emit();

    let raw_codes = if options.codes.is_empty() {
        &form.diagnosis_codes
    } else {
        &options.codes
    };
    let mut diagnosis_codes = raw_codes
        .iter()
        .map(|c| DiagnosisCode::from_code(c))
        .collect::<Result<Vec<_>, _>>()?;
    if diagnosis_codes.is_empty() {
        diagnosis_codes = suggested_codes(&observation);
    }

    let mut selection = form
        .treatment_type
        .as_deref()
        .and_then(TreatmentType::from_label)
        .map(TreatmentSelection::manual)
        .unwrap_or_default();

    if options.apply {
        selection.apply(recommendation);
        AuditEvent::new(
            RECOMMENDATION_APPLIED,
            "treatment_plan",
            &patient_ref,
            &config.clinician,
        )
        .with_serialized_details(&selection)?
        .emit();
    }

    let note = if options.note {
        let input = NoteInput {
            patient_ref: patient_ref.clone(),
            clinician: config.clinician.clone(),
            diagnosis_codes: diagnosis_codes.clone(),
            recommendation: recommendation.clone(),
            selection: selection.clone(),
            notes: options.notes.clone().unwrap_or_else(|| form.notes.clone()),
            recorded_at: jiff::Timestamp::now(),
        };
        let note = match &config.note_template {
            Some(path) => {
                let template = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read note template at {}: {e}", path.display())
                })?;
                compose_note_with_template(&input, &template)?
            }
            None => compose_note(&input)?,
        };
        AuditEvent::new(NOTE_COMPOSED, "treatment_note", &patient_ref, &config.clinician).emit();
        Some(note)
    } else {
        None
    };

    Ok(EvaluateReport {
        patient_ref,
        evaluation,
        diagnosis_codes,
        selection,
        note,
    })
}

/// Human-readable rendering of a report.
pub fn format_report(report: &EvaluateReport) -> String {
    let rec = &report.evaluation.recommendation;
    let mut out = format!(
        "Recommended treatment: {} ({} confidence)\nScore: {}\n",
        rec.treatment, rec.confidence, report.evaluation.evidence.score
    );
    if !rec.reasons.is_empty() {
        out.push_str("Reasons:\n");
        for reason in &rec.reasons {
            out.push_str(&format!("  - {reason}\n"));
        }
    }
    if !report.diagnosis_codes.is_empty() {
        let codes: Vec<_> = report.diagnosis_codes.iter().map(|d| d.to_string()).collect();
        out.push_str(&format!("Diagnosis: {}\n", codes.join(", ")));
    }
    if let Some(selected) = report.selection.treatment {
        out.push_str(&format!("Selected treatment: {selected}\n"));
    }
    if let Some(note) = &report.note {
        out.push('\n');
        out.push_str(note);
    }
    out
}
