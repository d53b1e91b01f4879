use cryobank_core::models::diagnosis::DiagnosisCode;
use cryobank_core::models::recommendation::Recommendation;
use cryobank_core::models::selection::{SelectionSource, TreatmentSelection};
use serde::Serialize;

use crate::error::ExportError;
use crate::render::render_template;

pub const NOTE_TEMPLATE_NAME: &str = "treatment_note.txt";

/// Built-in note layout. Can be replaced per clinic with
/// [`compose_note_with_template`].
pub const DEFAULT_NOTE_TEMPLATE: &str = "\
Treatment plan for {{ patient_ref }}
Recorded {{ recorded_at }} by {{ clinician }}

Diagnosis: {% if diagnoses %}{% for d in diagnoses %}{{ d.code }} ({{ d.label }}){% if not loop.last %}, {% endif %}{% endfor %}{% else %}not recorded{% endif %}
Recommended treatment: {{ recommended_treatment }} ({{ confidence }} confidence)
{% if reasons %}Reasons:
{% for r in reasons %}- {{ r }}
{% endfor %}{% endif %}Selected treatment: {% if selected_treatment %}{{ selected_treatment }} ({{ selection_source }}){% if overrides %}, overrides recommendation{% endif %}{% else %}not selected{% endif %}
{% if notes %}
Notes:
{{ notes }}
{% endif %}";

/// Everything that goes into a treatment note.
#[derive(Debug, Clone)]
pub struct NoteInput {
    pub patient_ref: String,
    pub clinician: String,
    pub diagnosis_codes: Vec<DiagnosisCode>,
    pub recommendation: Recommendation,
    pub selection: TreatmentSelection,
    pub notes: String,
    pub recorded_at: jiff::Timestamp,
}

#[derive(Debug, Serialize)]
struct DiagnosisEntry {
    code: &'static str,
    label: &'static str,
}

/// Flattened, string-only view of a [`NoteInput`] handed to Tera.
#[derive(Debug, Serialize)]
struct NoteContext<'a> {
    patient_ref: &'a str,
    clinician: &'a str,
    recorded_at: String,
    diagnoses: Vec<DiagnosisEntry>,
    recommended_treatment: &'static str,
    confidence: &'static str,
    reasons: &'a [String],
    selected_treatment: &'static str,
    selection_source: &'static str,
    overrides: bool,
    notes: &'a str,
}

impl<'a> From<&'a NoteInput> for NoteContext<'a> {
    fn from(input: &'a NoteInput) -> Self {
        let selection = &input.selection;
        Self {
            patient_ref: &input.patient_ref,
            clinician: &input.clinician,
            recorded_at: input.recorded_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            diagnoses: input
                .diagnosis_codes
                .iter()
                .map(|d| DiagnosisEntry {
                    code: d.code(),
                    label: d.label(),
                })
                .collect(),
            recommended_treatment: input.recommendation.treatment.as_str(),
            confidence: input.recommendation.confidence.as_str(),
            reasons: &input.recommendation.reasons,
            selected_treatment: selection.treatment.map(|t| t.as_str()).unwrap_or(""),
            selection_source: match selection.source {
                Some(SelectionSource::Recommended) => "applied from recommendation",
                Some(SelectionSource::Manual) => "clinician choice",
                None => "",
            },
            overrides: selection.overrides(&input.recommendation),
            notes: input.notes.trim(),
        }
    }
}

/// Compose the clinical note with the built-in template.
pub fn compose_note(input: &NoteInput) -> Result<String, ExportError> {
    compose_note_with_template(input, DEFAULT_NOTE_TEMPLATE)
}

/// Compose the clinical note with a caller-supplied Tera template.
pub fn compose_note_with_template(
    input: &NoteInput,
    template: &str,
) -> Result<String, ExportError> {
    let context = NoteContext::from(input);
    let note = render_template(NOTE_TEMPLATE_NAME, template, &context)?;
    tracing::debug!(
        patient_ref = %input.patient_ref,
        codes = input.diagnosis_codes.len(),
        bytes = note.len(),
        "treatment note composed"
    );
    Ok(note)
}
