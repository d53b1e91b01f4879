use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The diagnosis form exactly as the clinician typed it.
///
/// Numeric inputs arrive as free text; blank or garbled values are legal and
/// are normalized to the zero sentinel by the recommendation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RawDiagnosisForm {
    pub patient_age: String,
    pub infertility_duration: String,
    #[serde(alias = "previousIUIAttempts")]
    pub previous_iui_attempts: String,
    pub tubal_status: Option<String>,
    pub ovulation_status: Option<String>,
    pub amh: String,
    pub fsh: String,
    pub afc: String,
    pub sperm_count: String,
    pub sperm_motility: String,
    pub sperm_morphology: String,
    /// Diagnosis codes ticked on the form, e.g. `["TF", "MF"]`.
    pub diagnosis_codes: Vec<String>,
    /// Free-text clinician notes.
    pub notes: String,
    /// Treatment type the clinician picked manually, if any.
    pub treatment_type: Option<String>,
}

impl RawDiagnosisForm {
    /// Parse a form submitted as JSON. Missing fields are blank.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
