use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::{Recommendation, TreatmentType};

/// Where the currently selected treatment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SelectionSource {
    Manual,
    Recommended,
}

/// The user-editable "treatment type" field of the diagnosis form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentSelection {
    pub treatment: Option<TreatmentType>,
    pub source: Option<SelectionSource>,
}

impl TreatmentSelection {
    pub fn manual(treatment: TreatmentType) -> Self {
        Self {
            treatment: Some(treatment),
            source: Some(SelectionSource::Manual),
        }
    }

    /// Copy the recommended treatment into the selection.
    ///
    /// Applying the same recommendation again leaves the selection unchanged.
    pub fn apply(&mut self, recommendation: &Recommendation) {
        self.treatment = Some(recommendation.treatment);
        self.source = Some(SelectionSource::Recommended);
    }

    /// Overwrite with a clinician's own choice.
    pub fn select(&mut self, treatment: TreatmentType) {
        self.treatment = Some(treatment);
        self.source = Some(SelectionSource::Manual);
    }

    /// True when a selection exists and differs from the recommendation.
    pub fn overrides(&self, recommendation: &Recommendation) -> bool {
        self.treatment
            .is_some_and(|selected| selected != recommendation.treatment)
    }
}
