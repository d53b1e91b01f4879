use cryobank_core::models::observation::{ClinicalObservation, SemenAnalysis};

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const NORMAL: &str = "Normal semen parameters";
pub const SEVERE: &str = "Severe male factor (IVF recommended)";
pub const MILD: &str = "Mild-moderate male factor";

/// Partner semen analysis (concentration M/mL, progressive motility %,
/// normal morphology %). Skipped unless all three values were measured.
pub struct Semen;

/// WHO lower reference limits used for a "normal" result.
const NORMAL_CONCENTRATION: f64 = 15.0;
const NORMAL_MOTILITY: f64 = 40.0;
const NORMAL_MORPHOLOGY: f64 = 4.0;

/// Below any of these the male factor is severe.
const SEVERE_CONCENTRATION: f64 = 5.0;
const SEVERE_MOTILITY: f64 = 20.0;
const SEVERE_MORPHOLOGY: f64 = 1.0;

fn is_normal(s: &SemenAnalysis) -> bool {
    s.sperm_concentration_million_per_ml >= NORMAL_CONCENTRATION
        && s.sperm_motility_percent >= NORMAL_MOTILITY
        && s.sperm_morphology_percent >= NORMAL_MORPHOLOGY
}

fn is_severe(s: &SemenAnalysis) -> bool {
    s.sperm_concentration_million_per_ml < SEVERE_CONCENTRATION
        || s.sperm_motility_percent < SEVERE_MOTILITY
        || s.sperm_morphology_percent < SEVERE_MORPHOLOGY
}

impl Rule for Semen {
    fn id(&self) -> RuleId {
        RuleId::Semen
    }

    fn name(&self) -> &str {
        "Semen analysis"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        let semen = &observation.semen;
        if !semen.is_complete() {
            return None;
        }
        let finding = if is_normal(semen) {
            Finding::new(RuleId::Semen, 2, NORMAL)
        } else if is_severe(semen) {
            Finding::new(RuleId::Semen, -3, SEVERE).implying_ivf()
        } else {
            Finding::new(RuleId::Semen, -1, MILD)
        };
        Some(finding)
    }
}
