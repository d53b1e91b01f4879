use cryobank_core::models::observation::ClinicalObservation;

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const YOUNG: &str = "Patient age < 35 years";
pub const ADVANCED: &str = "Patient age ≥ 40 years (IVF recommended)";

/// Patient age. Under 35 favours IUI, 40 and over points to IVF.
/// Ages 35-39 are neutral, as is an unknown age (0).
pub struct Age;

impl Rule for Age {
    fn id(&self) -> RuleId {
        RuleId::Age
    }

    fn name(&self) -> &str {
        "Patient age"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        match observation.patient_age_years {
            0 => None,
            1..35 => Some(Finding::new(RuleId::Age, 2, YOUNG)),
            40.. => Some(Finding::new(RuleId::Age, -3, ADVANCED).implying_ivf()),
            _ => None,
        }
    }
}
