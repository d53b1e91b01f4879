use cryobank_core::models::observation::ClinicalObservation;

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const SHORT: &str = "Infertility duration < 12 months";
pub const LONG: &str = "Infertility duration ≥ 36 months";

/// Time trying to conceive, in months.
pub struct InfertilityDuration;

impl Rule for InfertilityDuration {
    fn id(&self) -> RuleId {
        RuleId::InfertilityDuration
    }

    fn name(&self) -> &str {
        "Infertility duration"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        match observation.infertility_duration_months {
            0 => None,
            1..12 => Some(Finding::new(RuleId::InfertilityDuration, 1, SHORT)),
            36.. => Some(Finding::new(RuleId::InfertilityDuration, -2, LONG)),
            _ => None,
        }
    }
}
