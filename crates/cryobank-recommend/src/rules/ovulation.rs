use cryobank_core::models::observation::{ClinicalObservation, OvulationStatus};

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const ANOVULATORY: &str = "Anovulatory cycles";
pub const REGULAR: &str = "Regular ovulation";

/// Ovulatory pattern. Irregular cycles are neutral.
pub struct Ovulation;

impl Rule for Ovulation {
    fn id(&self) -> RuleId {
        RuleId::Ovulation
    }

    fn name(&self) -> &str {
        "Ovulation status"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        match observation.ovulation_status {
            OvulationStatus::Anovulatory => Some(Finding::new(RuleId::Ovulation, -1, ANOVULATORY)),
            OvulationStatus::Regular => Some(Finding::new(RuleId::Ovulation, 1, REGULAR)),
            OvulationStatus::Irregular | OvulationStatus::Unknown => None,
        }
    }
}
