use cryobank_core::models::observation::ClinicalObservation;

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const LOW: &str = "Low AFC (< 5)";
pub const NORMAL: &str = "Normal AFC (5-15)";

/// Antral follicle count from ultrasound. Counts above 15 are neutral.
pub struct Afc;

impl Rule for Afc {
    fn id(&self) -> RuleId {
        RuleId::Afc
    }

    fn name(&self) -> &str {
        "Antral follicle count"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        match observation.antral_follicle_count {
            0 => None,
            1..5 => Some(Finding::new(RuleId::Afc, -2, LOW)),
            5..=15 => Some(Finding::new(RuleId::Afc, 1, NORMAL)),
            _ => None,
        }
    }
}
