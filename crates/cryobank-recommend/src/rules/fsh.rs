use cryobank_core::models::observation::ClinicalObservation;

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const ELEVATED: &str = "Elevated FSH (> 10 mIU/mL)";
pub const NORMAL: &str = "Normal FSH (≤ 10 mIU/mL)";

/// Follicle-stimulating hormone, mIU/mL.
pub struct Fsh;

impl Rule for Fsh {
    fn id(&self) -> RuleId {
        RuleId::Fsh
    }

    fn name(&self) -> &str {
        "FSH"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        let fsh = observation.fsh_miu_per_ml;
        if fsh > 10.0 {
            Some(Finding::new(RuleId::Fsh, -2, ELEVATED))
        } else if fsh > 0.0 {
            Some(Finding::new(RuleId::Fsh, 1, NORMAL))
        } else {
            None
        }
    }
}
