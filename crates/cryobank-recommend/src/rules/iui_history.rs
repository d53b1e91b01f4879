use cryobank_core::models::observation::ClinicalObservation;

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const REPEATED_FAILURE: &str = "≥ 3 previous IUI attempts (IVF recommended)";

/// Three or more unsuccessful IUI cycles point to IVF.
pub struct PreviousIui;

impl Rule for PreviousIui {
    fn id(&self) -> RuleId {
        RuleId::PreviousIui
    }

    fn name(&self) -> &str {
        "Previous IUI attempts"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        (observation.previous_iui_attempts >= 3)
            .then(|| Finding::new(RuleId::PreviousIui, -3, REPEATED_FAILURE).implying_ivf())
    }
}
