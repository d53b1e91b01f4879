use cryobank_core::models::observation::ClinicalObservation;

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const LOW: &str = "Low AMH (< 1.0 ng/mL)";
pub const NORMAL: &str = "Normal AMH (1.0-4.0 ng/mL)";

/// Anti-Müllerian hormone, ng/mL. Values above 4.0 are neutral.
pub struct Amh;

impl Rule for Amh {
    fn id(&self) -> RuleId {
        RuleId::Amh
    }

    fn name(&self) -> &str {
        "AMH"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        let amh = observation.amh_ng_per_ml;
        if amh > 0.0 && amh < 1.0 {
            Some(Finding::new(RuleId::Amh, -2, LOW))
        } else if (1.0..=4.0).contains(&amh) {
            Some(Finding::new(RuleId::Amh, 1, NORMAL))
        } else {
            None
        }
    }
}
