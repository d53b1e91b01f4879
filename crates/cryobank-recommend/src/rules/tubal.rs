use cryobank_core::models::observation::{ClinicalObservation, TubalStatus};

use crate::scoring::{Finding, RuleId};
use crate::Rule;

pub const BLOCKED: &str = "Blocked fallopian tubes (IVF required)";
pub const NORMAL: &str = "Normal fallopian tubes";

/// Tubal patency. Blocked tubes also trigger the resolver's IVF override.
pub struct Tubal;

impl Rule for Tubal {
    fn id(&self) -> RuleId {
        RuleId::Tubal
    }

    fn name(&self) -> &str {
        "Tubal status"
    }

    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding> {
        match observation.tubal_status {
            TubalStatus::Blocked => Some(Finding::new(RuleId::Tubal, -5, BLOCKED).implying_ivf()),
            TubalStatus::Normal => Some(Finding::new(RuleId::Tubal, 1, NORMAL)),
            TubalStatus::Unknown => None,
        }
    }
}
