use cryobank_core::models::observation::ClinicalObservation;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::all_rules;

/// The clinical factor group a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleId {
    Age,
    InfertilityDuration,
    PreviousIui,
    Tubal,
    Ovulation,
    Amh,
    Fsh,
    Afc,
    Semen,
}

/// One rule that fired during accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub rule: RuleId,
    /// Signed contribution to the score.
    pub delta: i32,
    pub reason: String,
    /// Set for findings that on their own point to IVF. Only these survive
    /// into an IVF recommendation's reason list.
    pub implies_ivf: bool,
}

impl Finding {
    pub fn new(rule: RuleId, delta: i32, reason: impl Into<String>) -> Self {
        Self {
            rule,
            delta,
            reason: reason.into(),
            implies_ivf: false,
        }
    }

    /// Mark this finding as pointing to IVF.
    pub fn implying_ivf(mut self) -> Self {
        self.implies_ivf = true;
        self
    }
}

/// Accumulated score and the findings that produced it, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEvidence {
    pub score: i32,
    pub findings: Vec<Finding>,
}

impl ScoreEvidence {
    pub fn push(&mut self, finding: Finding) {
        self.score += finding.delta;
        self.findings.push(finding);
    }

    /// Reason texts in the order the rules fired.
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().map(|f| f.reason.as_str())
    }
}

/// Run every rule against the observation.
pub fn accumulate(observation: &ClinicalObservation) -> ScoreEvidence {
    let mut evidence = ScoreEvidence::default();
    for rule in all_rules() {
        if let Some(finding) = rule.assess(observation) {
            tracing::trace!(
                rule = rule.name(),
                delta = finding.delta,
                reason = %finding.reason,
                "rule fired"
            );
            evidence.push(finding);
        }
    }
    evidence
}
