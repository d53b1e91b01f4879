//! cryobank-recommend
//!
//! Treatment recommendation engine. Pure and synchronous: no I/O, no shared
//! state. Maps a [`ClinicalObservation`] to an IUI/IVF recommendation with a
//! confidence tier and the clinical reasons behind it.
//!
//! The pipeline is normalize → accumulate → resolve:
//!
//! - [`normalize`] turns raw form text into an observation,
//! - [`scoring::accumulate`] runs every [`Rule`] in order and collects findings,
//! - [`resolve::resolve`] applies the tubal override and the score thresholds.

pub mod diagnosis;
pub mod normalize;
pub mod resolve;
pub mod rules;
pub mod scoring;

use cryobank_core::models::observation::ClinicalObservation;
use cryobank_core::models::recommendation::Recommendation;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use scoring::{Finding, RuleId, ScoreEvidence};

/// A clinical factor group that contributes to the treatment score.
///
/// Each rule owns one mutually exclusive group of conditions and fires at most
/// one of them per evaluation.
pub trait Rule: Send + Sync {
    /// Which factor group this rule scores.
    fn id(&self) -> RuleId;

    /// Human-readable name (e.g., "Patient age", "Semen analysis").
    fn name(&self) -> &str;

    /// Score the observation, returning the finding that fired, if any.
    fn assess(&self, observation: &ClinicalObservation) -> Option<Finding>;
}

/// Return every rule in evaluation order.
pub fn all_rules() -> &'static [&'static dyn Rule] {
    static RULES: [&dyn Rule; 9] = [
        &rules::age::Age,
        &rules::duration::InfertilityDuration,
        &rules::iui_history::PreviousIui,
        &rules::tubal::Tubal,
        &rules::ovulation::Ovulation,
        &rules::amh::Amh,
        &rules::fsh::Fsh,
        &rules::afc::Afc,
        &rules::semen::Semen,
    ];
    &RULES
}

/// Look up a rule by ID.
pub fn get_rule(id: RuleId) -> Option<&'static dyn Rule> {
    all_rules().iter().copied().find(|r| r.id() == id)
}

/// The full outcome of one evaluation: the score evidence and the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub evidence: ScoreEvidence,
    pub recommendation: Recommendation,
}

/// Recommend a treatment for the observation.
pub fn evaluate(observation: &ClinicalObservation) -> Recommendation {
    evaluate_detailed(observation).recommendation
}

/// Like [`evaluate`], but also returns the score and every fired finding.
pub fn evaluate_detailed(observation: &ClinicalObservation) -> Evaluation {
    let evidence = scoring::accumulate(observation);
    let recommendation = resolve::resolve(&evidence, observation.tubal_status);

    tracing::debug!(
        score = evidence.score,
        findings = evidence.findings.len(),
        treatment = %recommendation.treatment,
        confidence = %recommendation.confidence,
        "treatment recommendation evaluated"
    );

    Evaluation {
        evidence,
        recommendation,
    }
}
