use cryobank_core::models::diagnosis::DiagnosisCode;
use cryobank_core::models::observation::{ClinicalObservation, OvulationStatus, TubalStatus};

use crate::rules::semen::Semen;
use crate::Rule;

/// Propose diagnosis codes implied by the observation.
///
/// The result is sorted and free of duplicates. `Unexplained` is only
/// suggested when something was measured and nothing abnormal turned up.
pub fn suggested_codes(observation: &ClinicalObservation) -> Vec<DiagnosisCode> {
    let mut codes = Vec::new();

    if observation.tubal_status == TubalStatus::Blocked {
        codes.push(DiagnosisCode::TubalFactor);
    }

    if matches!(
        observation.ovulation_status,
        OvulationStatus::Anovulatory | OvulationStatus::Irregular
    ) {
        codes.push(DiagnosisCode::OvulatoryDysfunction);
    }

    let amh = observation.amh_ng_per_ml;
    let afc = observation.antral_follicle_count;
    if (amh > 0.0 && amh < 1.0) || observation.fsh_miu_per_ml > 10.0 || (1..5).contains(&afc) {
        codes.push(DiagnosisCode::DiminishedOvarianReserve);
    }

    if Semen
        .assess(observation)
        .is_some_and(|f| f.delta < 0)
    {
        codes.push(DiagnosisCode::MaleFactor);
    }

    if codes.is_empty() && has_any_measurement(observation) {
        codes.push(DiagnosisCode::Unexplained);
    }

    codes.sort();
    codes.dedup();
    codes
}

fn has_any_measurement(o: &ClinicalObservation) -> bool {
    o.tubal_status != TubalStatus::Unknown
        || o.ovulation_status != OvulationStatus::Unknown
        || o.amh_ng_per_ml > 0.0
        || o.fsh_miu_per_ml > 0.0
        || o.antral_follicle_count > 0
        || o.semen.is_complete()
}
