//! Raw form text → [`ClinicalObservation`].
//!
//! Never fails. Blank, non-numeric, negative or non-finite input collapses to
//! the zero "not provided" sentinel; unrecognised enum labels become `Unknown`.

use cryobank_core::models::form::RawDiagnosisForm;
use cryobank_core::models::observation::{
    ClinicalObservation, OvulationStatus, SemenAnalysis, TubalStatus,
};

pub fn normalize(form: &RawDiagnosisForm) -> ClinicalObservation {
    ClinicalObservation {
        patient_age_years: parse_count(&form.patient_age),
        infertility_duration_months: parse_count(&form.infertility_duration),
        previous_iui_attempts: parse_count(&form.previous_iui_attempts),
        tubal_status: form
            .tubal_status
            .as_deref()
            .map(TubalStatus::from_label)
            .unwrap_or_default(),
        ovulation_status: form
            .ovulation_status
            .as_deref()
            .map(OvulationStatus::from_label)
            .unwrap_or_default(),
        amh_ng_per_ml: parse_measure(&form.amh),
        fsh_miu_per_ml: parse_measure(&form.fsh),
        antral_follicle_count: parse_count(&form.afc),
        semen: SemenAnalysis {
            sperm_concentration_million_per_ml: parse_measure(&form.sperm_count),
            sperm_motility_percent: parse_measure(&form.sperm_motility),
            sperm_morphology_percent: parse_measure(&form.sperm_morphology),
        },
    }
}

/// Parse a non-negative measurement, falling back to 0.
pub fn parse_measure(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parse a whole count. Decimal input is truncated ("34.9" → 34).
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<u32>() {
        return v;
    }
    // Float-to-int `as` saturates at u32::MAX.
    parse_measure(trimmed) as u32
}
