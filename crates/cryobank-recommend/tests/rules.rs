use cryobank_core::models::observation::{
    ClinicalObservation, OvulationStatus, SemenAnalysis, TubalStatus,
};
use cryobank_recommend::rules::{afc, age, amh, duration, fsh, iui_history, ovulation, semen, tubal};
use cryobank_recommend::scoring::{accumulate, RuleId};
use cryobank_recommend::{all_rules, get_rule};

fn fired(obs: &ClinicalObservation, id: RuleId) -> Option<(i32, String)> {
    get_rule(id)
        .unwrap()
        .assess(obs)
        .map(|f| (f.delta, f.reason))
}

fn with_semen(c: f64, m: f64, p: f64) -> ClinicalObservation {
    ClinicalObservation {
        semen: SemenAnalysis {
            sperm_concentration_million_per_ml: c,
            sperm_motility_percent: m,
            sperm_morphology_percent: p,
        },
        ..Default::default()
    }
}

#[test]
fn rules_run_in_fixed_order() {
    let ids: Vec<RuleId> = all_rules().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![
            RuleId::Age,
            RuleId::InfertilityDuration,
            RuleId::PreviousIui,
            RuleId::Tubal,
            RuleId::Ovulation,
            RuleId::Amh,
            RuleId::Fsh,
            RuleId::Afc,
            RuleId::Semen,
        ]
    );
}

#[test]
fn empty_observation_fires_nothing() {
    let evidence = accumulate(&ClinicalObservation::default());
    assert_eq!(evidence.score, 0);
    assert!(evidence.findings.is_empty());
}

#[test]
fn age_bands() {
    let at = |years| ClinicalObservation {
        patient_age_years: years,
        ..Default::default()
    };
    assert_eq!(fired(&at(34), RuleId::Age), Some((2, age::YOUNG.to_string())));
    assert_eq!(fired(&at(35), RuleId::Age), None);
    assert_eq!(fired(&at(39), RuleId::Age), None);
    assert_eq!(fired(&at(40), RuleId::Age), Some((-3, age::ADVANCED.to_string())));
    assert_eq!(fired(&at(0), RuleId::Age), None);
}

#[test]
fn duration_bands() {
    let at = |months| ClinicalObservation {
        infertility_duration_months: months,
        ..Default::default()
    };
    let id = RuleId::InfertilityDuration;
    assert_eq!(fired(&at(11), id), Some((1, duration::SHORT.to_string())));
    assert_eq!(fired(&at(12), id), None);
    assert_eq!(fired(&at(35), id), None);
    assert_eq!(fired(&at(36), id), Some((-2, duration::LONG.to_string())));
}

#[test]
fn previous_iui_threshold() {
    let at = |n| ClinicalObservation {
        previous_iui_attempts: n,
        ..Default::default()
    };
    assert_eq!(fired(&at(2), RuleId::PreviousIui), None);
    assert_eq!(
        fired(&at(3), RuleId::PreviousIui),
        Some((-3, iui_history::REPEATED_FAILURE.to_string()))
    );
}

#[test]
fn tubal_and_ovulation_states() {
    let tubes = |t| ClinicalObservation {
        tubal_status: t,
        ..Default::default()
    };
    assert_eq!(
        fired(&tubes(TubalStatus::Blocked), RuleId::Tubal),
        Some((-5, tubal::BLOCKED.to_string()))
    );
    assert_eq!(
        fired(&tubes(TubalStatus::Normal), RuleId::Tubal),
        Some((1, tubal::NORMAL.to_string()))
    );
    assert_eq!(fired(&tubes(TubalStatus::Unknown), RuleId::Tubal), None);

    let ov = |o| ClinicalObservation {
        ovulation_status: o,
        ..Default::default()
    };
    assert_eq!(
        fired(&ov(OvulationStatus::Anovulatory), RuleId::Ovulation),
        Some((-1, ovulation::ANOVULATORY.to_string()))
    );
    assert_eq!(
        fired(&ov(OvulationStatus::Regular), RuleId::Ovulation),
        Some((1, ovulation::REGULAR.to_string()))
    );
    assert_eq!(fired(&ov(OvulationStatus::Irregular), RuleId::Ovulation), None);
}

#[test]
fn ovarian_reserve_bands() {
    let amh_at = |v| ClinicalObservation {
        amh_ng_per_ml: v,
        ..Default::default()
    };
    assert_eq!(fired(&amh_at(0.99), RuleId::Amh), Some((-2, amh::LOW.to_string())));
    assert_eq!(fired(&amh_at(1.0), RuleId::Amh), Some((1, amh::NORMAL.to_string())));
    assert_eq!(fired(&amh_at(4.0), RuleId::Amh), Some((1, amh::NORMAL.to_string())));
    assert_eq!(fired(&amh_at(4.5), RuleId::Amh), None);

    let fsh_at = |v| ClinicalObservation {
        fsh_miu_per_ml: v,
        ..Default::default()
    };
    assert_eq!(fired(&fsh_at(10.0), RuleId::Fsh), Some((1, fsh::NORMAL.to_string())));
    assert_eq!(fired(&fsh_at(10.1), RuleId::Fsh), Some((-2, fsh::ELEVATED.to_string())));

    let afc_at = |n| ClinicalObservation {
        antral_follicle_count: n,
        ..Default::default()
    };
    assert_eq!(fired(&afc_at(4), RuleId::Afc), Some((-2, afc::LOW.to_string())));
    assert_eq!(fired(&afc_at(5), RuleId::Afc), Some((1, afc::NORMAL.to_string())));
    assert_eq!(fired(&afc_at(15), RuleId::Afc), Some((1, afc::NORMAL.to_string())));
    assert_eq!(fired(&afc_at(16), RuleId::Afc), None);
}

#[test]
fn semen_requires_all_three_values() {
    assert_eq!(fired(&with_semen(40.0, 50.0, 0.0), RuleId::Semen), None);
    assert_eq!(fired(&with_semen(0.0, 50.0, 6.0), RuleId::Semen), None);
}

#[test]
fn semen_classification() {
    assert_eq!(
        fired(&with_semen(15.0, 40.0, 4.0), RuleId::Semen),
        Some((2, semen::NORMAL.to_string()))
    );
    assert_eq!(
        fired(&with_semen(4.9, 60.0, 6.0), RuleId::Semen),
        Some((-3, semen::SEVERE.to_string()))
    );
    assert_eq!(
        fired(&with_semen(30.0, 19.0, 6.0), RuleId::Semen),
        Some((-3, semen::SEVERE.to_string()))
    );
    assert_eq!(
        fired(&with_semen(30.0, 50.0, 0.5), RuleId::Semen),
        Some((-3, semen::SEVERE.to_string()))
    );
    assert_eq!(
        fired(&with_semen(10.0, 30.0, 2.0), RuleId::Semen),
        Some((-1, semen::MILD.to_string()))
    );
}

#[test]
fn ivf_flag_matches_reason_wording() {
    // Every reason any rule can emit, paired with an observation that fires it.
    let cases = [
        ClinicalObservation { patient_age_years: 30, ..Default::default() },
        ClinicalObservation { patient_age_years: 41, ..Default::default() },
        ClinicalObservation { infertility_duration_months: 3, ..Default::default() },
        ClinicalObservation { infertility_duration_months: 50, ..Default::default() },
        ClinicalObservation { previous_iui_attempts: 5, ..Default::default() },
        ClinicalObservation { tubal_status: TubalStatus::Blocked, ..Default::default() },
        ClinicalObservation { tubal_status: TubalStatus::Normal, ..Default::default() },
        ClinicalObservation { ovulation_status: OvulationStatus::Anovulatory, ..Default::default() },
        ClinicalObservation { ovulation_status: OvulationStatus::Regular, ..Default::default() },
        ClinicalObservation { amh_ng_per_ml: 0.3, ..Default::default() },
        ClinicalObservation { amh_ng_per_ml: 2.0, ..Default::default() },
        ClinicalObservation { fsh_miu_per_ml: 14.0, ..Default::default() },
        ClinicalObservation { fsh_miu_per_ml: 6.0, ..Default::default() },
        ClinicalObservation { antral_follicle_count: 2, ..Default::default() },
        ClinicalObservation { antral_follicle_count: 9, ..Default::default() },
        with_semen(50.0, 50.0, 5.0),
        with_semen(1.0, 10.0, 0.5),
        with_semen(10.0, 30.0, 2.0),
    ];

    let mut seen = 0;
    for obs in &cases {
        for finding in accumulate(obs).findings {
            let worded = finding.reason.contains("IVF") || finding.reason.contains("required");
            assert_eq!(finding.implies_ivf, worded, "{}", finding.reason);
            seen += 1;
        }
    }
    assert_eq!(seen, cases.len());
}
