use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structured clinical observations for one couple, as consumed by the
/// recommendation engine.
///
/// Every numeric field uses zero as the "not provided" sentinel and `Unknown`
/// plays the same role for the enums. A field at its sentinel never moves the
/// score. Note that this conflates "not measured" with "measured as zero": a
/// true sperm concentration of 0 (azoospermia) is indistinguishable from a
/// blank field and is treated as blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalObservation {
    pub patient_age_years: u32,
    pub infertility_duration_months: u32,
    pub previous_iui_attempts: u32,
    #[serde(default)]
    pub tubal_status: TubalStatus,
    #[serde(default)]
    pub ovulation_status: OvulationStatus,
    pub amh_ng_per_ml: f64,
    pub fsh_miu_per_ml: f64,
    pub antral_follicle_count: u32,
    #[serde(flatten)]
    pub semen: SemenAnalysis,
}

/// Partner semen analysis. Only evaluated when all three values are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SemenAnalysis {
    pub sperm_concentration_million_per_ml: f64,
    pub sperm_motility_percent: f64,
    pub sperm_morphology_percent: f64,
}

impl SemenAnalysis {
    /// True when concentration, motility and morphology were all measured.
    pub fn is_complete(&self) -> bool {
        self.sperm_concentration_million_per_ml > 0.0
            && self.sperm_motility_percent > 0.0
            && self.sperm_morphology_percent > 0.0
    }
}

/// Patency of the fallopian tubes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TubalStatus {
    Normal,
    Blocked,
    #[default]
    Unknown,
}

impl TubalStatus {
    /// Lenient parse of a form value. Anything unrecognised is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "normal" | "patent" => Self::Normal,
            "blocked" => Self::Blocked,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Blocked => "Blocked",
            Self::Unknown => "Unknown",
        }
    }
}

/// Ovulatory pattern reported for the patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OvulationStatus {
    Regular,
    Irregular,
    Anovulatory,
    #[default]
    Unknown,
}

impl OvulationStatus {
    /// Lenient parse of a form value. Anything unrecognised is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "regular" => Self::Regular,
            "irregular" => Self::Irregular,
            "anovulatory" => Self::Anovulatory,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Irregular => "Irregular",
            Self::Anovulatory => "Anovulatory",
            Self::Unknown => "Unknown",
        }
    }
}
