use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Infertility diagnoses offered on the diagnosis form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisCode {
    TubalFactor,
    OvulatoryDysfunction,
    DiminishedOvarianReserve,
    MaleFactor,
    Endometriosis,
    UterineFactor,
    Unexplained,
    Other,
}

impl DiagnosisCode {
    pub const ALL: [DiagnosisCode; 8] = [
        Self::TubalFactor,
        Self::OvulatoryDysfunction,
        Self::DiminishedOvarianReserve,
        Self::MaleFactor,
        Self::Endometriosis,
        Self::UterineFactor,
        Self::Unexplained,
        Self::Other,
    ];

    /// Short code as stored in treatment notes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TubalFactor => "TF",
            Self::OvulatoryDysfunction => "OD",
            Self::DiminishedOvarianReserve => "DOR",
            Self::MaleFactor => "MF",
            Self::Endometriosis => "ENDO",
            Self::UterineFactor => "UF",
            Self::Unexplained => "UI",
            Self::Other => "OTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TubalFactor => "Tubal factor",
            Self::OvulatoryDysfunction => "Ovulatory dysfunction",
            Self::DiminishedOvarianReserve => "Diminished ovarian reserve",
            Self::MaleFactor => "Male factor",
            Self::Endometriosis => "Endometriosis",
            Self::UterineFactor => "Uterine factor",
            Self::Unexplained => "Unexplained infertility",
            Self::Other => "Other",
        }
    }

    /// Look up a diagnosis by its short code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        let wanted = code.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownDiagnosisCode(code.to_string()))
    }
}

impl std::fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}
