use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fertility treatment the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentType {
    /// Intrauterine insemination.
    Iui,
    /// In vitro fertilization.
    Ivf,
}

impl TreatmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iui => "IUI",
            Self::Ivf => "IVF",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "IUI" => Some(Self::Iui),
            "IVF" => Some(Self::Ivf),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound on the number of reasons a recommendation carries.
pub const MAX_REASONS: usize = 3;

/// The engine's verdict. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub treatment: TreatmentType,
    pub confidence: Confidence,
    /// At most [`MAX_REASONS`] supporting reasons.
    pub reasons: Vec<String>,
}
