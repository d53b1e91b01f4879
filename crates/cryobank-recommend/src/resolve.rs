use cryobank_core::models::observation::TubalStatus;
use cryobank_core::models::recommendation::{Confidence, MAX_REASONS, Recommendation, TreatmentType};

use crate::scoring::ScoreEvidence;

pub const BLOCKED_TUBES_REASON: &str = "Blocked fallopian tubes require IVF";
pub const FIRST_LINE_IUI_REASON: &str =
    "Consider IUI as first-line treatment, but may need IVF if unsuccessful";

/// Scores at or above this favour IUI with moderate confidence.
pub const IUI_THRESHOLD: i32 = 3;
/// Scores at or below this recommend IVF with high confidence.
pub const IVF_THRESHOLD: i32 = -2;

/// Turn accumulated evidence into a recommendation.
///
/// Blocked tubes always yield IVF regardless of the score. Otherwise the score
/// is bucketed: `>= 3` IUI/moderate, `<= -2` IVF/high, anything between is a
/// low-confidence IUI first-line suggestion.
pub fn resolve(evidence: &ScoreEvidence, tubal_status: TubalStatus) -> Recommendation {
    if tubal_status == TubalStatus::Blocked {
        return Recommendation {
            treatment: TreatmentType::Ivf,
            confidence: Confidence::High,
            reasons: vec![BLOCKED_TUBES_REASON.to_string()],
        };
    }

    if evidence.score >= IUI_THRESHOLD {
        return Recommendation {
            treatment: TreatmentType::Iui,
            confidence: Confidence::Moderate,
            reasons: evidence
                .reasons()
                .take(MAX_REASONS)
                .map(str::to_string)
                .collect(),
        };
    }

    if evidence.score <= IVF_THRESHOLD {
        // May be empty when IVF is reached through many small negatives.
        return Recommendation {
            treatment: TreatmentType::Ivf,
            confidence: Confidence::High,
            reasons: evidence
                .findings
                .iter()
                .filter(|f| f.implies_ivf)
                .take(MAX_REASONS)
                .map(|f| f.reason.clone())
                .collect(),
        };
    }

    Recommendation {
        treatment: TreatmentType::Iui,
        confidence: Confidence::Low,
        reasons: vec![FIRST_LINE_IUI_REASON.to_string()],
    }
}
