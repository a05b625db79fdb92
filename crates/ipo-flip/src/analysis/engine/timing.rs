use serde::{Deserialize, Serialize};

use super::config::AnalysisConfig;
use crate::analysis::domain::{IpoCandidate, SellTiming};

/// Demand tier derived from the supply-strength score. Variant order matters:
/// `Weak < Moderate < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTier {
    Weak,
    Moderate,
    Strong,
}

/// Linear proxy for the demand/supply imbalance on listing day: committed
/// holdings push strength up, free float pushes it down.
pub(crate) fn supply_strength(candidate: &IpoCandidate) -> f64 {
    candidate.mandatory_holding_pct - candidate.available_float_pct / 2.0
}

/// Tier boundaries are strict: a strength of exactly 15 or 5 lands in the
/// lower tier.
pub(crate) fn classify(strength: f64, config: &AnalysisConfig) -> DemandTier {
    if strength > config.strong_demand_strength {
        DemandTier::Strong
    } else if strength > config.moderate_demand_strength {
        DemandTier::Moderate
    } else {
        DemandTier::Weak
    }
}

pub(crate) fn recommend(candidate: &IpoCandidate, config: &AnalysisConfig) -> SellTiming {
    let tier = classify(supply_strength(candidate), config);

    let (dangerous_period, safe_period, reason) = match tier {
        DemandTier::Strong => (
            "14:30~15:20 (profit-taking supply ahead of the close)".to_string(),
            "09:30~10:30 (first peak after the opening rally)".to_string(),
            format!(
                "mandatory holding commitment {:.1}% is high and available float {:.1}% is low, \
                 favoring early demand; sell as soon as the expected {:.1}% return prints",
                candidate.mandatory_holding_pct,
                candidate.available_float_pct,
                candidate.expected_return_pct
            ),
        ),
        DemandTier::Moderate => (
            "10:30~11:00 and 14:00~15:20 (demand fades and profit-taking sets in)".to_string(),
            "09:15~09:45 (right after the opening price forms)".to_string(),
            format!(
                "moderate demand; a quick sale after the open is safest, \
                 scaling out once the {:.1}% target is reached",
                candidate.expected_return_pct
            ),
        ),
        DemandTier::Weak => (
            "everything after 09:30 (weak demand risks a persistent slide)".to_string(),
            "09:00~09:20 (as the opening price forms)".to_string(),
            format!(
                "weak demand makes an early exit essential; sell immediately at {:.1}% or better \
                 on the open, and consider a stop-loss if the target is missed",
                candidate.expected_return_pct
            ),
        ),
    };

    SellTiming {
        stock_name: candidate.name.clone(),
        dangerous_period,
        safe_period,
        reason,
    }
}
