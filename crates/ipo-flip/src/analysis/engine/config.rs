use serde::{Deserialize, Serialize};

/// Screening thresholds and timing tier boundaries, kept in one auditable
/// struct instead of scattered literals.
///
/// `float_warning_pct` is deliberately below `max_available_float_pct`:
/// candidates in the (30, 35] band pass the float rule but carry a warning.
/// The target return range is informational and never rejects a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub min_mandatory_holding_pct: f64,
    pub max_available_float_pct: f64,
    pub min_sector_return_pct: f64,
    pub target_min_return_pct: f64,
    pub target_max_return_pct: f64,
    pub float_warning_pct: f64,
    pub high_return_warning_pct: f64,
    pub strong_demand_strength: f64,
    pub moderate_demand_strength: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_mandatory_holding_pct: 10.0,
            max_available_float_pct: 35.0,
            min_sector_return_pct: 5.0,
            target_min_return_pct: 5.0,
            target_max_return_pct: 30.0,
            float_warning_pct: 30.0,
            high_return_warning_pct: 20.0,
            strong_demand_strength: 15.0,
            moderate_demand_strength: 5.0,
        }
    }
}
