mod config;
mod rules;
mod timing;

pub use config::AnalysisConfig;
pub use timing::DemandTier;

use crate::analysis::domain::{IpoCandidate, SellTiming, SuitabilityEvaluation};

/// Stateless engine applying the flip thresholds to candidate records.
///
/// Every operation is a pure function of the candidate and the configuration;
/// callers may share one engine across threads freely.
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classifies a candidate against the four flip rules. Reasons are
    /// populated for both outcomes; warnings only when the candidate passes.
    pub fn evaluate(&self, candidate: &IpoCandidate) -> SuitabilityEvaluation {
        let (status, reasons) = rules::screen_candidate(candidate, &self.config);
        let warnings = if status.is_suitable() {
            rules::collect_warnings(candidate, &self.config)
        } else {
            Vec::new()
        };

        SuitabilityEvaluation {
            candidate: candidate.clone(),
            status,
            reasons,
            warnings,
        }
    }

    /// Recommends an intraday exit window. Defined for any candidate; gating
    /// on suitability is the caller's choice.
    pub fn sell_timing(&self, candidate: &IpoCandidate) -> SellTiming {
        timing::recommend(candidate, &self.config)
    }

    pub fn supply_strength(&self, candidate: &IpoCandidate) -> f64 {
        timing::supply_strength(candidate)
    }

    pub fn demand_tier(&self, candidate: &IpoCandidate) -> DemandTier {
        timing::classify(timing::supply_strength(candidate), &self.config)
    }

    /// Keeps suitable candidates, ranked by expected return descending.
    /// The sort is stable, so ties keep their input order.
    pub fn select_suitable(&self, candidates: &[IpoCandidate]) -> Vec<IpoCandidate> {
        let mut suitable: Vec<IpoCandidate> = candidates
            .iter()
            .filter(|candidate| self.evaluate(candidate).status.is_suitable())
            .cloned()
            .collect();
        suitable.sort_by(|a, b| b.expected_return_pct.total_cmp(&a.expected_return_pct));
        suitable
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
