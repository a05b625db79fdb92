//! Same-day flip screening for IPO candidates.
//!
//! The engine is a stateless classifier: a candidate record goes through four
//! threshold rules, suitable candidates can additionally be asked for an
//! intraday exit window derived from the supply/demand balance. The HTTP
//! router and the plain-text report consume the same engine output.

pub mod domain;
pub mod engine;
pub mod report;
pub mod router;
pub mod samples;

#[cfg(test)]
mod tests;

pub use domain::{
    format_price, CandidateError, IpoCandidate, SellTiming, SuitabilityEvaluation,
    SuitabilityStatus,
};
pub use engine::{AnalysisConfig, AnalysisEngine, DemandTier};
pub use report::render_report;
pub use router::analysis_router;
pub use samples::sample_candidates;
