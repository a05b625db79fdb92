use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::domain::{
    format_price, IpoCandidate, SellTiming, SuitabilityStatus,
};
use crate::analysis::engine::AnalysisEngine;
use crate::analysis::samples::sample_candidates;
use crate::error::AppError;

/// Router builder exposing the analysis endpoints. Health/readiness/metrics
/// routes are layered on by the service crate.
pub fn analysis_router(engine: Arc<AnalysisEngine>) -> Router {
    Router::new()
        .route("/api/v1/ipo/analyze", post(analyze_handler))
        .route("/api/v1/ipo/sample-data", get(sample_data_handler))
        .with_state(engine)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// When set (the default), the built-in sample set is analyzed and any
    /// supplied candidates are ignored.
    #[serde(default = "default_use_sample")]
    pub use_sample: bool,
    #[serde(default)]
    pub candidates: Vec<IpoCandidate>,
}

fn default_use_sample() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub suitable_count: usize,
    pub total_count: usize,
    pub suitable: Vec<CandidateVerdict>,
    pub unsuitable: Vec<CandidateVerdict>,
}

/// Display-oriented projection of one candidate's evaluation: raw engine
/// output plus formatted fields the front end renders verbatim.
#[derive(Debug, Serialize)]
pub struct CandidateVerdict {
    pub name: String,
    pub listing_date: NaiveDate,
    pub ipo_price: u32,
    pub price_band: String,
    pub sector: String,
    pub expected_return_pct: f64,
    pub status: SuitabilityStatus,
    pub status_label: String,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<SellTiming>,
}

#[derive(Debug, Serialize)]
pub struct SampleDataResponse {
    pub success: bool,
    pub candidates: Vec<IpoCandidate>,
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<AnalysisEngine>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    // Undecodable bodies get the same error envelope as invalid candidates;
    // the serde detail stays in the logs.
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected undecodable analyze payload");
        AppError::Payload(rejection)
    })?;

    let candidates = if request.use_sample {
        sample_candidates()
    } else {
        request.candidates
    };

    // Reject the whole request on the first malformed record rather than
    // folding a parse failure into some other candidate's result.
    for candidate in &candidates {
        if let Err(err) = candidate.validate() {
            tracing::warn!(candidate = %candidate.name, error = %err, "rejected analyze payload");
            return Err(AppError::from(err));
        }
    }

    let mut suitable = Vec::new();
    let mut unsuitable = Vec::new();
    for candidate in &candidates {
        let evaluation = engine.evaluate(candidate);
        let timing = evaluation
            .status
            .is_suitable()
            .then(|| engine.sell_timing(candidate));
        let verdict = CandidateVerdict {
            name: candidate.name.clone(),
            listing_date: candidate.listing_date,
            ipo_price: candidate.ipo_price,
            price_band: format!(
                "{}~{}",
                format_price(candidate.price_band_min),
                format_price(candidate.price_band_max)
            ),
            sector: candidate.sector.clone(),
            expected_return_pct: candidate.expected_return_pct,
            status: evaluation.status,
            status_label: evaluation.status.label().to_string(),
            reasons: evaluation.reasons,
            warnings: evaluation.warnings,
            strengths: candidate.strengths.clone(),
            weaknesses: candidate.weaknesses.clone(),
            timing,
        };
        if verdict.status.is_suitable() {
            suitable.push(verdict);
        } else {
            unsuitable.push(verdict);
        }
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        suitable_count: suitable.len(),
        total_count: candidates.len(),
        suitable,
        unsuitable,
    }))
}

pub(crate) async fn sample_data_handler() -> Json<SampleDataResponse> {
    Json(SampleDataResponse {
        success: true,
        candidates: sample_candidates(),
    })
}
