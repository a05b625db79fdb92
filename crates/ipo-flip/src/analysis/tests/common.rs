use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::analysis::domain::IpoCandidate;
use crate::analysis::engine::{AnalysisConfig, AnalysisEngine};

pub(super) fn engine() -> AnalysisEngine {
    AnalysisEngine::new(AnalysisConfig::default())
}

pub(super) fn config() -> AnalysisConfig {
    AnalysisConfig::default()
}

/// Baseline candidate that passes every rule and trips no warning: holding
/// 15%, float 25%, priced below the band midpoint, healthy sector, modest
/// expected return.
pub(super) fn candidate(name: &str) -> IpoCandidate {
    IpoCandidate {
        name: name.to_string(),
        listing_date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
        ipo_price: 17_000,
        price_band_min: 15_000,
        price_band_max: 20_000,
        mandatory_holding_pct: 15.0,
        available_float_pct: 25.0,
        sector: "Semiconductors".to_string(),
        sector_avg_return_pct: 10.0,
        expected_return_pct: 12.0,
        strengths: Vec::new(),
        weaknesses: Vec::new(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
