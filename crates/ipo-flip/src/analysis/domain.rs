use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Candidate record as provided by the caller; immutable once constructed.
///
/// Prices are integer currency units, percentages are plain decimal numbers
/// (`18.5` means 18.5%). `sector_avg_return_pct` and `expected_return_pct`
/// are signed; the holding and float percentages live in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpoCandidate {
    pub name: String,
    pub listing_date: NaiveDate,
    pub ipo_price: u32,
    pub price_band_min: u32,
    pub price_band_max: u32,
    pub mandatory_holding_pct: f64,
    pub available_float_pct: f64,
    pub sector: String,
    pub sector_avg_return_pct: f64,
    pub expected_return_pct: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl IpoCandidate {
    /// Boundary validation for caller-supplied records. The engine itself is
    /// total over candidates that pass this check.
    pub fn validate(&self) -> Result<(), CandidateError> {
        if self.name.trim().is_empty() {
            return Err(CandidateError::EmptyName);
        }
        if self.price_band_min > self.price_band_max {
            return Err(CandidateError::InvertedPriceBand {
                min: self.price_band_min,
                max: self.price_band_max,
            });
        }

        for (field, value) in [
            ("mandatory_holding_pct", self.mandatory_holding_pct),
            ("available_float_pct", self.available_float_pct),
        ] {
            if !value.is_finite() {
                return Err(CandidateError::NonFinite { field });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(CandidateError::PercentOutOfRange { field, value });
            }
        }

        for (field, value) in [
            ("sector_avg_return_pct", self.sector_avg_return_pct),
            ("expected_return_pct", self.expected_return_pct),
        ] {
            if !value.is_finite() {
                return Err(CandidateError::NonFinite { field });
            }
        }

        Ok(())
    }

    pub fn price_band_midpoint(&self) -> f64 {
        (self.price_band_min as f64 + self.price_band_max as f64) / 2.0
    }
}

/// Rejection reasons for malformed candidate payloads. Messages are safe to
/// surface to callers verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandidateError {
    #[error("candidate name must not be empty")]
    EmptyName,
    #[error("price band minimum {min} exceeds maximum {max}")]
    InvertedPriceBand { min: u32, max: u32 },
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Binary flip verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityStatus {
    Suitable,
    Unsuitable,
}

impl SuitabilityStatus {
    pub fn is_suitable(self) -> bool {
        matches!(self, SuitabilityStatus::Suitable)
    }

    pub fn label(self) -> &'static str {
        match self {
            SuitabilityStatus::Suitable => "suitable for a same-day flip",
            SuitabilityStatus::Unsuitable => "not suitable for a same-day flip",
        }
    }
}

/// Verdict for a single candidate. `reasons` is populated for both outcomes
/// (threshold violations on failure, positive restatements on success) so the
/// caller always gets a full justification. `warnings` only carries entries
/// for suitable candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityEvaluation {
    pub candidate: IpoCandidate,
    pub status: SuitabilityStatus,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Intraday exit window recommendation for the listing day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellTiming {
    pub stock_name: String,
    pub dangerous_period: String,
    pub safe_period: String,
    pub reason: String,
}

/// Thousands-separated price rendering for reason strings and reports.
pub fn format_price(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> IpoCandidate {
        IpoCandidate {
            name: "Example".to_string(),
            listing_date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
            ipo_price: 25_000,
            price_band_min: 23_000,
            price_band_max: 27_000,
            mandatory_holding_pct: 15.5,
            available_float_pct: 28.3,
            sector: "Semiconductors".to_string(),
            sector_avg_return_pct: 12.8,
            expected_return_pct: 18.5,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_records() {
        assert_eq!(candidate().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_names() {
        let mut bad = candidate();
        bad.name = "  ".to_string();
        assert_eq!(bad.validate(), Err(CandidateError::EmptyName));
    }

    #[test]
    fn validate_rejects_inverted_price_bands() {
        let mut bad = candidate();
        bad.price_band_min = 30_000;
        assert_eq!(
            bad.validate(),
            Err(CandidateError::InvertedPriceBand {
                min: 30_000,
                max: 27_000
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_percentages() {
        let mut bad = candidate();
        bad.available_float_pct = 104.0;
        assert!(matches!(
            bad.validate(),
            Err(CandidateError::PercentOutOfRange {
                field: "available_float_pct",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_returns() {
        let mut bad = candidate();
        bad.expected_return_pct = f64::NAN;
        assert!(matches!(
            bad.validate(),
            Err(CandidateError::NonFinite {
                field: "expected_return_pct"
            })
        ));
    }

    #[test]
    fn prices_render_with_thousands_separators() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(25_000), "25,000");
        assert_eq!(format_price(1_234_567), "1,234,567");
    }

    #[test]
    fn candidate_round_trips_through_json() {
        let original = candidate();
        let json = serde_json::to_string(&original).expect("serializes");
        assert!(json.contains("\"2026-01-15\""));
        let parsed: IpoCandidate = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(parsed, original);
    }
}
