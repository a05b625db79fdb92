use super::config::AnalysisConfig;
use crate::analysis::domain::{format_price, IpoCandidate, SuitabilityStatus};

/// Applies the four flip rules. Every rule is checked independently so a
/// candidate failing several thresholds gets one reason per violation; a
/// clean pass instead gets positive restatements of the same four metrics.
pub(crate) fn screen_candidate(
    candidate: &IpoCandidate,
    config: &AnalysisConfig,
) -> (SuitabilityStatus, Vec<String>) {
    let mut violations = Vec::new();

    if candidate.mandatory_holding_pct < config.min_mandatory_holding_pct {
        violations.push(format!(
            "mandatory holding commitment {:.1}% below the {:.1}% minimum",
            candidate.mandatory_holding_pct, config.min_mandatory_holding_pct
        ));
    }

    if candidate.available_float_pct > config.max_available_float_pct {
        violations.push(format!(
            "available float {:.1}% above the {:.1}% maximum",
            candidate.available_float_pct, config.max_available_float_pct
        ));
    }

    if candidate.ipo_price > candidate.price_band_max {
        violations.push(format!(
            "IPO price {} exceeds the top of the price band ({})",
            format_price(candidate.ipo_price),
            format_price(candidate.price_band_max)
        ));
    }

    if candidate.sector_avg_return_pct < config.min_sector_return_pct {
        violations.push(format!(
            "sector ({}) average listing-day return {:.1}% below the {:.1}% minimum",
            candidate.sector, candidate.sector_avg_return_pct, config.min_sector_return_pct
        ));
    }

    if violations.is_empty() {
        (
            SuitabilityStatus::Suitable,
            positive_reasons(candidate, config),
        )
    } else {
        (SuitabilityStatus::Unsuitable, violations)
    }
}

fn positive_reasons(candidate: &IpoCandidate, config: &AnalysisConfig) -> Vec<String> {
    vec![
        format!(
            "mandatory holding commitment {:.1}% (strong)",
            candidate.mandatory_holding_pct
        ),
        format!(
            "available float {:.1}% (healthy)",
            candidate.available_float_pct
        ),
        format!(
            "sector average listing-day return {:.1}% (healthy)",
            candidate.sector_avg_return_pct
        ),
        format!(
            "expected return {:.1}% (target range {:.0}~{:.0}%)",
            candidate.expected_return_pct,
            config.target_min_return_pct,
            config.target_max_return_pct
        ),
    ]
}

/// Advisory notes for candidates that passed the rules. Each check stands on
/// its own; zero or more may apply.
pub(crate) fn collect_warnings(candidate: &IpoCandidate, config: &AnalysisConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if candidate.available_float_pct > config.float_warning_pct {
        warnings.push(format!(
            "available float {:.1}% is on the high side; expect extra supply pressure",
            candidate.available_float_pct
        ));
    }

    if (candidate.ipo_price as f64) > candidate.price_band_midpoint() {
        warnings.push(
            "IPO price sits above the price-band midpoint; volatility may be elevated".to_string(),
        );
    }

    if candidate.expected_return_pct > config.high_return_warning_pct {
        warnings.push(format!(
            "expected return {:.1}% is ambitious; swings can be wide",
            candidate.expected_return_pct
        ));
    }

    warnings
}
