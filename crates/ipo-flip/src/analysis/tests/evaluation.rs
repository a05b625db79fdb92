use super::common::*;
use crate::analysis::domain::SuitabilityStatus;

#[test]
fn low_mandatory_holding_disqualifies_with_cited_threshold() {
    let mut weak = candidate("holding-low");
    weak.mandatory_holding_pct = 8.5;

    let evaluation = engine().evaluate(&weak);

    assert_eq!(evaluation.status, SuitabilityStatus::Unsuitable);
    assert_eq!(evaluation.reasons.len(), 1);
    assert!(evaluation.reasons[0].contains("8.5%"));
    assert!(evaluation.reasons[0].contains("10.0%"));
}

#[test]
fn excessive_float_disqualifies_with_cited_threshold() {
    let mut loose = candidate("float-high");
    loose.available_float_pct = 40.0;

    let evaluation = engine().evaluate(&loose);

    assert_eq!(evaluation.status, SuitabilityStatus::Unsuitable);
    assert_eq!(evaluation.reasons.len(), 1);
    assert!(evaluation.reasons[0].contains("40.0%"));
    assert!(evaluation.reasons[0].contains("35.0%"));
}

#[test]
fn price_above_band_top_disqualifies_with_both_prices() {
    let mut rich = candidate("price-high");
    rich.ipo_price = 21_000;

    let evaluation = engine().evaluate(&rich);

    assert_eq!(evaluation.status, SuitabilityStatus::Unsuitable);
    assert_eq!(evaluation.reasons.len(), 1);
    assert!(evaluation.reasons[0].contains("21,000"));
    assert!(evaluation.reasons[0].contains("20,000"));
}

#[test]
fn weak_sector_return_disqualifies_and_names_the_sector() {
    let mut cold = candidate("sector-weak");
    cold.sector_avg_return_pct = 3.2;

    let evaluation = engine().evaluate(&cold);

    assert_eq!(evaluation.status, SuitabilityStatus::Unsuitable);
    assert_eq!(evaluation.reasons.len(), 1);
    assert!(evaluation.reasons[0].contains("Semiconductors"));
    assert!(evaluation.reasons[0].contains("3.2%"));
    assert!(evaluation.reasons[0].contains("5.0%"));
}

#[test]
fn every_violation_contributes_its_own_reason() {
    let mut bad = candidate("multi-fail");
    bad.mandatory_holding_pct = 8.5;
    bad.available_float_pct = 42.0;

    let evaluation = engine().evaluate(&bad);

    assert_eq!(evaluation.status, SuitabilityStatus::Unsuitable);
    assert_eq!(evaluation.reasons.len(), 2);
    assert!(evaluation.reasons[0].contains("mandatory holding"));
    assert!(evaluation.reasons[1].contains("available float"));
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn exact_threshold_values_pass_every_rule() {
    let mut edge = candidate("boundary");
    edge.mandatory_holding_pct = 10.0;
    edge.available_float_pct = 35.0;
    edge.ipo_price = edge.price_band_max;
    edge.sector_avg_return_pct = 5.0;

    let evaluation = engine().evaluate(&edge);

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert_eq!(evaluation.reasons.len(), 4);
}

#[test]
fn passing_candidates_get_positive_restatements() {
    let evaluation = engine().evaluate(&candidate("clean"));

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert_eq!(evaluation.reasons.len(), 4);
    assert!(evaluation.reasons[0].contains("mandatory holding commitment 15.0%"));
    assert!(evaluation.reasons[1].contains("available float 25.0%"));
    assert!(evaluation.reasons[2].contains("sector average listing-day return 10.0%"));
    assert!(evaluation.reasons[3].contains("target range 5~30%"));
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn reasons_are_never_empty_regardless_of_outcome() {
    let mut failing = candidate("fails");
    failing.mandatory_holding_pct = 2.0;

    assert!(!engine().evaluate(&candidate("passes")).reasons.is_empty());
    assert!(!engine().evaluate(&failing).reasons.is_empty());
}

#[test]
fn warnings_stay_empty_for_unsuitable_candidates() {
    // Holding fails while float and return would otherwise warn.
    let mut bad = candidate("no-warnings");
    bad.mandatory_holding_pct = 4.0;
    bad.available_float_pct = 32.0;
    bad.expected_return_pct = 25.0;

    let evaluation = engine().evaluate(&bad);

    assert_eq!(evaluation.status, SuitabilityStatus::Unsuitable);
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn float_between_warning_and_rejection_passes_with_warning() {
    let mut snug = candidate("dead-zone");
    snug.available_float_pct = 32.0;

    let evaluation = engine().evaluate(&snug);

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert!(evaluation
        .warnings
        .iter()
        .any(|warning| warning.contains("available float 32.0%")));
}

#[test]
fn float_at_exactly_thirty_does_not_warn() {
    let mut edge = candidate("warn-edge");
    edge.available_float_pct = 30.0;

    let evaluation = engine().evaluate(&edge);

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn pricing_above_band_midpoint_warns() {
    let mut toppy = candidate("midpoint");
    toppy.ipo_price = 18_000; // midpoint is 17,500

    let evaluation = engine().evaluate(&toppy);

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert!(evaluation
        .warnings
        .iter()
        .any(|warning| warning.contains("midpoint")));
}

#[test]
fn aggressive_expected_return_warns() {
    let mut greedy = candidate("high-return");
    greedy.expected_return_pct = 25.0;

    let evaluation = engine().evaluate(&greedy);

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert!(evaluation
        .warnings
        .iter()
        .any(|warning| warning.contains("expected return 25.0%")));
}

#[test]
fn independent_warnings_stack() {
    let mut busy = candidate("stacked");
    busy.available_float_pct = 33.0;
    busy.ipo_price = 19_000;
    busy.expected_return_pct = 28.0;

    let evaluation = engine().evaluate(&busy);

    assert_eq!(evaluation.status, SuitabilityStatus::Suitable);
    assert_eq!(evaluation.warnings.len(), 3);
}

#[test]
fn evaluation_keeps_a_copy_of_the_candidate() {
    let original = candidate("kept");
    let evaluation = engine().evaluate(&original);
    assert_eq!(evaluation.candidate, original);
}
