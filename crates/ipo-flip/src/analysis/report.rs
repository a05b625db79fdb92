use crate::analysis::domain::{format_price, IpoCandidate};
use crate::analysis::engine::AnalysisEngine;

const RULE_HEAVY: &str =
    "================================================================================";
const RULE_LIGHT: &str =
    "--------------------------------------------------------------------------------";

/// Renders the full plain-text analysis document: ranked flip picks, the
/// per-candidate verdicts, and exit timing for every suitable candidate.
/// Every reason, warning, and timing string the engine produced appears in
/// the order it was produced.
pub fn render_report(engine: &AnalysisEngine, candidates: &[IpoCandidate]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let config = engine.config();

    lines.push(RULE_HEAVY.to_string());
    lines.push("IPO same-day flip analysis report".to_string());
    lines.push(RULE_HEAVY.to_string());
    lines.push(String::new());

    lines.push("# 1. Flip candidates, ranked by expected return".to_string());
    lines.push(RULE_LIGHT.to_string());

    let suitable = engine.select_suitable(candidates);

    if suitable.is_empty() {
        lines.push(String::new());
        lines.push("  no candidate currently qualifies for a same-day flip".to_string());
    } else {
        for (rank, candidate) in suitable.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("[{}] {}", rank + 1, candidate.name));
            lines.push(format!("  listing date: {}", candidate.listing_date));
            lines.push(format!(
                "  IPO price: {} (band {}~{})",
                format_price(candidate.ipo_price),
                format_price(candidate.price_band_min),
                format_price(candidate.price_band_max)
            ));
            lines.push(format!(
                "  expected return: +{:.1}%",
                candidate.expected_return_pct
            ));
            lines.push(format!("  sector: {}", candidate.sector));
            if !candidate.strengths.is_empty() {
                lines.push("  strengths:".to_string());
                for strength in &candidate.strengths {
                    lines.push(format!("    * {strength}"));
                }
            }
            if !candidate.weaknesses.is_empty() {
                lines.push("  weaknesses:".to_string());
                for weakness in &candidate.weaknesses {
                    lines.push(format!("    * {weakness}"));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.push("# 2. Suitability verdicts".to_string());
    lines.push(RULE_LIGHT.to_string());
    lines.push(String::new());
    lines.push(format!(
        "target: +{:.0}~{:.0}% on listing day",
        config.target_min_return_pct, config.target_max_return_pct
    ));
    lines.push(String::new());
    lines.push("rejection rules (any single hit disqualifies):".to_string());
    lines.push(format!(
        "  * mandatory holding commitment < {:.0}%",
        config.min_mandatory_holding_pct
    ));
    lines.push(format!(
        "  * available float > {:.0}%",
        config.max_available_float_pct
    ));
    lines.push("  * IPO price above the top of the price band".to_string());
    lines.push(format!(
        "  * sector average listing-day return < {:.0}%",
        config.min_sector_return_pct
    ));

    for candidate in candidates {
        let evaluation = engine.evaluate(candidate);
        let mark = if evaluation.status.is_suitable() {
            "[PASS]"
        } else {
            "[FAIL]"
        };
        lines.push(String::new());
        lines.push(format!(
            "{mark} {}: {}",
            candidate.name,
            evaluation.status.label()
        ));
        for reason in &evaluation.reasons {
            lines.push(format!("    - {reason}"));
        }
        if !evaluation.warnings.is_empty() {
            lines.push("  watch-outs:".to_string());
            for warning in &evaluation.warnings {
                lines.push(format!("    ! {warning}"));
            }
        }
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.push("# 3. Listing-day exit windows".to_string());
    lines.push(RULE_LIGHT.to_string());

    for candidate in &suitable {
        let timing = engine.sell_timing(candidate);
        lines.push(String::new());
        lines.push(format!("[{}]", timing.stock_name));
        lines.push(format!("  ! riskiest stretch: {}", timing.dangerous_period));
        lines.push(format!("  + safest exit: {}", timing.safe_period));
        lines.push(format!("  > rationale: {}", timing.reason));
    }

    lines.push(String::new());
    lines.push(RULE_HEAVY.to_string());
    lines.push("Note: verdicts rest on historical data and supply/demand structure;".to_string());
    lines.push("actual market conditions on the day may differ.".to_string());
    lines.push(RULE_HEAVY.to_string());

    lines.join("\n")
}
