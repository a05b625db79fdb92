use chrono::NaiveDate;

use crate::analysis::domain::IpoCandidate;

/// Built-in fixture used when the caller supplies no candidate data. The set
/// covers two clean passes, a pass inside the float warning band, a
/// double-violation fail, and a sector-return fail, so demos show both
/// verdicts with reasons and warnings.
pub fn sample_candidates() -> Vec<IpoCandidate> {
    vec![
        IpoCandidate {
            name: "TechNova Semiconductor".to_string(),
            listing_date: date(2026, 1, 15),
            ipo_price: 25_000,
            price_band_min: 23_000,
            price_band_max: 27_000,
            mandatory_holding_pct: 15.5,
            available_float_pct: 28.3,
            sector: "Semiconductors".to_string(),
            sector_avg_return_pct: 12.8,
            expected_return_pct: 18.5,
            strengths: vec![
                "mandatory holding commitment of 15.5% is on the high side".to_string(),
                "semiconductor sector averaging 12.8% on listing day".to_string(),
                "priced near the middle of the hoped-for band".to_string(),
                "sector momentum has been strong recently".to_string(),
            ],
            weaknesses: vec![
                "available float of 28.3% is somewhat elevated".to_string(),
                "technology edge over competitors still unproven".to_string(),
                "global chip supply remains volatile".to_string(),
            ],
        },
        IpoCandidate {
            name: "BioCare Therapeutics".to_string(),
            listing_date: date(2026, 1, 22),
            ipo_price: 18_000,
            price_band_min: 15_000,
            price_band_max: 20_000,
            mandatory_holding_pct: 22.0,
            available_float_pct: 18.5,
            sector: "Biotech".to_string(),
            sector_avg_return_pct: 15.2,
            expected_return_pct: 25.0,
            strengths: vec![
                "mandatory holding commitment of 22% is very high".to_string(),
                "available float of 18.5% keeps supply tight".to_string(),
                "biotech sector has been rallying".to_string(),
                "lead drug candidate in phase 3 trials".to_string(),
            ],
            weaknesses: vec![
                "priced close to the top of the band".to_string(),
                "trial outcomes are uncertain".to_string(),
                "biotech names swing hard".to_string(),
            ],
        },
        IpoCandidate {
            name: "GreenVolt Energy".to_string(),
            listing_date: date(2026, 2, 5),
            ipo_price: 32_000,
            price_band_min: 28_000,
            price_band_max: 32_000,
            mandatory_holding_pct: 8.5,
            available_float_pct: 42.0,
            sector: "Renewables".to_string(),
            sector_avg_return_pct: 6.5,
            expected_return_pct: 8.0,
            strengths: vec![
                "positioned to benefit from renewables policy".to_string(),
                "large export share".to_string(),
            ],
            weaknesses: vec![
                "mandatory holding commitment of 8.5% is very low".to_string(),
                "available float of 42% is excessive".to_string(),
                "priced at the very top of the band".to_string(),
                "exposed to raw-material cost inflation".to_string(),
            ],
        },
        IpoCandidate {
            name: "RoboMind AI".to_string(),
            listing_date: date(2026, 2, 12),
            ipo_price: 45_000,
            price_band_min: 40_000,
            price_band_max: 50_000,
            mandatory_holding_pct: 18.0,
            available_float_pct: 25.0,
            sector: "AI/Robotics".to_string(),
            sector_avg_return_pct: 3.2,
            expected_return_pct: 5.5,
            strengths: vec![
                "mandatory holding commitment of 18% is high".to_string(),
                "available float of 25% is reasonable".to_string(),
                "credible AI technology stack".to_string(),
                "partnerships with large manufacturers".to_string(),
            ],
            weaknesses: vec![
                "sector listing-day average of 3.2% is weak".to_string(),
                "AI names are in a correction".to_string(),
                "profitability improvements keep slipping".to_string(),
            ],
        },
        IpoCandidate {
            name: "UrbanDrive Mobility".to_string(),
            listing_date: date(2026, 2, 19),
            ipo_price: 22_000,
            price_band_min: 20_000,
            price_band_max: 24_000,
            mandatory_holding_pct: 12.5,
            available_float_pct: 32.0,
            sector: "EV/Mobility".to_string(),
            sector_avg_return_pct: 9.5,
            expected_return_pct: 12.0,
            strengths: vec![
                "EV market still growing".to_string(),
                "mandatory holding commitment of 12.5% clears the bar".to_string(),
                "available float of 32% clears the bar".to_string(),
                "sector average of 9.5% is healthy".to_string(),
            ],
            weaknesses: vec![
                "float is on the higher side".to_string(),
                "competition is intensifying".to_string(),
                "battery input costs are unpredictable".to_string(),
            ],
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_well_formed() {
        let candidates = sample_candidates();
        assert_eq!(candidates.len(), 5);
        for candidate in &candidates {
            assert_eq!(candidate.validate(), Ok(()), "{}", candidate.name);
        }
    }
}
