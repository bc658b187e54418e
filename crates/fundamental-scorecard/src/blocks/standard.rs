use scorecard_core::{BlockScores, RawMetrics, BLOCK_MAX};

use super::beta_points;
use crate::normalize::{normalize_payout_ratio, normalize_yield_fraction, pegy};

/// Quality [0..2]: return on assets.
pub fn score_quality(metrics: &RawMetrics) -> u8 {
    match metrics.return_on_assets {
        None => 1,
        Some(roa) if roa >= 0.05 => 2,
        Some(roa) if roa >= 0.02 => 1,
        Some(_) => 0,
    }
}

/// Safety [0..5]: beta plus debt/EBITDA leverage.
pub fn score_safety(metrics: &RawMetrics) -> u8 {
    let leverage = match (metrics.total_debt, metrics.ebitda) {
        (Some(debt), Some(ebitda)) if ebitda > 0.0 => {
            let debt_ratio = debt / ebitda;
            if debt_ratio < 2.0 {
                3
            } else if debt_ratio < 3.0 {
                2
            } else {
                1
            }
        }
        _ => 1,
    };

    (beta_points(metrics.beta) + leverage).min(BLOCK_MAX)
}

/// ValueGrowth [0..5]: PEGY plus forward P/E.
pub fn score_value_growth(metrics: &RawMetrics) -> u8 {
    let pegy_points = match pegy(metrics) {
        None => 1,
        Some(p) if p <= 0.5 => 3,
        Some(p) if p <= 1.0 => 2,
        Some(_) => 1,
    };

    let pe_points = match metrics.forward_pe {
        None => 1,
        Some(pe) if pe < 15.0 => 2,
        Some(pe) if pe < 22.5 => 1,
        Some(_) => 0,
    };

    (pegy_points + pe_points).min(BLOCK_MAX)
}

/// Dividend [0..5]: yield (no default) plus payout.
pub fn score_dividend(metrics: &RawMetrics) -> u8 {
    let yield_points = match normalize_yield_fraction(metrics.dividend_yield) {
        Some(y) if y >= 0.06 => 3,
        Some(y) if y >= 0.04 => 2,
        Some(y) if y >= 0.02 => 1,
        _ => 0,
    };

    let payout_points = match normalize_payout_ratio(metrics.payout_ratio) {
        None => 1,
        Some(p) if p <= 0.8 => 2,
        Some(p) if p <= 1.0 => 1,
        Some(_) => 0,
    };

    (yield_points + payout_points).min(BLOCK_MAX)
}

pub fn score(metrics: &RawMetrics) -> BlockScores {
    BlockScores::new(
        score_quality(metrics),
        score_safety(metrics),
        score_value_growth(metrics),
        score_dividend(metrics),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_thresholds() {
        let with_roa = |roa| RawMetrics {
            return_on_assets: roa,
            ..Default::default()
        };
        assert_eq!(score_quality(&with_roa(None)), 1);
        assert_eq!(score_quality(&with_roa(Some(0.05))), 2);
        assert_eq!(score_quality(&with_roa(Some(0.03))), 1);
        assert_eq!(score_quality(&with_roa(Some(0.01))), 0);
        assert_eq!(score_quality(&with_roa(Some(-0.2))), 0);
    }

    #[test]
    fn test_safety_leverage() {
        let metrics = RawMetrics {
            beta: Some(1.5),
            total_debt: Some(250.0),
            ebitda: Some(100.0),
            ..Default::default()
        };
        assert_eq!(score_safety(&metrics), 2);

        let negative_ebitda = RawMetrics {
            total_debt: Some(250.0),
            ebitda: Some(-10.0),
            ..Default::default()
        };
        // beta default 1 + leverage default 1
        assert_eq!(score_safety(&negative_ebitda), 2);

        let heavy = RawMetrics {
            beta: Some(0.6),
            total_debt: Some(500.0),
            ebitda: Some(100.0),
            ..Default::default()
        };
        assert_eq!(score_safety(&heavy), 3);
    }

    #[test]
    fn test_value_growth_defaults() {
        assert_eq!(score_value_growth(&RawMetrics::default()), 2);

        let expensive = RawMetrics {
            forward_pe: Some(40.0),
            eps_current_year: Some(2.0),
            eps_forward: Some(2.2),
            ..Default::default()
        };
        // pegy = 40 / 10 = 4 -> 1, pe >= 22.5 -> 0
        assert_eq!(score_value_growth(&expensive), 1);
    }

    #[test]
    fn test_dividend_yield_has_no_default() {
        let metrics = RawMetrics {
            payout_ratio: Some(0.5),
            ..Default::default()
        };
        assert_eq!(score_dividend(&metrics), 2);

        let percent_yield = RawMetrics {
            dividend_yield: Some(6.5),
            payout_ratio: Some(0.9),
            ..Default::default()
        };
        assert_eq!(score_dividend(&percent_yield), 4);

        let overpaying = RawMetrics {
            dividend_yield: Some(0.045),
            payout_ratio: Some(1.2),
            ..Default::default()
        };
        assert_eq!(score_dividend(&overpaying), 2);
    }

    #[test]
    fn test_ranges_over_nullability_combinations() {
        let values = [None, Some(-1.0), Some(0.0), Some(0.03), Some(0.5), Some(5.0), Some(50.0)];
        for a in values {
            for b in values {
                let metrics = RawMetrics {
                    return_on_assets: a,
                    beta: b,
                    total_debt: a,
                    ebitda: b,
                    forward_pe: a,
                    eps_current_year: b,
                    eps_forward: a,
                    dividend_yield: b,
                    payout_ratio: a,
                    ..Default::default()
                };
                let blocks = score(&metrics);
                assert!(blocks.quality <= 2);
                assert!(blocks.safety <= BLOCK_MAX);
                assert!(blocks.value_growth <= BLOCK_MAX);
                assert!(blocks.dividend <= BLOCK_MAX);
            }
        }
    }
}
