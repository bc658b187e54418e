use scorecard_core::{Flags, RawMetrics, RawSummary, ScoringConfig};

use crate::normalize::normalize_yield_fraction;

/// Key fields checked for completeness, in reporting order.
pub fn required_fields(summary: &RawSummary) -> [(&'static str, Option<f64>); 8] {
    match summary {
        RawSummary::Standard(s) => [
            ("roa", s.roa),
            ("totalDebt", s.total_debt),
            ("totalCash", s.total_cash),
            ("ebitda", s.ebitda),
            ("beta", s.beta),
            ("yield_pct", s.yield_pct),
            ("payout_pct", s.payout_pct),
            ("pegy", s.pegy),
        ],
        RawSummary::Financial(f) => [
            ("roe", f.roe),
            ("pb", f.pb),
            ("pe_fwd", f.pe_fwd),
            ("pe_ttm", f.pe_ttm),
            ("beta", f.beta),
            ("overallRisk", f.overall_risk),
            ("yield_pct", f.yield_pct),
            ("payout_pct", f.payout_pct),
        ],
    }
}

/// Derives diagnostic flags from the raw summary and the provider's dividend fields.
/// Runs before any penalty so flags reflect unadjusted data.
pub fn detect_flags(metrics: &RawMetrics, summary: &RawSummary, config: &ScoringConfig) -> Flags {
    let missing_fields: Vec<String> = required_fields(summary)
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name.to_string())
        .collect();

    let yield_pct = summary.yield_pct();
    let payout_pct = summary.payout_pct();

    let payout_unsustainable = payout_pct.map_or(false, |p| p >= config.payout_unsustainable_pct);
    let high_yield_alert = yield_pct.map_or(false, |y| y >= config.high_yield_alert_pct);

    let extreme_peg = match summary {
        RawSummary::Standard(s) => s
            .pegy
            .map_or(false, |p| p <= config.extreme_peg_low || p >= config.extreme_peg_high),
        RawSummary::Financial(_) => false,
    };

    let special_dividend = is_special_dividend(metrics, yield_pct, payout_pct, high_yield_alert, config);

    Flags {
        missing_data: missing_fields.len() >= config.missing_data_min_fields,
        missing_fields,
        payout_unsustainable,
        special_dividend,
        extreme_peg,
        high_yield_alert,
    }
}

fn is_special_dividend(
    metrics: &RawMetrics,
    yield_pct: Option<f64>,
    payout_pct: Option<f64>,
    high_yield_alert: bool,
    config: &ScoringConfig,
) -> bool {
    let multiplier = config.special_dividend_multiplier;

    let abnormal_yield = config.special_dividend_detection_enabled
        && yield_pct.map_or(false, |y| y > config.special_dividend_yield_pct);

    // Trailing payments well above the forward run-rate point at a one-off distribution.
    // A zero forward rate or yield is a suspended dividend, not a spike.
    let trailing_rate_spike = match (metrics.dividend_rate, metrics.trailing_annual_dividend_rate) {
        (Some(rate), Some(trailing)) if rate != 0.0 => trailing > rate * multiplier,
        _ => false,
    };

    let trailing_yield_spike = match (
        normalize_yield_fraction(metrics.dividend_yield),
        normalize_yield_fraction(metrics.trailing_annual_dividend_yield),
    ) {
        (Some(current), Some(trailing)) if current != 0.0 => trailing > current * multiplier,
        _ => false,
    };

    let unexplained_high_yield = high_yield_alert && payout_pct.is_none();

    abnormal_yield || trailing_rate_spike || trailing_yield_spike || unexplained_high_yield
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::build_summary;
    use scorecard_core::Profile;

    fn flags_for(profile: Profile, metrics: &RawMetrics) -> Flags {
        let config = ScoringConfig::default();
        detect_flags(metrics, &build_summary(profile, metrics), &config)
    }

    #[test]
    fn test_missing_fields_standard_order() {
        let metrics = RawMetrics {
            return_on_assets: Some(0.05),
            beta: Some(1.0),
            ..Default::default()
        };
        let flags = flags_for(Profile::Standard, &metrics);
        assert_eq!(
            flags.missing_fields,
            vec!["totalDebt", "totalCash", "ebitda", "yield_pct", "payout_pct", "pegy"]
        );
        assert!(flags.missing_data);
    }

    #[test]
    fn test_missing_data_threshold() {
        let metrics = RawMetrics {
            return_on_equity: Some(0.1),
            price_to_book: Some(1.0),
            forward_pe: Some(9.0),
            trailing_pe: Some(10.0),
            beta: Some(1.0),
            dividend_yield: Some(0.04),
            ..Default::default()
        };
        // overallRisk and payout_pct missing
        let flags = flags_for(Profile::Financial, &metrics);
        assert_eq!(flags.missing_fields, vec!["overallRisk", "payout_pct"]);
        assert!(!flags.missing_data);

        let fewer = RawMetrics {
            beta: None,
            ..metrics
        };
        let flags = flags_for(Profile::Financial, &fewer);
        assert_eq!(flags.missing_fields.len(), 3);
        assert!(flags.missing_data);
    }

    #[test]
    fn test_payout_and_yield_alerts() {
        let metrics = RawMetrics {
            dividend_yield: Some(8.0),
            payout_ratio: Some(0.95),
            ..Default::default()
        };
        let flags = flags_for(Profile::Standard, &metrics);
        assert!(flags.payout_unsustainable);
        assert!(flags.high_yield_alert);
        assert!(!flags.special_dividend);

        let metrics = RawMetrics {
            dividend_yield: Some(0.079),
            payout_ratio: Some(0.94),
            ..Default::default()
        };
        let flags = flags_for(Profile::Standard, &metrics);
        assert!(!flags.payout_unsustainable);
        assert!(!flags.high_yield_alert);
    }

    #[test]
    fn test_special_dividend_triggers() {
        let huge_yield = RawMetrics {
            dividend_yield: Some(0.25),
            payout_ratio: Some(0.3),
            ..Default::default()
        };
        assert!(flags_for(Profile::Standard, &huge_yield).special_dividend);

        let rate_spike = RawMetrics {
            dividend_rate: Some(2.0),
            trailing_annual_dividend_rate: Some(2.6),
            ..Default::default()
        };
        assert!(flags_for(Profile::Standard, &rate_spike).special_dividend);

        let rate_ok = RawMetrics {
            dividend_rate: Some(2.0),
            trailing_annual_dividend_rate: Some(2.5),
            ..Default::default()
        };
        assert!(!flags_for(Profile::Standard, &rate_ok).special_dividend);

        // mixed units: 3.0 is a percentage, 0.045 a fraction
        let yield_spike = RawMetrics {
            dividend_yield: Some(3.0),
            trailing_annual_dividend_yield: Some(0.045),
            payout_ratio: Some(0.5),
            ..Default::default()
        };
        assert!(flags_for(Profile::Financial, &yield_spike).special_dividend);

        let high_yield_no_payout = RawMetrics {
            dividend_yield: Some(0.09),
            ..Default::default()
        };
        let flags = flags_for(Profile::Standard, &high_yield_no_payout);
        assert!(flags.high_yield_alert);
        assert!(flags.special_dividend);
    }

    #[test]
    fn test_suspended_dividend_is_not_special() {
        let rate_cut = RawMetrics {
            dividend_rate: Some(0.0),
            trailing_annual_dividend_rate: Some(1.8),
            payout_ratio: Some(0.0),
            ..Default::default()
        };
        assert!(!flags_for(Profile::Standard, &rate_cut).special_dividend);

        let yield_cut = RawMetrics {
            dividend_yield: Some(0.0),
            trailing_annual_dividend_yield: Some(0.04),
            payout_ratio: Some(0.0),
            ..Default::default()
        };
        assert!(!flags_for(Profile::Financial, &yield_cut).special_dividend);
    }

    #[test]
    fn test_special_dividend_detection_toggle() {
        let metrics = RawMetrics {
            dividend_yield: Some(0.25),
            payout_ratio: Some(0.3),
            ..Default::default()
        };
        let config = ScoringConfig {
            special_dividend_detection_enabled: false,
            ..Default::default()
        };
        let flags = detect_flags(&metrics, &build_summary(Profile::Standard, &metrics), &config);
        assert!(!flags.special_dividend);
        assert!(flags.high_yield_alert);
    }

    #[test]
    fn test_extreme_peg_standard_only() {
        let cheap_growth = RawMetrics {
            forward_pe: Some(10.0),
            eps_current_year: Some(2.0),
            eps_forward: Some(3.0),
            ..Default::default()
        };
        assert!(flags_for(Profile::Standard, &cheap_growth).extreme_peg);
        assert!(!flags_for(Profile::Financial, &cheap_growth).extreme_peg);

        let fair = RawMetrics {
            forward_pe: Some(15.0),
            eps_current_year: Some(2.0),
            eps_forward: Some(2.3),
            ..Default::default()
        };
        assert!(!flags_for(Profile::Standard, &fair).extreme_peg);

        let stretched = RawMetrics {
            forward_pe: Some(60.0),
            eps_current_year: Some(2.0),
            eps_forward: Some(2.2),
            ..Default::default()
        };
        assert!(flags_for(Profile::Standard, &stretched).extreme_peg);
    }
}
