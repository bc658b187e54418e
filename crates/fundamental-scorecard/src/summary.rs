use scorecard_core::{FinancialSummary, Profile, RawMetrics, RawSummary, StandardSummary};

use crate::normalize::{normalize_payout_ratio, normalize_yield_fraction, pegy, to_pct};

/// Builds the profile's raw summary. Absent inputs stay `None`; a computed 0.0
/// yield or payout is kept as a present zero.
pub fn build_summary(profile: Profile, metrics: &RawMetrics) -> RawSummary {
    let yield_pct = to_pct(normalize_yield_fraction(metrics.dividend_yield));
    let payout_pct = to_pct(normalize_payout_ratio(metrics.payout_ratio));

    match profile {
        Profile::Standard => RawSummary::Standard(StandardSummary {
            yield_pct,
            payout_pct,
            pegy: pegy(metrics),
            roa: metrics.return_on_assets,
            total_debt: metrics.total_debt,
            total_cash: metrics.total_cash,
            ebitda: metrics.ebitda,
            beta: metrics.beta,
        }),
        Profile::Financial => RawSummary::Financial(FinancialSummary {
            roe: metrics.return_on_equity,
            pb: metrics.price_to_book,
            pe_fwd: metrics.forward_pe,
            pe_ttm: metrics.trailing_pe,
            beta: metrics.beta,
            debt_to_equity: metrics.debt_to_equity,
            overall_risk: metrics.overall_risk,
            yield_pct,
            payout_pct,
        }),
    }
}
