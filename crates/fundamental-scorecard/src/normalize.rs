//! Canonical forms for provider inputs that arrive in mixed units.

use scorecard_core::RawMetrics;

/// Yields above 1.0 are taken as percentages (4.37 -> 0.0437). Exactly 1.0 stays a fraction.
pub fn normalize_yield_fraction(value: Option<f64>) -> Option<f64> {
    value.map(|y| if y > 1.0 { y / 100.0 } else { y })
}

/// Negative payouts are meaningless and dropped. No percentage inference here:
/// payouts above 100% are legitimate.
pub fn normalize_payout_ratio(value: Option<f64>) -> Option<f64> {
    value.filter(|p| *p >= 0.0)
}

/// PEGY = forward P/E / (forward EPS growth * 100).
///
/// Undefined (None) when an input is missing, current EPS is not positive,
/// or growth is not positive.
pub fn compute_pegy(
    forward_pe: Option<f64>,
    eps_current_year: Option<f64>,
    eps_forward: Option<f64>,
) -> Option<f64> {
    let (pe_fwd, eps_current, eps_forward) = (forward_pe?, eps_current_year?, eps_forward?);
    if eps_current <= 0.0 {
        return None;
    }

    let growth_rate = (eps_forward - eps_current) / eps_current;
    if growth_rate <= 0.0 {
        return None;
    }

    Some(pe_fwd / (growth_rate * 100.0))
}

pub fn pegy(metrics: &RawMetrics) -> Option<f64> {
    compute_pegy(metrics.forward_pe, metrics.eps_current_year, metrics.eps_forward)
}

/// Fraction to percent, rounded to two decimals.
pub fn to_pct(fraction: Option<f64>) -> Option<f64> {
    fraction.map(|f| (f * 100.0 * 100.0).round() / 100.0)
}
