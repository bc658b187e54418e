//! Scorers for banks, insurers and asset managers.
//!
//! Debt/EBITDA and PEGY are meaningless for balance-sheet businesses, so these
//! lean on ROE, price-to-book and the provider's governance risk score instead.

use scorecard_core::{BlockScores, RawMetrics, BLOCK_MAX};

use super::beta_points;
use crate::normalize::{normalize_payout_ratio, normalize_yield_fraction};

/// Quality [0..5]: ROE plus price-to-book.
pub fn score_quality(metrics: &RawMetrics) -> u8 {
    let roe_points = match metrics.return_on_equity {
        None => 1,
        Some(roe) if roe >= 0.15 => 3,
        Some(roe) if roe >= 0.12 => 2,
        Some(roe) if roe >= 0.08 => 1,
        Some(_) => 0,
    };

    let pb_points = match metrics.price_to_book {
        None => 1,
        Some(pb) if pb < 1.0 => 2,
        Some(pb) if pb < 1.5 => 1,
        Some(_) => 0,
    };

    (roe_points + pb_points).min(BLOCK_MAX)
}

/// Safety [0..5]: beta, debt/equity, and a bonus point for low overall risk.
pub fn score_safety(metrics: &RawMetrics) -> u8 {
    let d2e_points = match metrics.debt_to_equity {
        None => 1,
        Some(d2e) if d2e < 100.0 => 2,
        Some(d2e) if d2e < 150.0 => 1,
        Some(_) => 0,
    };

    let risk_bonus = match metrics.overall_risk {
        Some(risk) if risk <= 2.0 => 1,
        _ => 0,
    };

    (beta_points(metrics.beta) + d2e_points + risk_bonus).min(BLOCK_MAX)
}

/// ValueGrowth [0..5]: forward and trailing P/E, plus a deep-discount P/B bonus.
pub fn score_value_growth(metrics: &RawMetrics) -> u8 {
    let fwd_points = match metrics.forward_pe {
        None => 1,
        Some(pe) if pe < 10.0 => 2,
        Some(pe) if pe < 12.0 => 1,
        Some(_) => 0,
    };

    let ttm_points = match metrics.trailing_pe {
        None => 1,
        Some(pe) if pe < 12.0 => 2,
        Some(pe) if pe < 15.0 => 1,
        Some(_) => 0,
    };

    let pb_bonus = match metrics.price_to_book {
        Some(pb) if pb < 0.8 => 1,
        _ => 0,
    };

    (fwd_points + ttm_points + pb_bonus).min(BLOCK_MAX)
}

/// Dividend [0..5]: yield (no default) plus payout, with tighter payout bands than Standard.
pub fn score_dividend(metrics: &RawMetrics) -> u8 {
    let yield_points = match normalize_yield_fraction(metrics.dividend_yield) {
        Some(y) if y >= 0.05 => 3,
        Some(y) if y >= 0.03 => 2,
        Some(y) if y >= 0.02 => 1,
        _ => 0,
    };

    let payout_points = match normalize_payout_ratio(metrics.payout_ratio) {
        None => 1,
        Some(p) if p <= 0.7 => 2,
        Some(p) if p <= 0.9 => 1,
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
