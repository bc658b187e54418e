//! Ordered penalty/boost chain applied to block scores after initial scoring.
//!
//! Each step takes the blocks by value and returns the adjusted copy; later
//! steps see the result of earlier ones, so the order in [`apply_adjustments`]
//! is part of the scoring rules.

use scorecard_core::{
    BlockScores, Flags, PayoutEffect, RawSummary, ScoringConfig, StandardSummary, BLOCK_MAX,
};

pub fn apply_adjustments(
    blocks: BlockScores,
    flags: &Flags,
    summary: &RawSummary,
    config: &ScoringConfig,
) -> BlockScores {
    let blocks = cap_special_dividend(blocks, flags, config);
    let blocks = penalize_high_yield(blocks, flags, config);

    let blocks = match summary {
        RawSummary::Financial(f) => penalize_financial_risk(blocks, f.overall_risk, config),
        RawSummary::Standard(s) => {
            let blocks = gate_extreme_payout(blocks, s.payout_pct, config);
            boost_compounder(blocks, s, config)
        }
    };

    blocks.clamped()
}

fn cap_special_dividend(blocks: BlockScores, flags: &Flags, config: &ScoringConfig) -> BlockScores {
    if !(flags.special_dividend && config.special_dividend_detection_enabled) {
        return blocks;
    }
    BlockScores {
        dividend: blocks.dividend.min(config.special_dividend_max_score),
        ..blocks
    }
}

fn penalize_high_yield(blocks: BlockScores, flags: &Flags, config: &ScoringConfig) -> BlockScores {
    if !(flags.high_yield_alert && config.high_yield_penalty_enabled) {
        return blocks;
    }
    BlockScores {
        dividend: blocks.dividend.saturating_sub(config.high_yield_penalty_points),
        ..blocks
    }
}

/// First matching entry of `financial_risk_penalties` wins; later entries are ignored.
fn penalize_financial_risk(
    blocks: BlockScores,
    overall_risk: Option<f64>,
    config: &ScoringConfig,
) -> BlockScores {
    if !config.financial_risk_penalty_enabled {
        return blocks;
    }
    let Some(risk) = overall_risk else {
        return blocks;
    };

    match config
        .financial_risk_penalties
        .iter()
        .find(|rule| risk >= rule.risk_min)
    {
        Some(rule) => {
            tracing::debug!(
                "overallRisk {} >= {}: Safety -{}",
                risk,
                rule.risk_min,
                rule.penalty
            );
            BlockScores {
                safety: blocks.safety.saturating_sub(rule.penalty),
                ..blocks
            }
        }
        None => blocks,
    }
}

/// Payout gates are scanned in declaration order (150 before 100), first match wins.
fn gate_extreme_payout(
    blocks: BlockScores,
    payout_pct: Option<f64>,
    config: &ScoringConfig,
) -> BlockScores {
    if !config.extreme_payout_gate_enabled {
        return blocks;
    }
    let Some(payout) = payout_pct else {
        return blocks;
    };

    let Some(gate) = config
        .payout_gates
        .iter()
        .find(|gate| payout >= gate.payout_pct_min)
    else {
        return blocks;
    };

    tracing::debug!(
        "payout {:.2}% >= {}%: applying {:?}",
        payout,
        gate.payout_pct_min,
        gate.effects
    );

    gate.effects
        .iter()
        .fold(blocks, |blocks, effect| match *effect {
            PayoutEffect::DividendTo(value) => BlockScores {
                dividend: value.min(BLOCK_MAX),
                ..blocks
            },
            PayoutEffect::DividendCap(cap) => BlockScores {
                dividend: blocks.dividend.min(cap),
                ..blocks
            },
            PayoutEffect::SafetyMinus(points) => BlockScores {
                safety: blocks.safety.saturating_sub(points),
                ..blocks
            },
        })
}

/// Low-beta, high-ROA companies with a moderate payout earn an extra Quality
/// point, provided Safety survived the earlier penalties.
fn boost_compounder(
    blocks: BlockScores,
    summary: &StandardSummary,
    config: &ScoringConfig,
) -> BlockScores {
    if !config.compounder_boost_enabled {
        return blocks;
    }
    let (Some(roa), Some(beta), Some(payout)) = (summary.roa, summary.beta, summary.payout_pct) else {
        return blocks;
    };

    let criteria = &config.compounder;
    let qualifies = roa >= criteria.roa_min
        && beta < criteria.beta_max
        && (criteria.payout_pct_min..=criteria.payout_pct_max).contains(&payout)
        && blocks.safety >= criteria.safety_min;

    if !qualifies {
        return blocks;
    }

    tracing::debug!("compounder boost: Quality +{}", criteria.boost_points);
    BlockScores {
        quality: blocks.quality.saturating_add(criteria.boost_points).min(BLOCK_MAX),
        ..blocks
    }
}
