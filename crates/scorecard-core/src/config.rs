use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::ScorecardError;

/// Safety penalty for financial firms whose `overallRisk` reaches `risk_min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPenalty {
    pub risk_min: f64,
    pub penalty: u8,
}

/// One effect of an extreme-payout gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutEffect {
    /// Dividend block forced to this value.
    DividendTo(u8),
    /// Dividend block capped at this value.
    DividendCap(u8),
    /// Points removed from the Safety block (floored at zero).
    SafetyMinus(u8),
}

/// Extreme-payout gate: applies `effects` when payout_pct >= `payout_pct_min`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutGate {
    pub payout_pct_min: f64,
    pub effects: Vec<PayoutEffect>,
}

/// Criteria for the Standard-profile compounder Quality boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompounderCriteria {
    pub roa_min: f64,
    pub beta_max: f64,
    pub payout_pct_min: f64,
    pub payout_pct_max: f64,
    pub safety_min: u8,
    pub boost_points: u8,
}

impl Default for CompounderCriteria {
    fn default() -> Self {
        Self {
            roa_min: 0.065,
            beta_max: 0.9,
            payout_pct_min: 30.0,
            payout_pct_max: 70.0,
            safety_min: 3,
            boost_points: 1,
        }
    }
}

/// Process-wide scoring knobs. Built once, read-only afterwards.
///
/// Rule tables (`financial_risk_penalties`, `payout_gates`) are scanned in
/// declaration order and the first matching entry wins, so their order matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub normalization_enabled: bool,
    pub recommendation_enabled: bool,
    pub special_dividend_detection_enabled: bool,
    pub high_yield_penalty_enabled: bool,
    pub financial_risk_penalty_enabled: bool,
    pub extreme_payout_gate_enabled: bool,
    pub compounder_boost_enabled: bool,

    // Flag thresholds (percent values compare against yield_pct / payout_pct)
    pub payout_unsustainable_pct: f64,
    pub high_yield_alert_pct: f64,
    pub special_dividend_yield_pct: f64,
    pub special_dividend_multiplier: f64,
    pub extreme_peg_low: f64,
    pub extreme_peg_high: f64,
    pub missing_data_min_fields: usize,

    // Penalties and boosts
    pub special_dividend_max_score: u8,
    pub high_yield_penalty_points: u8,
    pub financial_risk_penalties: Vec<RiskPenalty>,
    pub payout_gates: Vec<PayoutGate>,
    pub compounder: CompounderCriteria,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            normalization_enabled: true,
            recommendation_enabled: true,
            special_dividend_detection_enabled: true,
            high_yield_penalty_enabled: true,
            financial_risk_penalty_enabled: true,
            extreme_payout_gate_enabled: true,
            compounder_boost_enabled: true,

            payout_unsustainable_pct: 95.0,
            high_yield_alert_pct: 8.0,
            special_dividend_yield_pct: 20.0,
            special_dividend_multiplier: 1.25,
            extreme_peg_low: 0.20,
            extreme_peg_high: 3.00,
            missing_data_min_fields: 3,

            special_dividend_max_score: 2,
            high_yield_penalty_points: 1,
            financial_risk_penalties: vec![RiskPenalty {
                risk_min: 7.0,
                penalty: 1,
            }],
            // 150 must be checked before 100
            payout_gates: vec![
                PayoutGate {
                    payout_pct_min: 150.0,
                    effects: vec![PayoutEffect::DividendTo(0), PayoutEffect::SafetyMinus(1)],
                },
                PayoutGate {
                    payout_pct_min: 100.0,
                    effects: vec![PayoutEffect::DividendCap(1)],
                },
            ],
            compounder: CompounderCriteria::default(),
        }
    }
}

impl ScoringConfig {
    /// Defaults overridden by `SCORECARD_*` toggles from the environment (and `.env`).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            normalization_enabled: env_flag(
                "SCORECARD_NORMALIZATION_ENABLED",
                defaults.normalization_enabled,
            )?,
            recommendation_enabled: env_flag(
                "SCORECARD_RECOMMENDATION_ENABLED",
                defaults.recommendation_enabled,
            )?,
            special_dividend_detection_enabled: env_flag(
                "SCORECARD_SPECIAL_DIVIDEND_DETECTION_ENABLED",
                defaults.special_dividend_detection_enabled,
            )?,
            high_yield_penalty_enabled: env_flag(
                "SCORECARD_HIGH_YIELD_PENALTY_ENABLED",
                defaults.high_yield_penalty_enabled,
            )?,
            financial_risk_penalty_enabled: env_flag(
                "SCORECARD_FINANCIAL_RISK_PENALTY_ENABLED",
                defaults.financial_risk_penalty_enabled,
            )?,
            extreme_payout_gate_enabled: env_flag(
                "SCORECARD_EXTREME_PAYOUT_GATE_ENABLED",
                defaults.extreme_payout_gate_enabled,
            )?,
            compounder_boost_enabled: env_flag(
                "SCORECARD_COMPOUNDER_BOOST_ENABLED",
                defaults.compounder_boost_enabled,
            )?,
            ..defaults
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects threshold combinations that can never match.
    pub fn validate(&self) -> std::result::Result<(), ScorecardError> {
        if self.extreme_peg_low >= self.extreme_peg_high {
            return Err(ScorecardError::Config(format!(
                "extreme_peg_low ({}) must be below extreme_peg_high ({})",
                self.extreme_peg_low, self.extreme_peg_high
            )));
        }
        if self.compounder.payout_pct_min > self.compounder.payout_pct_max {
            return Err(ScorecardError::Config(format!(
                "compounder payout range is empty ({}..={})",
                self.compounder.payout_pct_min, self.compounder.payout_pct_max
            )));
        }
        if self.special_dividend_multiplier <= 0.0 {
            return Err(ScorecardError::Config(
                "special_dividend_multiplier must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_flag(key: &str, default: bool) -> Result<bool> {
    parse_flag(key, env::var(key).ok(), default)
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> Result<bool> {
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .to_ascii_lowercase()
            .parse::<bool>()
            .with_context(|| format!("{} must be true or false, got {:?}", key, value)),
    }
}
