use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ScorecardError;

/// Upper bound of every block score.
pub const BLOCK_MAX: u8 = 5;

/// Upper bound of the normalized score.
pub const SCORE_MAX: u8 = 20;

/// Fundamental metrics for one instrument, as delivered by the metrics provider.
///
/// Every field is independently nullable. Keys follow the provider's JSON
/// spelling so a quote-summary payload deserializes directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMetrics {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub return_on_assets: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub price_to_book: Option<f64>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    pub eps_current_year: Option<f64>,
    pub eps_forward: Option<f64>,
    pub beta: Option<f64>,
    pub total_debt: Option<f64>,
    pub total_cash: Option<f64>,
    pub ebitda: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub overall_risk: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub dividend_rate: Option<f64>,
    pub trailing_annual_dividend_rate: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
    pub quote_type: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl RawMetrics {
    /// Best display name: short name, then long name, then the ticker itself.
    pub fn display_name(&self, ticker: &str) -> String {
        self.short_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.long_name.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or(ticker)
            .to_string()
    }
}

/// Rule set selector. Computed once per instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    Standard,
    Financial,
}

impl Profile {
    /// Highest reachable block sum for this profile, used as the normalization base.
    pub fn max_total(&self) -> u8 {
        match self {
            Profile::Standard => 17,
            Profile::Financial => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Standard => "Standard",
            Profile::Financial => "Financial",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockScores {
    pub quality: u8,
    pub safety: u8,
    pub value_growth: u8,
    pub dividend: u8,
}

impl BlockScores {
    pub fn new(quality: u8, safety: u8, value_growth: u8, dividend: u8) -> Self {
        Self {
            quality,
            safety,
            value_growth,
            dividend,
        }
        .clamped()
    }

    /// Caps every block at [`BLOCK_MAX`].
    pub fn clamped(self) -> Self {
        Self {
            quality: self.quality.min(BLOCK_MAX),
            safety: self.safety.min(BLOCK_MAX),
            value_growth: self.value_growth.min(BLOCK_MAX),
            dividend: self.dividend.min(BLOCK_MAX),
        }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.quality)
            + u32::from(self.safety)
            + u32::from(self.value_growth)
            + u32::from(self.dividend)
    }
}

impl fmt::Display for BlockScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quality={} Safety={} ValueGrowth={} Dividend={}",
            self.quality, self.safety, self.value_growth, self.dividend
        )
    }
}

/// Derived values kept for the Standard profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardSummary {
    pub yield_pct: Option<f64>,
    pub payout_pct: Option<f64>,
    pub pegy: Option<f64>,
    pub roa: Option<f64>,
    #[serde(rename = "totalDebt")]
    pub total_debt: Option<f64>,
    #[serde(rename = "totalCash")]
    pub total_cash: Option<f64>,
    pub ebitda: Option<f64>,
    pub beta: Option<f64>,
}

/// Derived values kept for the Financial profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinancialSummary {
    pub roe: Option<f64>,
    pub pb: Option<f64>,
    pub pe_fwd: Option<f64>,
    pub pe_ttm: Option<f64>,
    pub beta: Option<f64>,
    #[serde(rename = "debtToEquity")]
    pub debt_to_equity: Option<f64>,
    #[serde(rename = "overallRisk")]
    pub overall_risk: Option<f64>,
    pub yield_pct: Option<f64>,
    pub payout_pct: Option<f64>,
}

/// Profile-dependent summary consumed by flag and penalty logic.
///
/// Missing data is always `None`; a present zero stays `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSummary {
    Standard(StandardSummary),
    Financial(FinancialSummary),
}

impl RawSummary {
    pub fn profile(&self) -> Profile {
        match self {
            RawSummary::Standard(_) => Profile::Standard,
            RawSummary::Financial(_) => Profile::Financial,
        }
    }

    pub fn yield_pct(&self) -> Option<f64> {
        match self {
            RawSummary::Standard(s) => s.yield_pct,
            RawSummary::Financial(f) => f.yield_pct,
        }
    }

    pub fn payout_pct(&self) -> Option<f64> {
        match self {
            RawSummary::Standard(s) => s.payout_pct,
            RawSummary::Financial(f) => f.payout_pct,
        }
    }
}

/// Diagnostic flags derived before penalties are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub missing_data: bool,
    pub missing_fields: Vec<String>,
    pub payout_unsustainable: bool,
    pub special_dividend: bool,
    pub extreme_peg: bool,
    pub high_yield_alert: bool,
}

impl Flags {
    /// Names of the boolean flags that are raised, in declaration order.
    pub fn raised(&self) -> Vec<&'static str> {
        [
            ("missing_data", self.missing_data),
            ("payout_unsustainable", self.payout_unsustainable),
            ("special_dividend", self.special_dividend),
            ("extreme_peg", self.extreme_peg),
            ("high_yield_alert", self.high_yield_alert),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Recommendation bucket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Acheter,
    Renforcer,
    Conserver,
    Alleger,
    Vendre,
    /// Score fell outside every bucket.
    Indefini,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Acheter => "ACHETER",
            Action::Renforcer => "RENFORCER",
            Action::Conserver => "CONSERVER",
            Action::Alleger => "ALLEGER",
            Action::Vendre => "VENDRE",
            Action::Indefini => "INDEFINI",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Adjusted block scores plus the raw summary they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub blocks: BlockScores,
    pub raw: RawSummary,
}

/// Outcome of analyzing one instrument.
///
/// On failure only `ticker`, `name` and `error` are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub name: String,
    pub profile: Option<Profile>,
    pub score: Option<u8>,
    pub recommendation: Option<Recommendation>,
    pub flags: Option<Flags>,
    pub details: Option<Details>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn failed(ticker: &str, name: &str, error: &ScorecardError) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: name.to_string(),
            profile: None,
            score: None,
            recommendation: None,
            flags: None,
            details: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
