pub mod adjustments;
pub mod blocks;
pub mod flags;
pub mod normalize;
pub mod profile;
pub mod recommendation;
pub mod score;
pub mod summary;

use scorecard_core::{
    AnalysisResult, Details, MetricsProvider, RawMetrics, ScorecardError, ScoringConfig,
};

pub use profile::{classify, classify_metrics};
pub use recommendation::{recommend, Bucket, BUCKETS};

/// Quote types the scorecard knows how to read. Compared case-insensitively.
const ACCEPTED_QUOTE_TYPES: &[&str] = &["EQUITY", "ETF"];

/// Fundamental quality scorecard: turns one instrument's metrics into a 0-20
/// score and a recommendation.
///
/// Holds only read-only configuration, so a single engine can be shared across
/// threads and reused for any number of instruments.
#[derive(Debug, Clone)]
pub struct ScorecardEngine {
    config: ScoringConfig,
}

impl ScorecardEngine {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a provider fetch. A failed fetch becomes an error-tagged result
    /// and no scoring is attempted.
    pub fn analyze(
        &self,
        ticker: &str,
        fetched: Result<RawMetrics, ScorecardError>,
    ) -> AnalysisResult {
        match fetched {
            Ok(metrics) => self.analyze_metrics(ticker, &metrics),
            Err(e) => {
                tracing::warn!("Failed to fetch metrics for {}: {}", ticker, e);
                AnalysisResult::failed(ticker, ticker, &e)
            }
        }
    }

    /// Fetches through `provider` then scores. Retries are the provider's business.
    pub async fn analyze_symbol(
        &self,
        provider: &dyn MetricsProvider,
        symbol: &str,
    ) -> AnalysisResult {
        let fetched = provider.fetch(symbol).await;
        self.analyze(symbol, fetched)
    }

    /// Runs the full pipeline on metrics that were fetched successfully.
    pub fn analyze_metrics(&self, ticker: &str, metrics: &RawMetrics) -> AnalysisResult {
        let name = metrics.display_name(ticker);

        if let Err(e) = validate_quote_type(metrics) {
            tracing::warn!("Skipping {}: {}", ticker, e);
            return AnalysisResult::failed(ticker, &name, &e);
        }

        let profile = profile::classify_metrics(metrics);
        let initial = blocks::score_blocks(profile, metrics);
        let raw = summary::build_summary(profile, metrics);

        // Flags are computed on unadjusted data, before any penalty
        let flags = flags::detect_flags(metrics, &raw, &self.config);
        let blocks = adjustments::apply_adjustments(initial, &flags, &raw, &self.config);
        let score = score::score_blocks(&blocks, profile, &self.config);

        tracing::debug!(
            "{} [{}]: initial {} -> adjusted {} sum={} -> normalized={}/20",
            ticker,
            profile,
            initial,
            blocks,
            blocks.total(),
            score
        );

        let recommendation = self
            .config
            .recommendation_enabled
            .then(|| recommendation::recommend(score, &flags));

        AnalysisResult {
            ticker: ticker.to_string(),
            name,
            profile: Some(profile),
            score: Some(score),
            recommendation,
            flags: Some(flags),
            details: Some(Details { blocks, raw }),
            error: None,
        }
    }
}

impl Default for ScorecardEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects instruments whose quote type is missing or not equity/fund-like.
pub fn validate_quote_type(metrics: &RawMetrics) -> Result<(), ScorecardError> {
    let quote_type = metrics.quote_type.as_deref().unwrap_or_default().trim();
    if ACCEPTED_QUOTE_TYPES
        .iter()
        .any(|accepted| quote_type.eq_ignore_ascii_case(accepted))
    {
        Ok(())
    } else {
        Err(ScorecardError::InvalidQuoteType(quote_type.to_string()))
    }
}
