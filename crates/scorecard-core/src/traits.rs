use async_trait::async_trait;
use crate::{RawMetrics, ScorecardError};

/// Source of fundamental metrics for one instrument (market-data provider).
///
/// Implementors own symbol resolution, retries and caching. A failed fetch must
/// come back as `Err` so the engine can emit an error-tagged result instead of
/// scoring partial garbage.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<RawMetrics, ScorecardError>;
}
