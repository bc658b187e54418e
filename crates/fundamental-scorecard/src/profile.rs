use scorecard_core::{Profile, RawMetrics};

/// Sector/industry fragments that mark a bank, insurer or asset manager.
const FINANCIAL_KEYWORDS: &[&str] = &[
    "financial",
    "bank",
    "insurance",
    "capital markets",
    "asset management",
    "credit services",
];

/// Case-insensitive substring match against [`FINANCIAL_KEYWORDS`].
pub fn classify(sector: Option<&str>, industry: Option<&str>) -> Profile {
    let sector = sector.unwrap_or_default().to_lowercase();
    let industry = industry.unwrap_or_default().to_lowercase();

    let is_financial = FINANCIAL_KEYWORDS
        .iter()
        .any(|kw| sector.contains(kw) || industry.contains(kw));

    if is_financial {
        Profile::Financial
    } else {
        Profile::Standard
    }
}

pub fn classify_metrics(metrics: &RawMetrics) -> Profile {
    classify(metrics.sector.as_deref(), metrics.industry.as_deref())
}
