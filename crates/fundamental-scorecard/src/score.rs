use scorecard_core::{BlockScores, Profile, ScoringConfig, SCORE_MAX};

/// Rescales the adjusted block sum onto 0..=20 for the profile.
///
/// Rounds half away from zero. With normalization disabled the raw sum is
/// returned, clamped to the same range.
pub fn normalize_score(raw_sum: u32, profile: Profile, config: &ScoringConfig) -> u8 {
    if !config.normalization_enabled {
        return raw_sum.min(u32::from(SCORE_MAX)) as u8;
    }

    let max_total = f64::from(profile.max_total());
    let scaled = (f64::from(raw_sum) * f64::from(SCORE_MAX) / max_total).round();
    scaled.clamp(0.0, f64::from(SCORE_MAX)) as u8
}

pub fn score_blocks(blocks: &BlockScores, profile: Profile, config: &ScoringConfig) -> u8 {
    normalize_score(blocks.total(), profile, config)
}
