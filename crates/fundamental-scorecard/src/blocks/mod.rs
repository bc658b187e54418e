//! Per-profile block scorers.
//!
//! Every scorer is total: a missing input maps to a fixed default contribution
//! and never aborts scoring.

pub mod financial;
pub mod standard;

use scorecard_core::{BlockScores, Profile, RawMetrics};

pub fn score_blocks(profile: Profile, metrics: &RawMetrics) -> BlockScores {
    match profile {
        Profile::Standard => standard::score(metrics),
        Profile::Financial => financial::score(metrics),
    }
}

/// Beta contribution shared by both Safety scorers (0..=2, neutral 1 when unknown).
pub(crate) fn beta_points(beta: Option<f64>) -> u8 {
    match beta {
        None => 1,
        Some(b) if b < 0.7 => 2,
        Some(b) if b < 1.2 => 1,
        Some(_) => 0,
    }
}
