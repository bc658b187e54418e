use scorecard_core::{Action, Flags, Recommendation};

/// Inclusive score range mapped to an action.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub action: Action,
    pub score_min: u8,
    pub score_max: u8,
    pub description: &'static str,
}

impl Bucket {
    pub fn contains(&self, score: u8) -> bool {
        (self.score_min..=self.score_max).contains(&score)
    }
}

/// Evaluated top-down; first match wins.
pub const BUCKETS: [Bucket; 5] = [
    Bucket {
        action: Action::Acheter,
        score_min: 16,
        score_max: 20,
        description: "Excellence exceptionnelle - Opportunité d'accumulation prioritaire",
    },
    Bucket {
        action: Action::Renforcer,
        score_min: 14,
        score_max: 15,
        description: "Très bonne qualité - Accumuler progressivement sur replis",
    },
    Bucket {
        action: Action::Conserver,
        score_min: 12,
        score_max: 13,
        description: "Cœur de portefeuille - Tenir long terme, ne pas vendre",
    },
    Bucket {
        action: Action::Alleger,
        score_min: 9,
        score_max: 11,
        description: "Qualité correcte mais pas prioritaire - Réduire si surpondéré",
    },
    Bucket {
        action: Action::Vendre,
        score_min: 0,
        score_max: 8,
        description: "Qualité insuffisante ou risque élevé - Sortir progressivement",
    },
];

pub const WARN_PAYOUT: &str = "⚠️ Surveiller dividende (payout élevé)";
pub const WARN_HIGH_YIELD: &str = "⚠️ Yield extrême, vérifier durabilité";
pub const WARN_SPECIAL_DIVIDEND: &str = "⚠️ Dividende exceptionnel détecté";

/// A special dividend inflates the score, so good scores are knocked down one notch.
pub fn effective_score(score: u8, flags: &Flags) -> u8 {
    if flags.special_dividend && score >= 12 {
        score - 1
    } else {
        score
    }
}

pub fn find_bucket(score: u8) -> Option<&'static Bucket> {
    BUCKETS.iter().find(|bucket| bucket.contains(score))
}

pub fn recommend(score: u8, flags: &Flags) -> Recommendation {
    let Some(bucket) = find_bucket(effective_score(score, flags)) else {
        return Recommendation {
            action: Action::Indefini,
            description: None,
            warnings: Vec::new(),
        };
    };

    // Warnings use the unadjusted score, except the yield check which follows the action
    let mut warnings = Vec::new();
    if flags.payout_unsustainable && score >= 14 {
        warnings.push(WARN_PAYOUT.to_string());
    }
    if flags.high_yield_alert && matches!(bucket.action, Action::Acheter | Action::Renforcer) {
        warnings.push(WARN_HIGH_YIELD.to_string());
    }
    if flags.special_dividend && score >= 12 {
        warnings.push(WARN_SPECIAL_DIVIDEND.to_string());
    }

    Recommendation {
        action: bucket.action,
        description: Some(bucket.description.to_string()),
        warnings,
    }
}
