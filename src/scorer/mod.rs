pub mod engine;
pub mod features;
pub mod physics;
pub mod types;

pub use self::types::{
    FeatureSet, NormalizedFeatures, RadarProfile, ScoreDetails, StrengthRating, SymmetryLevel,
};
use crate::config::ScoringWeights;
use crate::consts::MIN_SCORABLE_LEN;
use crate::pattern::Pattern;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn features(&self, pattern: &Pattern) -> FeatureSet {
        FeatureSet::extract(pattern.nodes())
    }

    /// Breakdown for a scorable pattern, `None` below the minimum length.
    pub fn score_details(&self, features: &FeatureSet) -> Option<ScoreDetails> {
        if features.length < MIN_SCORABLE_LEN {
            return None;
        }
        let details = engine::score_details(features, &self.weights);
        debug!(
            "score {} (raw {:.3}) for len={} turns={} x={} angvar={:.3}",
            details.score,
            details.raw,
            features.length,
            features.turns,
            features.intersections,
            features.angle_variance
        );
        Some(details)
    }

    /// Strength score, reported as 0 for patterns too short to score.
    pub fn score_pattern(&self, pattern: &Pattern) -> u8 {
        let features = self.features(pattern);
        self.score_details(&features).map_or(0, |d| d.score)
    }
}
