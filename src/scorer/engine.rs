use super::types::{FeatureSet, NormalizedFeatures, ScoreDetails, SymmetryLevel};
use crate::config::ScoringWeights;
use crate::consts::*;
use crate::geometry::NodeClass;

#[inline(always)]
fn unit_clamp(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

pub fn start_penalty_factor(start: Option<NodeClass>) -> f64 {
    match start {
        Some(NodeClass::Corner) => 1.0,
        Some(NodeClass::Edge) => 0.6,
        Some(NodeClass::Center) | None => 0.0,
    }
}

pub fn normalize(features: &FeatureSet) -> NormalizedFeatures {
    NormalizedFeatures {
        length: unit_clamp((features.length as f64 - LENGTH_NORM_OFFSET) / LENGTH_NORM_SPAN),
        turns: unit_clamp(features.turns as f64 / TURN_NORM_CAP),
        intersections: unit_clamp(features.intersections as f64 / INTERSECTION_NORM_CAP),
        angle_variance: unit_clamp(features.angle_variance / ANGLE_VARIANCE_NORM_CAP),
        start_penalty: start_penalty_factor(features.start),
        symmetry_penalty: match features.symmetry {
            SymmetryLevel::High => 1.0,
            SymmetryLevel::Low => 0.0,
        },
    }
}

/// Weighted breakdown of the strength score.
///
/// Assumes a pattern of at least `MIN_SCORABLE_LEN` nodes; shorter patterns
/// are filtered out by the caller.
pub fn score_details(features: &FeatureSet, w: &ScoringWeights) -> ScoreDetails {
    let n = normalize(features);

    let mut d = ScoreDetails {
        base: BASE_SCORE,
        length_bonus: w.weight_length * n.length * LENGTH_POINTS,
        turn_bonus: w.weight_turns * n.turns * TURN_POINTS,
        intersection_bonus: w.weight_intersections * n.intersections * INTERSECTION_POINTS,
        angle_bonus: w.weight_angle_variance * n.angle_variance * ANGLE_POINTS,
        start_penalty: w.weight_start * n.start_penalty * START_PENALTY_POINTS,
        symmetry_penalty: w.weight_symmetry * n.symmetry_penalty * SYMMETRY_PENALTY_POINTS,
        ..Default::default()
    };

    d.raw = d.base + d.total_bonus() - d.total_penalty();
    // Half-up rounding, then the hard floor/ceiling.
    let rounded = (d.raw + 0.5).floor();
    d.score = rounded.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8;
    d
}

pub fn score(features: &FeatureSet, weights: &ScoringWeights) -> u8 {
    score_details(features, weights).score
}
