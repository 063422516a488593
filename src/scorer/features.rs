use super::physics::{segments_cross, turn_angle};
use super::types::{FeatureSet, SymmetryLevel};
use crate::consts::TURN_THRESHOLD_RAD;
use crate::geometry::{classify, NodeClass, NodeIndex, Reflection};
use strum::IntoEnumIterator;

/// Direction change at every interior node, in radians.
pub fn turn_angles(seq: &[NodeIndex]) -> Vec<f64> {
    seq.windows(3)
        .map(|w| turn_angle(w[0], w[1], w[2]))
        .collect()
}

pub fn count_turns(seq: &[NodeIndex]) -> usize {
    turn_angles(seq)
        .into_iter()
        .filter(|&a| a > TURN_THRESHOLD_RAD)
        .count()
}

/// Population variance of the turn angles; 0 below three nodes.
pub fn angle_variance(seq: &[NodeIndex]) -> f64 {
    let angles = turn_angles(seq);
    if angles.is_empty() {
        return 0.0;
    }
    let n = angles.len() as f64;
    let mean = angles.iter().sum::<f64>() / n;
    angles.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n
}

/// Proper crossings between non-consecutive segments of the polyline.
///
/// The pairing of the first segment with the last one is never tested.
pub fn count_intersections(seq: &[NodeIndex]) -> usize {
    if seq.len() < 4 {
        return 0;
    }
    let segments = seq.len() - 1;
    let mut count = 0;
    for i in 0..segments {
        for j in (i + 2)..segments {
            if i == 0 && j == segments - 1 {
                continue;
            }
            if segments_cross(seq[i], seq[i + 1], seq[j], seq[j + 1]) {
                count += 1;
            }
        }
    }
    count
}

pub fn start_class(seq: &[NodeIndex]) -> Option<NodeClass> {
    seq.first().and_then(|&n| classify(n))
}

/// Reflections under which the sequence (or its reverse) maps onto itself.
pub fn matching_reflections(seq: &[NodeIndex]) -> Vec<Reflection> {
    if seq.is_empty() {
        return Vec::new();
    }
    Reflection::iter().filter(|r| r.fixes(seq)).collect()
}

pub fn symmetry(seq: &[NodeIndex]) -> SymmetryLevel {
    if seq.is_empty() {
        return SymmetryLevel::Low;
    }
    if Reflection::iter().any(|r| r.fixes(seq)) {
        SymmetryLevel::High
    } else {
        SymmetryLevel::Low
    }
}

impl FeatureSet {
    /// Full recomputation from a canonical sequence.
    pub fn extract(seq: &[NodeIndex]) -> Self {
        let matched_reflections = matching_reflections(seq);
        let symmetry = if matched_reflections.is_empty() {
            SymmetryLevel::Low
        } else {
            SymmetryLevel::High
        };
        Self {
            length: seq.len(),
            turns: count_turns(seq),
            intersections: count_intersections(seq),
            angle_variance: angle_variance(seq),
            start: start_class(seq),
            symmetry,
            matched_reflections,
        }
    }
}
