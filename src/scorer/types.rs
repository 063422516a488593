use crate::geometry::{NodeClass, Reflection};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SymmetryLevel {
    #[default]
    Low,
    /// At least one reflection maps the pattern onto itself (or its reverse).
    High,
}

/// Snapshot of the geometric features of one canonical pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub length: usize,
    pub turns: usize,
    pub intersections: usize,
    pub angle_variance: f64,
    /// `None` for the empty pattern.
    pub start: Option<NodeClass>,
    pub symmetry: SymmetryLevel,
    pub matched_reflections: Vec<Reflection>,
}

/// Every feature mapped onto `[0, 1]`, plus the two penalty factors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFeatures {
    pub length: f64,
    pub turns: f64,
    pub intersections: f64,
    pub angle_variance: f64,
    pub start_penalty: f64,
    pub symmetry_penalty: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line
    pub score: u8,
    pub raw: f64,

    pub base: f64,

    // Weighted bonuses
    pub length_bonus: f64,
    pub turn_bonus: f64,
    pub intersection_bonus: f64,
    pub angle_bonus: f64,

    // Weighted penalties (subtracted from the total)
    pub start_penalty: f64,
    pub symmetry_penalty: f64,
}

impl ScoreDetails {
    pub fn total_bonus(&self) -> f64 {
        self.length_bonus + self.turn_bonus + self.intersection_bonus + self.angle_bonus
    }

    pub fn total_penalty(&self) -> f64 {
        self.start_penalty + self.symmetry_penalty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthRating {
    #[strum(serialize = "very weak")]
    VeryWeak,
    #[strum(serialize = "weak")]
    Weak,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "strong")]
    Strong,
}

impl StrengthRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::Strong,
            50..=74 => Self::Medium,
            25..=49 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }
}

/// Six radar-chart axes, each in `[0, 1]`.
///
/// Start and symmetry are plotted as "how favourable", not as the score's
/// penalty factors: a center start plots highest, a symmetric pattern plots 0.8.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarProfile {
    pub length: f64,
    pub turns: f64,
    pub intersections: f64,
    pub angle_variance: f64,
    pub start: f64,
    pub symmetry: f64,
}

impl RadarProfile {
    pub const LABELS: [&'static str; 6] = [
        "Length",
        "Turns",
        "Intersections",
        "Angle Var",
        "Start",
        "Symmetry",
    ];

    pub fn from_features(features: &FeatureSet, norm: &NormalizedFeatures) -> Self {
        if features.length == 0 {
            return Self::default();
        }
        let start = match features.start {
            Some(NodeClass::Center) => 1.0,
            Some(NodeClass::Edge) => 0.6,
            Some(NodeClass::Corner) => 0.3,
            None => 0.0,
        };
        let symmetry = match features.symmetry {
            SymmetryLevel::Low => 0.2,
            SymmetryLevel::High => 0.8,
        };
        Self {
            length: norm.length,
            turns: norm.turns,
            intersections: norm.intersections,
            angle_variance: norm.angle_variance,
            start,
            symmetry,
        }
    }

    pub fn axes(&self) -> [f64; 6] {
        [
            self.length,
            self.turns,
            self.intersections,
            self.angle_variance,
            self.start,
            self.symmetry,
        ]
    }
}
