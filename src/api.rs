//! Application state and the per-change snapshot handed to renderers.
//!
//! Every input (tap, undo, weight change) is followed by a full re-evaluation;
//! nothing is cached between calls.

use crate::config::{Config, ScoringWeights};
use crate::consts::NODE_COUNT;
use crate::error::LfResult;
use crate::estimator::AttackEstimate;
use crate::geometry::NodeIndex;
use crate::pattern::Pattern;
use crate::scorer::{engine, FeatureSet, RadarProfile, ScoreDetails, Scorer, StrengthRating};
use crate::store::{PatternStore, SavedEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub sequence: Vec<NodeIndex>,
    pub features: FeatureSet,
    /// 0 when the pattern is too short to score.
    pub score: u8,
    pub rating: StrengthRating,
    pub details: Option<ScoreDetails>,
    pub attack: Option<AttackEstimate>,
    pub radar: RadarProfile,
    pub heatmap: [f32; NODE_COUNT],
}

/// Visit intensity per node, scaled so the busiest node is 1.0.
pub fn heatmap(seq: &[NodeIndex]) -> [f32; NODE_COUNT] {
    let mut counts = [0u32; NODE_COUNT];
    for &n in seq {
        if let Some(c) = counts.get_mut(n as usize) {
            *c += 1;
        }
    }
    let max = counts.iter().copied().max().unwrap_or(0).max(1) as f32;
    counts.map(|c| c as f32 / max)
}

/// Evaluates a pattern against a fixed configuration.
pub fn evaluate_pattern(pattern: &Pattern, config: &Config) -> Evaluation {
    let scorer = Scorer::new(config.weights.clone());
    let features = scorer.features(pattern);
    let details = scorer.score_details(&features);
    let score = details.map_or(0, |d| d.score);
    let attack = details
        .map(|d| AttackEstimate::from_score(d.score, config.attack.attempts_per_second));
    let radar = RadarProfile::from_features(&features, &engine::normalize(&features));

    Evaluation {
        sequence: pattern.nodes().to_vec(),
        heatmap: heatmap(pattern.nodes()),
        rating: StrengthRating::from_score(score),
        features,
        score,
        details,
        attack,
        radar,
    }
}

/// The trainer's whole mutable state: the pattern being drawn and the
/// current configuration.
#[derive(Debug, Clone, Default)]
pub struct TrainerState {
    pub pattern: Pattern,
    pub config: Config,
}

impl TrainerState {
    pub fn new(config: Config) -> Self {
        Self {
            pattern: Pattern::new(),
            config,
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        evaluate_pattern(&self.pattern, &self.config)
    }

    /// Candidate node from the input source; `None` means nothing under the pointer.
    pub fn tap(&mut self, candidate: Option<NodeIndex>) -> Evaluation {
        self.pattern.try_append(candidate);
        self.evaluate()
    }

    /// Pointer position in pad pixels.
    pub fn tap_point(&mut self, x: f64, y: f64) -> Evaluation {
        let candidate = self.config.pad.layout().nearest_node(x, y);
        self.tap(candidate)
    }

    pub fn undo(&mut self) -> Evaluation {
        self.pattern.undo();
        self.evaluate()
    }

    pub fn clear(&mut self) -> Evaluation {
        self.pattern.clear();
        self.evaluate()
    }

    pub fn set_weights(&mut self, weights: ScoringWeights) -> Evaluation {
        self.config.weights = weights;
        self.evaluate()
    }

    pub fn reset_weights(&mut self) -> Evaluation {
        self.config.weights.reset();
        self.evaluate()
    }

    pub fn set_attempts_per_second(&mut self, rate: u64) -> Evaluation {
        self.config.attack.attempts_per_second = rate.max(1);
        self.evaluate()
    }

    /// Persists the current pattern with the formula score (not the 0 policy).
    pub fn save(&self, store: &PatternStore, name: Option<&str>) -> LfResult<SavedEntry> {
        let features = FeatureSet::extract(self.pattern.nodes());
        let score = engine::score(&features, &self.config.weights);
        store.add(name, &self.pattern, score)
    }

    pub fn load_entry(&mut self, entry: &SavedEntry) -> Evaluation {
        self.pattern = entry.pattern();
        self.evaluate()
    }
}
