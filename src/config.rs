use crate::consts::{WEIGHT_MAX, WEIGHT_MIN};
use crate::error::{LfResult, LockForgeError};
use crate::geometry::PadLayout;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub attack: AttackParams,
    /// Only pointer input needs the pad, so the flags live on `analyze`.
    #[arg(skip)]
    pub pad: PadParams,
}

/// Clap parser for a weight slider value.
pub fn parse_weight(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&v) {
        return Err(format!(
            "weight {} is outside [{}, {}]",
            v, WEIGHT_MIN, WEIGHT_MAX
        ));
    }
    Ok(v)
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === BONUSES ===
    #[arg(long, default_value_t = 1.0, value_parser = parse_weight, allow_negative_numbers = true)]
    pub weight_length: f64,
    #[arg(long, default_value_t = 1.0, value_parser = parse_weight, allow_negative_numbers = true)]
    pub weight_turns: f64,
    #[arg(long, default_value_t = 1.0, value_parser = parse_weight, allow_negative_numbers = true)]
    pub weight_intersections: f64,
    #[arg(long, default_value_t = 1.0, value_parser = parse_weight, allow_negative_numbers = true)]
    pub weight_angle_variance: f64,

    // === PENALTIES ===
    // Subtracted from the score; the negative default turns both into bonuses.
    #[arg(long, default_value_t = -1.0, value_parser = parse_weight, allow_negative_numbers = true)]
    pub weight_start: f64,
    #[arg(long, default_value_t = -1.0, value_parser = parse_weight, allow_negative_numbers = true)]
    pub weight_symmetry: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_length: 1.0,
            weight_turns: 1.0,
            weight_intersections: 1.0,
            weight_angle_variance: 1.0,
            weight_start: -1.0,
            weight_symmetry: -1.0,
        }
    }
}

impl ScoringWeights {
    pub fn as_array(&self) -> [(&'static str, f64); 6] {
        [
            ("weight_length", self.weight_length),
            ("weight_turns", self.weight_turns),
            ("weight_intersections", self.weight_intersections),
            ("weight_angle_variance", self.weight_angle_variance),
            ("weight_start", self.weight_start),
            ("weight_symmetry", self.weight_symmetry),
        ]
    }

    pub fn validate(&self) -> LfResult<()> {
        for (name, v) in self.as_array() {
            if !v.is_finite() || !(WEIGHT_MIN..=WEIGHT_MAX).contains(&v) {
                return Err(LockForgeError::Config(format!(
                    "{} = {} is outside [{}, {}]",
                    name, v, WEIGHT_MIN, WEIGHT_MAX
                )));
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Copies only the weights the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_length);
        update_if_present!(weight_turns);
        update_if_present!(weight_intersections);
        update_if_present!(weight_angle_variance);
        update_if_present!(weight_start);
        update_if_present!(weight_symmetry);
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackParams {
    /// Brute-force guesses per second assumed by the attack-time estimate.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub attempts_per_second: u64,
}

impl Default for AttackParams {
    fn default() -> Self {
        Self {
            attempts_per_second: 10,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PadParams {
    #[arg(long, default_value_t = 300.0)]
    pub pad_size: f64,
    #[arg(long, default_value_t = 40.0)]
    pub pad_margin: f64,
    #[arg(long, default_value_t = 28.0)]
    pub hit_radius: f64,
}

impl Default for PadParams {
    fn default() -> Self {
        Self {
            pad_size: 300.0,
            pad_margin: 40.0,
            hit_radius: 28.0,
        }
    }
}

impl PadParams {
    /// The margins must leave room for the grid and the hit radius must be positive.
    pub fn validate(&self) -> LfResult<()> {
        let all_finite = [self.pad_size, self.pad_margin, self.hit_radius]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(LockForgeError::Config(
                "pad dimensions must be finite numbers".to_string(),
            ));
        }
        if self.pad_margin < 0.0 || self.pad_margin * 2.0 >= self.pad_size {
            return Err(LockForgeError::Config(format!(
                "pad margin {} does not fit a pad of size {}",
                self.pad_margin, self.pad_size
            )));
        }
        if self.hit_radius <= 0.0 {
            return Err(LockForgeError::Config(format!(
                "hit radius must be positive, got {}",
                self.hit_radius
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> PadLayout {
        PadLayout {
            size: self.pad_size,
            margin: self.pad_margin,
            hit_radius: self.hit_radius,
        }
    }
}
