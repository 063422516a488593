//! Brute-force attack-time estimate derived from a strength score.
//!
//! The score is mapped onto an exponent in `[1, 8]`, so the try count grows
//! from 10 (score 0) to 100,000,000 (score 100). This is a teaching model,
//! not a combinatorial count of the pattern space.

use crate::consts::{MAX_SCORE, TRIES_MAX_EXPONENT, TRIES_MIN_EXPONENT};
use serde::{Deserialize, Serialize};
use std::fmt;

pub fn estimate_tries(score: u8) -> u64 {
    let score = score.min(MAX_SCORE) as f64;
    let exponent =
        TRIES_MIN_EXPONENT + (score / MAX_SCORE as f64) * (TRIES_MAX_EXPONENT - TRIES_MIN_EXPONENT);
    10f64.powf(exponent).round() as u64
}

/// Elapsed attack time, expressed in the coarsest fitting unit pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum AttackDuration {
    Seconds { seconds: f64 },
    Minutes { minutes: u64, seconds: u64 },
    Hours { hours: u64, minutes: u64 },
    Days { days: u64, hours: u64 },
}

impl AttackDuration {
    pub fn from_seconds(sec: f64) -> Self {
        if sec < 60.0 {
            return Self::Seconds { seconds: sec };
        }
        // Round once, before splitting, so seconds never reads 60.
        let total = sec.round() as u64;
        let minutes = total / 60;
        if minutes < 60 {
            return Self::Minutes {
                minutes,
                seconds: total % 60,
            };
        }
        let hours = minutes / 60;
        if hours < 48 {
            return Self::Hours {
                hours,
                minutes: minutes % 60,
            };
        }
        Self::Days {
            days: hours / 24,
            hours: hours % 24,
        }
    }
}

impl fmt::Display for AttackDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Seconds { seconds } => write!(f, "{:.1}s", seconds),
            Self::Minutes { minutes, seconds } => write!(f, "{}m {}s", minutes, seconds),
            Self::Hours { hours, minutes } => write!(f, "{}h {}m", hours, minutes),
            Self::Days { days, hours } => write!(f, "{}d {}h", days, hours),
        }
    }
}

/// Time to exhaust `tries` guesses. A zero rate is treated as one guess per second.
pub fn estimate_duration(tries: u64, attempts_per_second: u64) -> AttackDuration {
    let rate = attempts_per_second.max(1);
    AttackDuration::from_seconds(tries as f64 / rate as f64)
}

/// Formats a count with comma thousands separators (`1,096,478`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackEstimate {
    pub tries: u64,
    pub attempts_per_second: u64,
    pub duration: AttackDuration,
}

impl AttackEstimate {
    pub fn from_score(score: u8, attempts_per_second: u64) -> Self {
        let tries = estimate_tries(score);
        Self {
            tries,
            attempts_per_second,
            duration: estimate_duration(tries, attempts_per_second),
        }
    }
}
