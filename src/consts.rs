/// Side length of the unlock grid.
pub const GRID_SIZE: usize = 3;

/// Number of nodes on the grid (indices 0..=8).
pub const NODE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The single middle node.
pub const CENTER_NODE: u8 = 4;

/// The four grid corners.
pub const CORNER_NODES: [u8; 4] = [0, 2, 6, 8];

/// Patterns shorter than this are never scored (score is reported as 0).
pub const MIN_SCORABLE_LEN: usize = 4;

/// A turn is counted when the direction change exceeds 10 degrees.
pub const TURN_THRESHOLD_RAD: f64 = std::f64::consts::PI / 18.0;

// === SCORING MODEL ===
pub const BASE_SCORE: f64 = 30.0;
pub const LENGTH_POINTS: f64 = 25.0;
pub const TURN_POINTS: f64 = 20.0;
pub const INTERSECTION_POINTS: f64 = 20.0;
pub const ANGLE_POINTS: f64 = 15.0;
pub const START_PENALTY_POINTS: f64 = 10.0;
pub const SYMMETRY_PENALTY_POINTS: f64 = 10.0;

pub const MIN_SCORE: u8 = 5;
pub const MAX_SCORE: u8 = 100;

// Normalization caps: a feature at (or past) its cap contributes its full points.
pub const LENGTH_NORM_OFFSET: f64 = 4.0;
pub const LENGTH_NORM_SPAN: f64 = 5.0;
pub const TURN_NORM_CAP: f64 = 6.0;
pub const INTERSECTION_NORM_CAP: f64 = 3.0;
pub const ANGLE_VARIANCE_NORM_CAP: f64 = 2.0;

/// User weights are bounded to this closed range.
pub const WEIGHT_MIN: f64 = -2.0;
pub const WEIGHT_MAX: f64 = 2.0;

// === ATTACK ESTIMATE ===
pub const TRIES_MIN_EXPONENT: f64 = 1.0;
pub const TRIES_MAX_EXPONENT: f64 = 8.0;

// === PERSISTENCE ===
pub const SAVED_NAME_MAX_CHARS: usize = 50;
pub const AUTO_NAME_PREFIX: &str = "Pattern";
