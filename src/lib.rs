//! LockForge: geometry analysis and heuristic strength scoring for 3x3 unlock
//! patterns.
//!
//! Raw taps flow one way: `pattern` (canonical sequence) -> `scorer::features`
//! -> `scorer::engine` (score) -> `estimator` (attack time). `api` bundles the
//! pipeline behind a single application-state struct and `store` persists
//! named patterns.

pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod pattern;
pub mod presets;
pub mod scorer;
pub mod store;
