pub mod analyze;
pub mod estimate;
pub mod presets;
pub mod saved;
