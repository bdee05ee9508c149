pub mod composite;
pub mod thresholds;
