pub mod entity;
pub mod invariants;

pub use entity::TrackingSample;
pub use invariants::validate_tracking_sample;
