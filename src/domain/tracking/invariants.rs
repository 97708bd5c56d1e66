use super::entity::TrackingSample;
use crate::domain::{DomainError, DomainResult};

/// Validates all TrackingSample invariants
pub fn validate_tracking_sample(sample: &TrackingSample) -> DomainResult<()> {
    validate_rotation(sample)?;
    Ok(())
}

/// Rotation invariants:
/// 1. Rotation must be a finite number (no NaN/Inf from the channel)
fn validate_rotation(sample: &TrackingSample) -> DomainResult<()> {
    if !sample.rotation.is_finite() {
        return Err(DomainError::InvalidTracking(format!(
            "rotation is not finite: {}",
            sample.rotation
        )));
    }
    Ok(())
}

/// Critical TrackingSample Invariants:
///
/// 1. landmarks and scale are both present (enforced at parse time)
/// 2. rotation defaults to 0.0, never to a sentinel value
/// 3. A rejected update leaves the previously stored sample untouched
/// 4. Samples are replaced whole; there is no partial merge
