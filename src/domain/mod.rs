// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod effect;
pub mod tracking;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Effect Domain
pub use effect::{effect_display_name, AVAILABLE_EFFECTS, UNKNOWN_EFFECT_NAME};

// Tracking Domain
pub use tracking::{validate_tracking_sample, TrackingSample};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent malformed tracking data and invariant violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid tracking data: {0}")]
    InvalidTracking(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
