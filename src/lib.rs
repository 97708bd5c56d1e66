// src/lib.rs
// ShoeFit Bridge - Simulated AR try-on bridge
//
// Architecture:
// - Domain-centric: tracking samples and the effect catalog live in domain
// - Explicit: no implicit behavior, no magic
// - Application layer: the channel boundary between UI and services
// - Simulated: the AR engine, camera and UI tree are stand-ins; nothing
//   here captures frames, renders effects or encodes video

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain (Sealed)
// ============================================================================

pub use domain::{
    effect_display_name,
    validate_tracking_sample,
    TrackingSample,
    AVAILABLE_EFFECTS,
};

// ============================================================================
// PUBLIC API - Error Types (Sealed)
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{HeadlessViewHost, ViewHost};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{ArSessionService, EffectSurface};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::state::AppState;
pub use application::{handle_method_call, BridgeCommand, MethodCall, MethodResult};
