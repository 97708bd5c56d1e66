// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod ar_session_service;
pub mod effect_surface;

#[cfg(test)]
mod ar_session_service_tests;

// Re-export all services and their types
pub use ar_session_service::ArSessionService;

pub use effect_surface::EffectSurface;
