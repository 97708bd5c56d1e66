// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer is the boundary between the UI layer and the services
// - It parses loose (method, argument-map) calls into typed commands
// - It converts every internal failure into the command's fallback value
// - It never contains AR behavior of its own

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::handle_method_call;
pub use dto::{BridgeCommand, MethodCall, MethodResult};
pub use state::AppState;
