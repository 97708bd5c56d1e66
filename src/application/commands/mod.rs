// src/application/commands/mod.rs
//
// Channel Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the channel and the session service
// - Commands accept typed arguments, return channel values
// - Commands handle fallback conversion at the boundary
// - Commands NEVER contain AR behavior

pub mod ar_commands;

pub use ar_commands::*;
