// src/integrations/mod.rs
//
// External Integrations Module
//
// The real host platform (UI tree, camera, codec) lives outside this crate.
// Only the UI-tree seam is modeled; everything else has no contract to bridge.

pub mod view_host;

pub use view_host::{HeadlessViewHost, ViewHost};
