// src/domain/effect.rs
//
// Effect Catalog
//
// Effects are path-like string tokens. In this simulation they are pure
// display labels; no asset is ever loaded or parsed.

/// Fixed catalog returned verbatim by `getAvailableEffects`.
/// Immutable, so order is stable and no uniqueness enforcement is needed.
pub const AVAILABLE_EFFECTS: [&str; 3] = ["effect1.deepar", "effect2.deepar", "effect3.deepar"];

/// Display name used while no effect token is stored.
pub const UNKNOWN_EFFECT_NAME: &str = "Unknown";

/// Display-friendly name of an effect token: the text after the last `/`.
///
/// An absent token renders as [`UNKNOWN_EFFECT_NAME`]. An empty token renders
/// as the empty string (it is a stored value, just a degenerate one).
pub fn effect_display_name(effect_path: Option<&str>) -> &str {
    match effect_path {
        Some(path) => path.rsplit('/').next().unwrap_or(path),
        None => UNKNOWN_EFFECT_NAME,
    }
}
