// src/application/commands/ar_commands.rs

use log::warn;
use serde_json::{json, Value};

use crate::application::dto::{BridgeCommand, MethodCall, MethodResult};
use crate::application::error_handling::swallow;
use crate::application::state::AppState;

/// Dispatch a single channel call to its handler.
///
/// Method names outside the vocabulary return the distinct
/// [`MethodResult::NotImplemented`] signal and touch no state.
pub fn handle_method_call(state: &mut AppState, call: &MethodCall) -> MethodResult {
    let Some(command) = BridgeCommand::parse(call) else {
        warn!("Unimplemented method: {}", call.method);
        return MethodResult::NotImplemented;
    };

    match command {
        BridgeCommand::Initialize { license_key } => initialize(state, license_key.as_deref()),
        BridgeCommand::StartArSession => start_ar_session(state),
        BridgeCommand::StopArSession => stop_ar_session(state),
        BridgeCommand::SwitchEffect { effect_path } => switch_effect(state, &effect_path),
        BridgeCommand::UpdateShoePosition { ar_data } => {
            update_shoe_position(state, ar_data.as_ref())
        }
        BridgeCommand::TakeScreenshot => take_screenshot(state),
        BridgeCommand::StartRecording => start_recording(state),
        BridgeCommand::StopRecording => stop_recording(state),
        BridgeCommand::GetAvailableEffects => get_available_effects(state),
        BridgeCommand::IsAvailable => is_available(state),
    }
}

/// Construct/replace the effect surface
pub fn initialize(state: &mut AppState, license_key: Option<&str>) -> MethodResult {
    swallow(
        "initialize",
        state.session.initialize(license_key),
        |_| json!(true),
        json!(false),
    )
}

/// Mark the session active and attach the surface
pub fn start_ar_session(state: &mut AppState) -> MethodResult {
    swallow(
        "startARSession",
        state.session.start_session(),
        |_| json!(true),
        json!(false),
    )
}

/// Mark the session inactive and detach the surface
pub fn stop_ar_session(state: &mut AppState) -> MethodResult {
    swallow(
        "stopARSession",
        state.session.stop_session(),
        |_| json!(true),
        json!(false),
    )
}

/// Store the effect token and refresh the display
pub fn switch_effect(state: &mut AppState, effect_path: &str) -> MethodResult {
    swallow(
        "switchEffect",
        state.session.switch_effect(effect_path),
        |_| json!(true),
        json!(false),
    )
}

/// Validate and store a tracking sample
pub fn update_shoe_position(state: &mut AppState, ar_data: Option<&Value>) -> MethodResult {
    swallow(
        "updateShoePosition",
        state.session.update_shoe_position(ar_data),
        |_| json!(true),
        json!(false),
    )
}

/// Placeholder capture; the fallback is null, not false
pub fn take_screenshot(state: &mut AppState) -> MethodResult {
    swallow(
        "takeScreenshot",
        state.session.take_screenshot(),
        |path| json!(path),
        Value::Null,
    )
}

/// Placeholder recording start
pub fn start_recording(state: &mut AppState) -> MethodResult {
    swallow(
        "startRecording",
        state.session.start_recording(),
        |_| json!(true),
        json!(false),
    )
}

/// Placeholder recording stop; the fallback is null, not false
pub fn stop_recording(state: &mut AppState) -> MethodResult {
    swallow(
        "stopRecording",
        state.session.stop_recording(),
        |path| json!(path),
        Value::Null,
    )
}

/// The fixed catalog; cannot fail, so no fallback path is reachable
pub fn get_available_effects(state: &mut AppState) -> MethodResult {
    MethodResult::ok(json!(state.session.available_effects()))
}

/// Pure capability check
pub fn is_available(state: &mut AppState) -> MethodResult {
    MethodResult::ok(json!(state.session.is_available()))
}
