// src/application/dto/mod.rs
//
// Channel Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - The wire form is JSON: (method name, argument map) in, one value out
// - Arguments are parsed into a typed command before any handler runs
// - Unknown method names fail the parse; they are a signal, not an error
// - DTOs never leak service or domain internals

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// WIRE ENVELOPES
// ============================================================================

/// A single call arriving over the platform channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The single typed result returned per call.
///
/// `NotImplemented` is structurally distinct from every success payload,
/// including `false` and `null`: a caller can always tell "no such command"
/// apart from "command failed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodResult {
    Success(Value),
    NotImplemented,
}

impl MethodResult {
    pub fn ok(value: Value) -> Self {
        MethodResult::Success(value)
    }
}

// ============================================================================
// TYPED COMMANDS
// ============================================================================

/// The fixed command vocabulary, with per-command argument fields.
///
/// Replaces "cast and hope" extraction from the untyped argument map: each
/// variant carries exactly the fields its handler needs, extracted once here.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCommand {
    Initialize { license_key: Option<String> },
    StartArSession,
    StopArSession,
    SwitchEffect { effect_path: String },
    UpdateShoePosition { ar_data: Option<Value> },
    TakeScreenshot,
    StartRecording,
    StopRecording,
    GetAvailableEffects,
    IsAvailable,
}

impl BridgeCommand {
    /// Parse a wire call into a typed command.
    ///
    /// Returns `None` for method names outside the vocabulary. Optional
    /// string arguments follow the original contract: a missing
    /// `effectPath` becomes the empty string, a missing `licenseKey`
    /// stays absent, and `arData` is passed through for domain validation.
    pub fn parse(call: &MethodCall) -> Option<Self> {
        let args = &call.arguments;

        let command = match call.method.as_str() {
            "initialize" => BridgeCommand::Initialize {
                license_key: args
                    .get("licenseKey")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            "startARSession" => BridgeCommand::StartArSession,
            "stopARSession" => BridgeCommand::StopArSession,
            "switchEffect" => BridgeCommand::SwitchEffect {
                effect_path: args
                    .get("effectPath")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            "updateShoePosition" => BridgeCommand::UpdateShoePosition {
                ar_data: args.get("arData").filter(|v| !v.is_null()).cloned(),
            },
            "takeScreenshot" => BridgeCommand::TakeScreenshot,
            "startRecording" => BridgeCommand::StartRecording,
            "stopRecording" => BridgeCommand::StopRecording,
            "getAvailableEffects" => BridgeCommand::GetAvailableEffects,
            "isAvailable" => BridgeCommand::IsAvailable,
            _ => return None,
        };

        Some(command)
    }
}
