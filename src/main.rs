// src/main.rs
//
// Host harness for the bridge.
//
// There is no real host platform in this repository, so this binary stands in
// for the UI layer: it wires the state, then drives a scripted sequence of
// channel calls and prints each wire-form response.

use std::sync::Arc;

use serde_json::json;

use shoefit_bridge::application::commands::handle_method_call;
use shoefit_bridge::application::dto::MethodCall;
use shoefit_bridge::application::state::AppState;
use shoefit_bridge::integrations::HeadlessViewHost;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. INFRASTRUCTURE
    let host = Arc::new(HeadlessViewHost::new());

    // 2. APPLICATION STATE
    let mut state = AppState::new(host);

    // 3. SCRIPTED UI-LAYER SESSION
    let script = vec![
        MethodCall::new("isAvailable", json!({})),
        MethodCall::new("initialize", json!({ "licenseKey": "demo-license" })),
        MethodCall::new("getAvailableEffects", json!({})),
        MethodCall::new("startARSession", json!({})),
        MethodCall::new("switchEffect", json!({ "effectPath": "effects/effect1.deepar" })),
        MethodCall::new(
            "updateShoePosition",
            json!({
                "arData": {
                    "landmarks": { "toe": [0.42, 0.13], "heel": [0.40, 0.88] },
                    "rotation": 12.5,
                    "scale": { "x": 1.0, "y": 1.0, "z": 1.0 }
                }
            }),
        ),
        MethodCall::new("takeScreenshot", json!({})),
        MethodCall::new("startRecording", json!({})),
        MethodCall::new("stopRecording", json!({})),
        MethodCall::new("stopARSession", json!({})),
        MethodCall::new("unknownCommand", json!({})),
    ];

    for call in script {
        let response = handle_method_call(&mut state, &call);
        println!("{} -> {}", call.method, serde_json::to_string(&response)?);
    }

    if let Some(surface) = state.session.surface() {
        println!("--- final surface ---");
        println!("{}", surface.status_line());
    }

    Ok(())
}
